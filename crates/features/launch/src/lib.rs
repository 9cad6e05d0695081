//! Launch feature slice: the flag store and the capability gate.
//!
//! The active [`LaunchProfile`] is captured once at startup from configuration
//! and the capability set is derived right there; both are immutable for the
//! process lifetime. Everything that gates UI affordances or collaborator
//! calls reads this slice.

mod error;
#[cfg(feature = "server")]
pub mod guard;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{LaunchError, LaunchErrorExt};
use maison_domain::capabilities::CapabilityFlags;
use maison_domain::config::ApiConfig;
use maison_domain::profile::LaunchProfile;
use maison_kernel::domain::registry::InitializedSlice;

/// Launch switchboard state, fixed at startup.
#[maison_derive::maison_slice]
pub struct Launch {
    pub profile: LaunchProfile,
    pub flags: CapabilityFlags,
}

/// Initialize the launch switchboard from the deploy-time configuration.
///
/// Derivation happens exactly once here; consumers only ever read the result.
///
/// # Errors
///
/// Currently infallible in practice (an invalid phase literal already failed
/// config deserialization), but kept fallible like every slice initializer.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, LaunchError> {
    let profile = config.launch;
    let flags = profile.flags();

    tracing::info!(
        phase = ?profile.phase(),
        show_navigation = flags.show_navigation(),
        enable_payments = flags.enable_payments(),
        waitlist_mode = flags.waitlist_mode(),
        public_access = flags.public_access(),
        "Launch switchboard initialized"
    );

    let inner = LaunchInner { profile, flags };

    let slice = Launch::new(inner);

    Ok(InitializedSlice::new(slice))
}
