//! Facade crate for Maison features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `maison` with the desired feature flags (`server`).
//! - Call `maison::init` (server) to register feature slices; extend as new slices appear.

use maison_backend::Backend;
pub use maison_domain as domain;
use maison_domain::config::ApiConfig;
pub use maison_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use maison_checkout::routes::checkout_router;
        pub use maison_kernel::server::router::system_router;
        pub use maison_launch::guard::public_access_guard;
        pub use maison_launch::routes::launch_router;
        pub use maison_waitlist::routes::waitlist_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use maison_checkout as checkout;
    pub use maison_launch as launch;
    pub use maison_waitlist as waitlist;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "launch",
        "waitlist",
        "checkout",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// The launch switchboard comes first: every other slice is gated on the
/// capabilities it derives.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    _backend: &Backend,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Launch switchboard (flag store + capability gate)
    slices.push(features::launch::init(config)?);

    // Waitlist (mailing-list collaborator)
    slices.push(features::waitlist::init(config)?);

    // Checkout (optional payment collaborator)
    slices.push(features::checkout::init(config)?);

    Ok(slices)
}
