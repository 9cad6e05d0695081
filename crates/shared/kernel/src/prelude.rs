//! Ergonomic re-exports for slice and app crates.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use maison_domain::capabilities::CapabilityFlags;
pub use maison_domain::config::ApiConfig;
pub use maison_domain::phase::LaunchPhase;
pub use maison_domain::profile::LaunchProfile;
pub use maison_domain::registry::{FeatureSlice, InitializedSlice};
