use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The deploy-time stage of the phased public launch.
///
/// Exactly one phase is active process-wide. It is selected by configuration
/// at startup and immutable afterwards; changing it means redeploying with a
/// new configuration value. Parsing is strict: an unrecognized literal is a
/// hard error, never a silent default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LaunchPhase {
    /// Invite-only pre-launch. The site is dark; side doors redirect home.
    VelvetRope,
    /// Soft launch. Public browsing, purchases replaced by the waitlist.
    Sanctuary,
    /// Full public launch with payments enabled.
    GrandOpening,
}

impl LaunchPhase {
    /// All phases in launch order, for exhaustive checks.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::VelvetRope, Self::Sanctuary, Self::GrandOpening]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn literals_round_trip() {
        for phase in LaunchPhase::all() {
            let literal = phase.to_string();
            assert_eq!(LaunchPhase::from_str(&literal).unwrap(), phase);
        }
        assert_eq!(LaunchPhase::VelvetRope.to_string(), "velvet-rope");
    }

    #[test]
    fn unknown_literal_is_rejected() {
        assert!(LaunchPhase::from_str("soft-open").is_err());
        assert!(serde_json::from_str::<LaunchPhase>("\"soft-open\"").is_err());
    }
}
