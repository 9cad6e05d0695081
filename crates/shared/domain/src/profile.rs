use crate::capabilities::CapabilityFlags;
use crate::phase::LaunchPhase;
use serde::{Deserialize, Serialize};

/// Named launch configuration profiles.
///
/// Two flag shapes exist across deployments: the phase-keyed switchboard and
/// a reduced static pair with no phase concept. They are distinct profiles;
/// a deployment selects one explicitly and their semantics are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "kebab-case")]
pub enum LaunchProfile {
    /// Phase-keyed switchboard: all four capabilities derive from the phase.
    Phased { phase: LaunchPhase },
    /// Reduced shape: a store toggle and a payments toggle. It has no
    /// waitlist concept, so waitlist mode is always off here.
    Static { enable_payments: bool, enable_store: bool },
}

impl LaunchProfile {
    /// Derives the capability set for this profile.
    #[must_use]
    pub fn flags(self) -> CapabilityFlags {
        match self {
            Self::Phased { phase } => CapabilityFlags::for_phase(phase),
            Self::Static { enable_payments, enable_store } => {
                let mut flags = CapabilityFlags::empty();
                flags.set(CapabilityFlags::SHOW_NAVIGATION, enable_store);
                flags.set(CapabilityFlags::PUBLIC_ACCESS, enable_store);
                flags.set(CapabilityFlags::ENABLE_PAYMENTS, enable_payments);
                flags
            },
        }
    }

    /// The active phase, when this profile has one.
    #[must_use]
    pub const fn phase(self) -> Option<LaunchPhase> {
        match self {
            Self::Phased { phase } => Some(phase),
            Self::Static { .. } => None,
        }
    }
}

impl Default for LaunchProfile {
    /// The most restrictive stance: a missing launch section keeps the
    /// site behind the rope instead of accidentally opening it.
    fn default() -> Self {
        Self::Phased { phase: LaunchPhase::VelvetRope }
    }
}
