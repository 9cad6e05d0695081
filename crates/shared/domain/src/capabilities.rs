use crate::phase::LaunchPhase;
use bitflags::bitflags;

bitflags! {
    /// Capability switchboard derived from the active [`LaunchPhase`].
    ///
    /// The set is a pure, total function of the phase: for every phase there
    /// is exactly one valid combination, computed once at startup and read
    /// many times. No code path mutates a derived set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CapabilityFlags: u8 {
        const SHOW_NAVIGATION = 1 << 0;
        const ENABLE_PAYMENTS = 1 << 1;
        const WAITLIST_MODE = 1 << 2;
        const PUBLIC_ACCESS = 1 << 3;
    }
}

impl CapabilityFlags {
    /// Derives the capability set for a phase.
    ///
    /// The rules are intent, not a lookup table, so any future phase keeps
    /// them by construction:
    /// * navigation and public access open up for everything past the rope;
    /// * payments exist only at grand opening;
    /// * the waitlist replaces checkout exactly during the sanctuary phase.
    #[must_use]
    pub fn for_phase(phase: LaunchPhase) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::SHOW_NAVIGATION, phase != LaunchPhase::VelvetRope);
        flags.set(Self::ENABLE_PAYMENTS, phase == LaunchPhase::GrandOpening);
        flags.set(Self::WAITLIST_MODE, phase == LaunchPhase::Sanctuary);
        flags.set(Self::PUBLIC_ACCESS, phase != LaunchPhase::VelvetRope);
        flags
    }

    /// Whether the primary navigation is rendered at all.
    #[must_use]
    pub const fn show_navigation(self) -> bool {
        self.contains(Self::SHOW_NAVIGATION)
    }

    /// Whether checkout/payment collaborators may be invoked.
    #[must_use]
    pub const fn enable_payments(self) -> bool {
        self.contains(Self::ENABLE_PAYMENTS)
    }

    /// Whether purchase affordances are replaced by the email waitlist.
    #[must_use]
    pub const fn waitlist_mode(self) -> bool {
        self.contains(Self::WAITLIST_MODE)
    }

    /// Whether non-home routes are reachable without redirecting home.
    #[must_use]
    pub const fn public_access(self) -> bool {
        self.contains(Self::PUBLIC_ACCESS)
    }
}

impl From<LaunchPhase> for CapabilityFlags {
    fn from(phase: LaunchPhase) -> Self {
        Self::for_phase(phase)
    }
}
