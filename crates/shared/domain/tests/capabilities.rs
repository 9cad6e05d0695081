use maison_domain::capabilities::CapabilityFlags;
use maison_domain::phase::LaunchPhase;
use maison_domain::profile::LaunchProfile;
use proptest::prelude::*;

#[test]
fn velvet_rope_keeps_everything_dark() {
    let flags = CapabilityFlags::for_phase(LaunchPhase::VelvetRope);
    assert!(!flags.show_navigation());
    assert!(!flags.enable_payments());
    assert!(!flags.waitlist_mode());
    assert!(!flags.public_access());
    assert_eq!(flags, CapabilityFlags::empty());
}

#[test]
fn sanctuary_opens_the_doors_without_payments() {
    let flags = CapabilityFlags::for_phase(LaunchPhase::Sanctuary);
    assert!(flags.show_navigation());
    assert!(!flags.enable_payments());
    assert!(flags.waitlist_mode());
    assert!(flags.public_access());
}

#[test]
fn grand_opening_enables_payments_and_drops_the_waitlist() {
    let flags = CapabilityFlags::for_phase(LaunchPhase::GrandOpening);
    assert!(flags.show_navigation());
    assert!(flags.enable_payments());
    assert!(!flags.waitlist_mode());
    assert!(flags.public_access());
}

#[test]
fn derivation_is_idempotent() {
    for phase in LaunchPhase::all() {
        assert_eq!(CapabilityFlags::for_phase(phase), CapabilityFlags::for_phase(phase));
        assert_eq!(CapabilityFlags::from(phase), CapabilityFlags::for_phase(phase));
    }
}

#[test]
fn no_phase_escapes_the_truth_table() {
    let expected = [
        (LaunchPhase::VelvetRope, [false, false, false, false]),
        (LaunchPhase::Sanctuary, [true, false, true, true]),
        (LaunchPhase::GrandOpening, [true, true, false, true]),
    ];
    for (phase, [nav, pay, wait, public]) in expected {
        let flags = CapabilityFlags::for_phase(phase);
        assert_eq!(flags.show_navigation(), nav, "{phase}: navigation");
        assert_eq!(flags.enable_payments(), pay, "{phase}: payments");
        assert_eq!(flags.waitlist_mode(), wait, "{phase}: waitlist");
        assert_eq!(flags.public_access(), public, "{phase}: public access");
    }
}

fn any_phase() -> impl Strategy<Value = LaunchPhase> {
    prop_oneof![
        Just(LaunchPhase::VelvetRope),
        Just(LaunchPhase::Sanctuary),
        Just(LaunchPhase::GrandOpening),
    ]
}

fn any_profile() -> impl Strategy<Value = LaunchProfile> {
    prop_oneof![
        any_phase().prop_map(|phase| LaunchProfile::Phased { phase }),
        (any::<bool>(), any::<bool>()).prop_map(|(enable_payments, enable_store)| {
            LaunchProfile::Static { enable_payments, enable_store }
        }),
    ]
}

proptest! {
    /// Navigation and public access derive from the same predicate. A phase
    /// that breaks this is a design decision, not an oversight.
    #[test]
    fn public_access_tracks_navigation(phase in any_phase()) {
        let flags = CapabilityFlags::for_phase(phase);
        prop_assert_eq!(flags.public_access(), flags.show_navigation());
    }

    /// Payments and waitlist mode are mutually exclusive in every phase.
    #[test]
    fn payments_and_waitlist_never_coexist(phase in any_phase()) {
        let flags = CapabilityFlags::for_phase(phase);
        prop_assert!(!(flags.enable_payments() && flags.waitlist_mode()));
    }

    /// Both invariants also hold for the reduced static profile.
    #[test]
    fn static_profile_upholds_the_invariants(profile in any_profile()) {
        let flags = profile.flags();
        prop_assert_eq!(flags.public_access(), flags.show_navigation());
        prop_assert!(!(flags.enable_payments() && flags.waitlist_mode()));
    }
}
