use maison_domain::config::ApiConfig;
use maison_domain::phase::LaunchPhase;
use maison_domain::profile::LaunchProfile;
use maison_launch::{Launch, init};

fn config_with(profile: LaunchProfile) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.launch = profile;
    config
}

#[test]
fn init_creates_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Launch>());
}

#[test]
fn init_derives_flags_from_the_configured_phase() {
    let config = config_with(LaunchProfile::Phased { phase: LaunchPhase::Sanctuary });
    let slice = init(&config).expect("init should succeed");

    let launch =
        slice.state.as_any().downcast_ref::<Launch>().expect("slice state should be Launch");
    assert_eq!(launch.profile.phase(), Some(LaunchPhase::Sanctuary));
    assert!(launch.flags.waitlist_mode());
    assert!(!launch.flags.enable_payments());
}

#[test]
fn init_supports_the_static_profile() {
    let config =
        config_with(LaunchProfile::Static { enable_payments: true, enable_store: true });
    let slice = init(&config).expect("init should succeed");

    let launch =
        slice.state.as_any().downcast_ref::<Launch>().expect("slice state should be Launch");
    assert_eq!(launch.profile.phase(), None);
    assert!(launch.flags.enable_payments());
    assert!(!launch.flags.waitlist_mode());
}
