use maison_domain::config::ApiConfig;
use maison_domain::phase::LaunchPhase;
use maison_kernel::config::load_config;
use std::fs;

#[test]
fn loads_layered_config_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9001

[launch]
profile = "phased"
phase = "grand-opening"

[backend]
url = "https://project.example.dev"
api_key = "anon"
"#,
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("config should load");
    assert_eq!(cfg.server.port, 9001);
    assert_eq!(cfg.launch.phase(), Some(LaunchPhase::GrandOpening));
    assert!(cfg.launch.flags().enable_payments());
}

#[test]
fn unknown_phase_literal_aborts_the_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[launch]
profile = "phased"
phase = "pre-opening-gala"
"#,
    )
    .expect("write config");

    // The deployment must fail to boot, not fall back to a default phase.
    assert!(load_config::<ApiConfig>(Some(&path)).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_config::<ApiConfig>(Some("definitely/not/here")).is_err());
}
