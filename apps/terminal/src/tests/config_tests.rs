use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_service_without_session() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:5001");
    assert_eq!(settings.session_cookie, None);
    assert_eq!(settings.request_timeout, None);
    assert!(settings.stash_path.ends_with("decomposer/stash.json"));
    assert_eq!(settings.presentation.fade, Duration::from_millis(500));
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        r#"
        server_url = "https://tasks.example.com"
        session_cookie = "session=abc"
        request_timeout_secs = 30
        stash_path = "/tmp/decomposer-stash.json"
        fade_ms = 200

        [presentation.messages]
        empty_task = "Type something first."
        "#,
    )
    .expect("apply");

    assert_eq!(settings.server_url, "https://tasks.example.com");
    assert_eq!(settings.session_cookie.as_deref(), Some("session=abc"));
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(30)));
    assert_eq!(settings.stash_path, PathBuf::from("/tmp/decomposer-stash.json"));
    assert_eq!(settings.presentation.fade, Duration::from_millis(200));
    assert_eq!(settings.presentation.messages.empty_task, "Type something first.");
    assert_eq!(
        settings.presentation.messages.session_expired,
        "Session expired. Please log in."
    );
}

#[test]
fn malformed_file_is_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "server_url = [").is_err());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("DECOMPOSER_SERVER_URL", "http://plain:1"),
            ("APP__SERVER_URL", "http://app:2"),
            ("DECOMPOSER_SESSION_COOKIE", "session=env"),
            ("APP__FADE_MS", "750"),
        ]),
    );

    assert_eq!(settings.server_url, "http://app:2");
    assert_eq!(settings.session_cookie.as_deref(), Some("session=env"));
    assert_eq!(settings.presentation.fade, Duration::from_millis(750));
}

#[test]
fn unparsable_numeric_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[("APP__REQUEST_TIMEOUT_SECS", "soon"), ("APP__FADE_MS", "-1")]),
    );

    assert_eq!(settings.request_timeout, None);
    assert_eq!(settings.presentation.fade, Duration::from_millis(500));
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");
    let err = load_settings(Some(&missing)).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"), "{err}");
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("decomposer.toml");
    std::fs::write(&path, "stash_path = \"custom/stash.json\"\n").expect("write");

    let settings = load_settings(Some(&path)).expect("load");
    assert_eq!(settings.stash_path, PathBuf::from("custom/stash.json"));
}
