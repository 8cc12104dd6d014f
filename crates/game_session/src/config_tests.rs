use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = SessionConfig::from_toml_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.turn(), Duration::from_secs(3600));
    assert_eq!(config.search.budget(), Duration::from_millis(3000));
    assert_eq!(config.search.grace(), Duration::from_millis(2000));
    assert_eq!(config.search.labels(), SideLabels::default());
    assert!(config.search.endpoint.is_none());
}

#[test]
fn test_full_config() {
    let config = SessionConfig::from_toml_str(
        r#"
        turn_seconds = 90
        human_side = "b"
        first_to_move = "b"

        [search]
        endpoint = "http://localhost:8080/api/search"
        depth = 8
        budget_ms = 1500
        grace_ms = 500
        side_a_label = "b"

        [fallback]
        quiet_bias = 0.25
        "#,
    )
    .unwrap();
    assert_eq!(config.turn_seconds, 90);
    assert_eq!(config.human_side, Side::B);
    assert_eq!(config.first_to_move, Side::B);
    assert_eq!(config.search.endpoint.as_deref(), Some("http://localhost:8080/api/search"));
    assert_eq!(config.search.depth, 8);
    assert_eq!(config.search.labels(), SideLabels::new(SideLabel::B));
    assert_eq!(config.fallback.quiet_bias, 0.25);
}

#[test]
fn test_partial_table_keeps_other_defaults() {
    let config = SessionConfig::from_toml_str("[search]\ndepth = 4\n").unwrap();
    assert_eq!(config.search.depth, 4);
    assert_eq!(config.search.budget_ms, 3000);
    assert_eq!(config.turn_seconds, 3600);
}

#[test]
fn test_rejects_bad_values() {
    for txt in [
        "turn_seconds = 0",
        "[search]\ndepth = 0",
        "[fallback]\nquiet_bias = 1.5",
    ] {
        assert!(matches!(
            SessionConfig::from_toml_str(txt),
            Err(ConfigError::Invalid(_))
        ));
    }
}

#[test]
fn test_rejects_malformed_toml() {
    for txt in ["turn_seconds = \"soon\"", "human_side = \"white\"", "colour = 1", "[search"] {
        assert!(matches!(
            SessionConfig::from_toml_str(txt),
            Err(ConfigError::Parse(_))
        ));
    }
}

#[test]
fn test_missing_file() {
    let err = SessionConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_adapter_without_endpoint_is_local() {
    let adapter = SessionConfig::default().build_adapter().unwrap();
    assert!(!adapter.has_remote());
}

#[test]
fn test_adapter_with_endpoint_is_remote() {
    let mut config = SessionConfig::default();
    config.search.endpoint = Some("http://127.0.0.1:9/search".into());
    assert!(config.build_adapter().unwrap().has_remote());
}
