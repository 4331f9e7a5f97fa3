use deepvoice::infrastructure::observability::TracingConfig;

#[test]
fn given_no_filter_when_building_tracing_config_then_uses_default_filter() {
    let config = TracingConfig::new("prod", true, None);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "info,deepvoice=debug,tower_http=debug");
}

#[test]
fn given_explicit_filter_when_building_tracing_config_then_keeps_it() {
    let config = TracingConfig::new("local", false, Some("warn".to_string()));

    assert_eq!(config.default_filter, "warn");
    assert!(!config.json_format);
}

#[test]
fn given_default_tracing_config_when_created_then_is_local_plain_text() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, "local");
    assert!(!config.json_format);
}
