use rapport_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RapportConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "rapport.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Availability defaults
    assert_eq!(config.availability.min_interactions_for_high_quality, 5);
    assert_eq!(config.availability.min_interactions_for_medium_quality, 2);
    assert_eq!(config.availability.min_recency_days, 30);
    assert!(!config.availability.require_reciprocity_data);

    // Fallback defaults
    assert_eq!(config.fallback.max_low_quality_confidence, 0.3);
    assert_eq!(config.fallback.max_medium_quality_confidence, 0.6);
    assert!(config.fallback.require_confirmation_for_low);
    assert!(!config.fallback.require_confirmation_for_medium);

    // Metrics cache defaults
    assert_eq!(config.metrics_cache.ttl_ms, 3_600_000);
    assert_eq!(config.metrics_cache.default_window_days, 7);

    // Pipeline defaults
    assert_eq!(config.pipeline.snapshot_ttl_ms, 43_200_000);
    assert_eq!(config.pipeline.required_fields.len(), 4);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.run_metrics_enabled);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[availability]
min_recency_days = 14
require_reciprocity_data = true

[fallback]
require_confirmation_for_medium = true
"#;
    let config = RapportConfig::from_toml(toml).unwrap();
    assert_eq!(config.availability.min_recency_days, 14);
    assert!(config.availability.require_reciprocity_data);
    // Non-overridden fields keep defaults
    assert_eq!(config.availability.min_interactions_for_high_quality, 5);
    assert!(config.fallback.require_confirmation_for_medium);
    assert_eq!(config.fallback.max_low_quality_confidence, 0.3);
}

#[test]
fn config_rejects_ceiling_outside_unit_interval() {
    let err = RapportConfig::from_toml("[fallback]\nmax_medium_quality_confidence = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("max_medium_quality_confidence"));
}

#[test]
fn config_rejects_low_ceiling_above_medium() {
    let toml = "[fallback]\nmax_low_quality_confidence = 0.7\nmax_medium_quality_confidence = 0.6\n";
    assert!(RapportConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = RapportConfig::from_toml("[storage\n").unwrap_err();
    assert_eq!(err.code(), "config_invalid");
}

#[test]
fn config_roundtrips_through_toml() {
    let config = RapportConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed = RapportConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.availability, config.availability);
    assert_eq!(parsed.fallback, config.fallback);
    assert_eq!(parsed.pipeline, config.pipeline);
}

#[test]
fn defaults_follow_constants() {
    use rapport_core::constants;
    assert!(!constants::VERSION.is_empty());
    assert_eq!(MetricsCacheConfig::default().ttl_ms, constants::WEEKLY_REPORT_CACHE_TTL_MS);
    assert_eq!(MetricsCacheConfig::default().default_window_days, constants::DEFAULT_WINDOW_DAYS);
    assert_eq!(PipelineConfig::default().snapshot_ttl_ms, constants::NETWORK_ACTION_SNAPSHOT_TTL_MS);
}
