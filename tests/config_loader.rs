mod common;

use carelog::checklist::ItemType;
use carelog::config::{Config, ConfigError, IdStrategy};
use carelog::store::Store;

/// Test that Config::default() matches the stock widget.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.time.date_format, "%A, %d %B");
    assert_eq!(config.time.time_format, "%H-%M %p");
    assert_eq!(config.time.finished_offset_minutes, 60);

    assert_eq!(config.items.id_strategy, IdStrategy::Sequential);
    assert_eq!(config.items.id_prefix, "item-");
    assert_eq!(config.items.initial_item_type, ItemType::Logbook);
    assert_eq!(config.items.new_item_title, "Some new item title");
    assert_eq!(config.items.new_item_description, "Some new item description");
    assert_eq!(config.items.seed.len(), 2);

    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

/// Test that a missing file falls back to defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that partial files keep defaults for omitted fields.
#[test]
fn test_partial_config_file() {
    let (_dir, path) = common::temp_config(
        r#"
[time]
finished_offset_minutes = 30

[items]
id_strategy = "uuid"
initial_item_type = "carePlan"
new_item_title = "Untitled"

[[items.seed]]
type = "carePlan"
title = "Medication"
description = "Morning pills"
checked = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.time.finished_offset_minutes, 30);
    assert_eq!(config.time.date_format, "%A, %d %B");
    assert_eq!(config.items.id_strategy, IdStrategy::Uuid);
    assert_eq!(config.items.initial_item_type, ItemType::CarePlan);
    assert_eq!(config.items.new_item_title, "Untitled");
    assert_eq!(config.items.new_item_description, "Some new item description");
    assert_eq!(config.items.seed.len(), 1);
    assert!(config.items.seed[0].checked);
}

/// Test that seeds and offsets flow into the store's initial state.
#[test]
fn test_config_drives_initial_state() {
    let config = Config::from_toml_str(
        r#"
[time]
finished_offset_minutes = 45

[items]
id_prefix = "care-"

[[items.seed]]
type = "logbook"
title = "Walk"
description = "Short walk after lunch"
"#,
    )
    .unwrap();

    let store = Store::from_config(&config, common::startup_instant()).unwrap();
    let state = store.state();
    assert_eq!(state.finished.time, "10-15 AM");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id.as_str(), "care-1");
    assert_eq!(state.items[0].title, "Walk");
}

/// Test that time-zone directives, which a local time cannot render, are rejected.
#[test]
fn test_time_zone_format_rejected() {
    let err = Config::from_toml_str("[time]\ntime_format = \"%H-%M %z\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("time_format"));
}

/// Test that the store refuses a config whose formats cannot be rendered.
#[test]
fn test_store_rejects_unrenderable_config() {
    let mut config = Config::default();
    config.time.time_format = "%H-%M %:z".to_string();

    let result = Store::from_config(&config, common::startup_instant());
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// Test that malformed TOML is a parse error.
#[test]
fn test_malformed_toml() {
    let err = Config::from_toml_str("[time\nfinished_offset_minutes = 30").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// Test that unknown item types in seed data are rejected.
#[test]
fn test_unknown_seed_type() {
    let err = Config::from_toml_str(
        r#"
[[items.seed]]
type = "diary"
title = "x"
description = "y"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// Test that an empty sequential prefix fails validation.
#[test]
fn test_empty_prefix_rejected() {
    let err = Config::from_toml_str("[items]\nid_prefix = \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test that an empty prefix is fine when ids are UUIDs.
#[test]
fn test_empty_prefix_allowed_for_uuid() {
    let config =
        Config::from_toml_str("[items]\nid_strategy = \"uuid\"\nid_prefix = \"\"\n").unwrap();
    assert_eq!(config.items.id_strategy, IdStrategy::Uuid);
}
