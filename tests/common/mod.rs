//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use carelog::config::Config;
use carelog::store::Store;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed startup instant: Monday 19 October 2026, 09:30:15.
pub fn startup_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(9, 30, 15)
        .unwrap()
}

/// Store built from default configuration at [`startup_instant`].
pub fn default_store() -> Store {
    Store::from_config(&Config::default(), startup_instant()).expect("default config is valid")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
