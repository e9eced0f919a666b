use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checklist::ItemType;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub items: ItemsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display formats for the date and time chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// strftime pattern for the header date (default: "%A, %d %B").
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// strftime pattern for the started/finished chips (default: "%H-%M %p").
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Minutes between the started and finished chips (default: 60).
    #[serde(default = "default_finished_offset")]
    pub finished_offset_minutes: u32,
}

/// How fresh item ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

/// Item list defaults: seed data, placeholder text for new items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Prefix for sequential ids (default: "item-").
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default)]
    pub initial_item_type: ItemType,
    #[serde(default = "default_new_item_title")]
    pub new_item_title: String,
    #[serde(default = "default_new_item_description")]
    pub new_item_description: String,
    /// Items present when the widget starts.
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedItem>,
}

/// An item present in the initial state. Its id is generated at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub checked: bool,
}

/// Logging output for the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_date_format() -> String {
    "%A, %d %B".to_string()
}

fn default_time_format() -> String {
    "%H-%M %p".to_string()
}

fn default_finished_offset() -> u32 {
    60
}

fn default_id_prefix() -> String {
    "item-".to_string()
}

fn default_new_item_title() -> String {
    "Some new item title".to_string()
}

fn default_new_item_description() -> String {
    "Some new item description".to_string()
}

fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem {
            item_type: ItemType::Logbook,
            title: "Give water every two hours".to_string(),
            description: "Needs to drink a water every two hour".to_string(),
            checked: false,
        },
        SeedItem {
            item_type: ItemType::CarePlan,
            title: "Shower".to_string(),
            description: "Shower every two hours".to_string(),
            checked: false,
        },
    ]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            finished_offset_minutes: default_finished_offset(),
        }
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            id_prefix: default_id_prefix(),
            initial_item_type: ItemType::default(),
            new_item_title: default_new_item_title(),
            new_item_description: default_new_item_description(),
            seed: default_seed(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
