//! Date/time service used to build the display strings of the initial state.

use chrono::{Duration, NaiveDateTime};

use crate::config::TimeConfig;

/// Formatting and arithmetic over wall-clock instants.
pub trait DateTimeService {
    /// Human date, e.g. `Monday, 19 October`.
    fn format_date(&self, at: NaiveDateTime) -> String;

    /// Human time, e.g. `09-30 AM`.
    fn format_time(&self, at: NaiveDateTime) -> String;

    fn add_minutes(&self, at: NaiveDateTime, minutes: i64) -> NaiveDateTime;
}

/// [`DateTimeService`] backed by chrono strftime patterns.
///
/// Patterns must pass [`crate::config::Config::validate`] first: chrono
/// panics when a pattern cannot be rendered. [`crate::store::Store::from_config`]
/// validates before building this service.
#[derive(Debug, Clone)]
pub struct ChronoDateTime {
    date_format: String,
    time_format: String,
}

impl ChronoDateTime {
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            time_format: time_format.into(),
        }
    }

    pub fn from_config(config: &TimeConfig) -> Self {
        Self::new(&config.date_format, &config.time_format)
    }
}

impl Default for ChronoDateTime {
    fn default() -> Self {
        Self::from_config(&TimeConfig::default())
    }
}

impl DateTimeService for ChronoDateTime {
    fn format_date(&self, at: NaiveDateTime) -> String {
        at.format(&self.date_format).to_string()
    }

    fn format_time(&self, at: NaiveDateTime) -> String {
        at.format(&self.time_format).to_string()
    }

    fn add_minutes(&self, at: NaiveDateTime, minutes: i64) -> NaiveDateTime {
        at + Duration::minutes(minutes)
    }
}
