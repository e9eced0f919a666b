//! Construction of the snapshot the widget starts from.

use chrono::NaiveDateTime;

use crate::clock::DateTimeService;
use crate::config::Config;
use crate::ids::IdGenerator;

use super::state::{AppState, Item, Progress, TimeToggle};

/// Builds the initial state from the instant the host started at.
///
/// The date and both time chips are rendered once here and never
/// recomputed. Seed items receive ids from `ids` in configuration order.
pub fn create_initial_state(
    now: NaiveDateTime,
    config: &Config,
    clock: &dyn DateTimeService,
    ids: &dyn IdGenerator,
) -> AppState {
    let finished_at = clock.add_minutes(now, i64::from(config.time.finished_offset_minutes));

    let items = config
        .items
        .seed
        .iter()
        .map(|seed| Item {
            id: ids.next_id(),
            item_type: seed.item_type,
            title: seed.title.clone(),
            description: seed.description.clone(),
            is_checked: seed.checked,
        })
        .collect();

    AppState {
        progress: Progress::InProgress,
        current_date: clock.format_date(now),
        started: TimeToggle::new(clock.format_time(now)),
        finished: TimeToggle::new(clock.format_time(finished_at)),
        item_type: config.items.initial_item_type,
        items,
    }
}
