//! State for the checklist widget.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::mvi::UiState;

/// Overall task progress shown by the rotating indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    #[default]
    InProgress,
    Done,
    Planned,
}

/// The fixed cycle the progress indicator rotates through.
pub const PROGRESS: [Progress; 3] = [Progress::InProgress, Progress::Done, Progress::Planned];

impl Progress {
    /// Position of this value in [`PROGRESS`].
    pub fn index(self) -> usize {
        match self {
            Progress::InProgress => 0,
            Progress::Done => 1,
            Progress::Planned => 2,
        }
    }

    /// Value at `index`, wrapping around the cycle.
    pub fn from_index(index: usize) -> Self {
        PROGRESS[index % PROGRESS.len()]
    }

    /// Next value in the cycle.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Progress::InProgress => "In progress",
            Progress::Done => "Done",
            Progress::Planned => "Planned",
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category a checklist item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    #[default]
    Logbook,
    CarePlan,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Logbook => "logbook",
            ItemType::CarePlan => "carePlan",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub description: String,
    pub is_checked: bool,
}

/// A selectable time chip ("started" / "finished").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeToggle {
    pub time: String,
    pub is_selected: bool,
}

impl TimeToggle {
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            is_selected: false,
        }
    }

    /// Same time with the selection flag inverted.
    pub fn toggled(self) -> Self {
        Self {
            is_selected: !self.is_selected,
            ..self
        }
    }
}

/// Snapshot of everything the checklist widget renders.
///
/// Serializes with the camelCase field names the view expects, including
/// `progressIndex` as a plain integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(rename = "progressIndex", serialize_with = "serialize_progress_index")]
    pub progress: Progress,
    pub current_date: String,
    pub started: TimeToggle,
    pub finished: TimeToggle,
    pub item_type: ItemType,
    pub items: Vec<Item>,
}

impl UiState for AppState {}

impl AppState {
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Index of the current progress value, always in `0..PROGRESS.len()`.
    pub fn progress_index(&self) -> usize {
        self.progress.index()
    }

    /// Items belonging to the active item type, in list order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| item.item_type == self.item_type)
    }

    /// First item with the given id.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }
}

fn serialize_progress_index<S: Serializer>(
    progress: &Progress,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(progress.index() as u64)
}
