//! Intents for the checklist widget.

use crate::mvi::Intent;

use super::state::{Item, ItemId, ItemType};

/// Intents that can be dispatched to the checklist reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChecklistIntent {
    /// Advance the progress indicator to the next value.
    SetProgress,

    /// Toggle selection of the "started" time chip.
    SetStartedSelected,

    /// Toggle selection of the "finished" time chip.
    SetFinishedSelected,

    /// Switch the active item category.
    SetItemType { item_type: ItemType },

    /// User clicked an item's checkbox.
    ///
    /// Carries the item as the view rendered it. The stored copy is replaced
    /// by this one with `is_checked` inverted and moved to the end of the list.
    SetItemChecked { checked_item: Item },

    /// Remove every item with this id.
    RemoveItem { id: ItemId },

    /// Append a new placeholder item.
    AddItem,
}

impl Intent for ChecklistIntent {}

impl ChecklistIntent {
    /// Action discriminator this intent is dispatched under.
    pub fn name(&self) -> &'static str {
        match self {
            ChecklistIntent::SetProgress => "setProgress",
            ChecklistIntent::SetStartedSelected => "setStartedSelected",
            ChecklistIntent::SetFinishedSelected => "setFinishedSelected",
            ChecklistIntent::SetItemType { .. } => "setItemType",
            ChecklistIntent::SetItemChecked { .. } => "setItemChecked",
            ChecklistIntent::RemoveItem { .. } => "removeItem",
            ChecklistIntent::AddItem => "addItem",
        }
    }
}
