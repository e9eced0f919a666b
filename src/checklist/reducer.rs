//! Reducer for the checklist widget.

use crate::ids::IdGenerator;
use crate::mvi::Reducer;

use super::intent::ChecklistIntent;
use super::state::{AppState, Item, ItemType};

/// Placeholder text given to items created by [`ChecklistIntent::AddItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemTemplate {
    pub title: String,
    pub description: String,
}

impl Default for NewItemTemplate {
    fn default() -> Self {
        Self {
            title: "Some new item title".to_string(),
            description: "Some new item description".to_string(),
        }
    }
}

/// Reducer for checklist state transitions.
///
/// Each transition copies the previous state and overrides only the fields
/// the intent names. No I/O happens here; the only collaborator is the id
/// source consulted by `AddItem`.
pub struct ChecklistReducer {
    ids: Box<dyn IdGenerator>,
    template: NewItemTemplate,
}

impl ChecklistReducer {
    pub fn new(ids: Box<dyn IdGenerator>, template: NewItemTemplate) -> Self {
        Self { ids, template }
    }
}

impl Reducer for ChecklistReducer {
    type State = AppState;
    type Intent = ChecklistIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChecklistIntent::SetProgress => AppState {
                progress: state.progress.next(),
                ..state
            },

            ChecklistIntent::SetStartedSelected => AppState {
                started: state.started.toggled(),
                ..state
            },

            ChecklistIntent::SetFinishedSelected => AppState {
                finished: state.finished.toggled(),
                ..state
            },

            ChecklistIntent::SetItemType { item_type } => AppState { item_type, ..state },

            ChecklistIntent::SetItemChecked { checked_item } => {
                let mut items = state.items;
                items.retain(|item| item.id != checked_item.id);
                // Inverts the payload's flag, not the stored one, and moves
                // the item to the end of the list.
                items.push(Item {
                    is_checked: !checked_item.is_checked,
                    ..checked_item
                });
                AppState { items, ..state }
            }

            ChecklistIntent::RemoveItem { id } => {
                let mut items = state.items;
                items.retain(|item| item.id != id);
                AppState { items, ..state }
            }

            ChecklistIntent::AddItem => {
                let mut items = state.items;
                items.push(Item {
                    id: self.ids.next_id(),
                    item_type: ItemType::Logbook,
                    title: self.template.title.clone(),
                    description: self.template.description.clone(),
                    is_checked: false,
                });
                AppState { items, ..state }
            }
        }
    }
}
