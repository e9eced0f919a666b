//! Untyped action values and their decoding into [`ChecklistIntent`]s.
//!
//! The dispatch mechanism hands the store an [`Action`]: a `type`
//! discriminator plus whatever payload fields travel with it. Decoding is
//! where malformed input is caught, so the reducer itself never fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::intent::ChecklistIntent;
use super::state::ItemId;

/// Errors produced while turning an [`Action`] into an intent.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Failed to decode action: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid payload for '{action}': field '{field}' {reason}")]
    InvalidPayload {
        action: &'static str,
        field: &'static str,
        reason: String,
    },
}

/// An action as delivered by the dispatch mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Discriminator, e.g. `"setItemType"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining fields of the action object.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Only the id of an `itemToRemove` payload is significant.
#[derive(Deserialize)]
struct ItemRef {
    id: ItemId,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Adds a payload field.
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.payload.insert(field.into(), value);
        self
    }

    /// Parses an action object such as `{"type":"setItemType","itemType":"carePlan"}`.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the action into a typed intent.
    ///
    /// Returns `Ok(None)` for discriminators the checklist does not handle;
    /// those leave the state unchanged.
    pub fn decode(&self) -> Result<Option<ChecklistIntent>, ActionError> {
        let intent = match self.kind.as_str() {
            "setProgress" => ChecklistIntent::SetProgress,
            "setStartedSelected" => ChecklistIntent::SetStartedSelected,
            "setFinishedSelected" => ChecklistIntent::SetFinishedSelected,
            "setItemType" => ChecklistIntent::SetItemType {
                item_type: self.field("setItemType", "itemType")?,
            },
            "setItemChecked" => ChecklistIntent::SetItemChecked {
                checked_item: self.field("setItemChecked", "checkedItem")?,
            },
            "removeItem" => {
                let target: ItemRef = self.field("removeItem", "itemToRemove")?;
                ChecklistIntent::RemoveItem { id: target.id }
            }
            "addItem" => ChecklistIntent::AddItem,
            _ => return Ok(None),
        };
        Ok(Some(intent))
    }

    fn field<T: DeserializeOwned>(
        &self,
        action: &'static str,
        field: &'static str,
    ) -> Result<T, ActionError> {
        let value = self
            .payload
            .get(field)
            .ok_or_else(|| ActionError::InvalidPayload {
                action,
                field,
                reason: "is missing".to_string(),
            })?;

        T::deserialize(value).map_err(|e| ActionError::InvalidPayload {
            action,
            field,
            reason: format!("is malformed: {e}"),
        })
    }
}
