//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen:
/// (State, Intent) -> State. Collaborators a transition needs (such as an
/// id source) are held by the reducer value rather than reached globally.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
