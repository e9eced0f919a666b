//! In-process host for the checklist reducer.
//!
//! The store owns the current snapshot and replaces it wholesale after
//! every dispatched intent. It is single-threaded: dispatch takes
//! `&mut self` and nothing is shared.

use chrono::NaiveDateTime;

use crate::checklist::{
    create_initial_state, Action, ActionError, AppState, ChecklistIntent, ChecklistReducer,
    NewItemTemplate,
};
use crate::clock::ChronoDateTime;
use crate::config::{Config, ConfigError, IdStrategy};
use crate::ids::{IdGenerator, SequentialIds, UuidIds};
use crate::mvi::Reducer;

pub struct Store {
    initial: AppState,
    state: AppState,
    reducer: ChecklistReducer,
}

impl Store {
    pub fn new(initial: AppState, reducer: ChecklistReducer) -> Self {
        Self {
            state: initial.clone(),
            initial,
            reducer,
        }
    }

    /// Builds the date/time service, id source, and initial snapshot from
    /// configuration. `now` is the instant the host started at.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationError`] if the configuration does not
    /// validate, e.g. a format pattern that cannot be rendered.
    pub fn from_config(config: &Config, now: NaiveDateTime) -> Result<Self, ConfigError> {
        config.validate()?;

        let clock = ChronoDateTime::from_config(&config.time);
        let ids: Box<dyn IdGenerator> = match config.items.id_strategy {
            IdStrategy::Sequential => Box::new(SequentialIds::new(&config.items.id_prefix)),
            IdStrategy::Uuid => Box::new(UuidIds),
        };

        let initial = create_initial_state(now, config, &clock, ids.as_ref());
        tracing::info!(
            items = initial.items.len(),
            date = %initial.current_date,
            "Checklist store initialized"
        );

        let template = NewItemTemplate {
            title: config.items.new_item_title.clone(),
            description: config.items.new_item_description.clone(),
        };
        Ok(Self::new(initial, ChecklistReducer::new(ids, template)))
    }

    /// Current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Snapshot the store started from.
    pub fn initial_state(&self) -> &AppState {
        &self.initial
    }

    /// Computes the state following `action` without storing it.
    ///
    /// `None` stands for "no state yet" and starts from the initial snapshot.
    /// Unrecognized actions return the input state unchanged.
    pub fn reduce(
        &self,
        state: Option<AppState>,
        action: &Action,
    ) -> Result<AppState, ActionError> {
        let state = state.unwrap_or_else(|| self.initial.clone());
        match action.decode()? {
            Some(intent) => Ok(self.reducer.reduce(state, intent)),
            None => Ok(state),
        }
    }

    /// Applies a typed intent and returns the new snapshot.
    pub fn dispatch(&mut self, intent: ChecklistIntent) -> &AppState {
        tracing::debug!(action = intent.name(), "Dispatching intent");

        if let ChecklistIntent::SetItemChecked { checked_item } = &intent {
            if self.state.item(&checked_item.id).is_none() {
                tracing::debug!(
                    id = %checked_item.id,
                    "setItemChecked for an id not in the list appends it"
                );
            }
        }

        self.state = self.reducer.reduce(self.state.clone(), intent);
        &self.state
    }

    /// Decodes and applies an action.
    ///
    /// On error the current snapshot is left untouched.
    pub fn dispatch_action(&mut self, action: &Action) -> Result<&AppState, ActionError> {
        match action.decode() {
            Ok(Some(intent)) => Ok(self.dispatch(intent)),
            Ok(None) => {
                tracing::trace!(action = %action.kind, "Ignoring unhandled action");
                Ok(&self.state)
            }
            Err(e) => {
                tracing::warn!(action = %action.kind, "Rejected action: {}", e);
                Err(e)
            }
        }
    }
}
