//! State container for the logbook / care-plan checklist widget.
//!
//! The host builds a [`store::Store`] once at startup from a [`config::Config`]
//! and the current wall-clock time, then feeds it actions. Rendering and
//! action delivery live outside this crate.

pub mod checklist;
pub mod clock;
pub mod config;
pub mod ids;
pub mod logging;
pub mod mvi;
pub mod store;
