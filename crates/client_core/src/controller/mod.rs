//! Controller layer: panel state, page events, and the submission workflow.

pub mod events;
pub mod ui_state;
pub mod workflow;
