//! App layer - state machine and actor for the selection step

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::{AppState, CatalogPhase};
