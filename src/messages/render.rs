//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::CatalogPhase;
use crate::models::{Location, Skip};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub phase: CatalogPhase,
    pub location: Location,

    /// Filtered display list
    pub skips: Vec<Skip>,
    pub selected_id: Option<i64>,
    pub can_continue: bool,

    /// Set once the user confirms a selection; the UI loop exits on it
    pub completed: Option<Skip>,

    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            phase: CatalogPhase::Loading,
            location: Location::default(),
            skips: Vec::new(),
            selected_id: None,
            can_continue: false,
            completed: None,
            show_help: false,
        }
    }
}
