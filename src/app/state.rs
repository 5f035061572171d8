//! App state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::models::{Location, Skip};

/// Catalog load phase. Tagged union so that impossible combinations
/// (loading and error at once) cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogPhase {
    /// Fetch in flight
    Loading,
    /// Catalog loaded (possibly empty after filtering)
    Ready,
    /// Fetch failed with a user-facing message
    Error(String),
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub phase: CatalogPhase,
    pub location: Location,

    /// Filtered, ordered display list of available offerings
    pub skips: Vec<Skip>,
    /// Currently selected offering id, if any
    pub selected_id: Option<i64>,

    pub next_request_id: u64,
    /// Id of the in-flight fetch; responses with any other id are stale
    pub pending_request_id: Option<u64>,

    /// Offering the user confirmed with Continue; set ends the step
    pub completed: Option<Skip>,

    pub show_help: bool,
}

impl AppState {
    pub fn new(location: Location) -> Self {
        AppState {
            phase: CatalogPhase::Loading,
            location,
            skips: Vec::new(),
            selected_id: None,
            next_request_id: 1,
            pending_request_id: None,
            completed: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The selected offering, or None when the id is absent from the list
    pub fn selected_skip(&self) -> Option<&Skip> {
        let id = self.selected_id?;
        self.skips.iter().find(|s| s.id == id)
    }

    /// Continue is available iff the selection references a listed offering
    pub fn can_continue(&self) -> bool {
        self.selected_skip().is_some()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            phase: self.phase.clone(),
            location: self.location.clone(),
            skips: self.skips.clone(),
            selected_id: self.selected_id,
            can_continue: self.can_continue(),
            completed: self.completed.clone(),
            show_help: self.show_help,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
