//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, CatalogPhase};
use crate::constants::GRID_COLUMNS;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Catalog loading
    // ========================

    /// Start a fresh catalog fetch, discarding all prior state.
    /// Used both for the initial load and for retries.
    pub fn begin_fetch(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.phase = CatalogPhase::Loading;
        self.skips.clear();
        self.selected_id = None;
        self.pending_request_id = Some(id);
        NetworkCommand::FetchCatalog {
            id,
            location: self.location.clone(),
        }
    }

    /// Re-run the load from scratch. No-op while a fetch is in flight.
    pub fn retry(&mut self) -> Option<NetworkCommand> {
        if self.phase == CatalogPhase::Loading {
            return None;
        }
        tracing::info!(postcode = %self.location.postcode, "Retrying catalog fetch");
        Some(self.begin_fetch())
    }

    /// Apply a network response. Responses whose id does not match the
    /// pending fetch are stale (superseded by a retry) and are discarded.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Discarding stale catalog response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Catalog { skips, .. } => {
                self.selected_id = skips.first().map(|s| s.id);
                self.skips = skips;
                self.phase = CatalogPhase::Ready;
            }
            NetworkResponse::Error { message, .. } => {
                self.skips.clear();
                self.selected_id = None;
                self.phase = CatalogPhase::Error(message);
            }
        }
    }

    // ========================
    // Selection
    // ========================

    /// Select the offering with the given id. Ids not present in the
    /// display list are silently ignored.
    pub fn select_skip(&mut self, id: i64) {
        if self.skips.iter().any(|s| s.id == id) {
            self.selected_id = Some(id);
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id?;
        self.skips.iter().position(|s| s.id == id)
    }

    fn select_index(&mut self, index: usize) {
        if let Some(skip) = self.skips.get(index) {
            self.selected_id = Some(skip.id);
        }
    }

    pub fn select_next(&mut self) {
        match self.selected_index() {
            Some(i) if i + 1 < self.skips.len() => self.select_index(i + 1),
            Some(_) => {}
            None => self.select_index(0),
        }
    }

    pub fn select_prev(&mut self) {
        match self.selected_index() {
            Some(i) => self.select_index(i.saturating_sub(1)),
            None => self.select_index(0),
        }
    }

    /// Move selection one grid row up (cards are laid out GRID_COLUMNS wide)
    pub fn select_row_up(&mut self) {
        match self.selected_index() {
            Some(i) if i >= GRID_COLUMNS => self.select_index(i - GRID_COLUMNS),
            Some(_) => {}
            None => self.select_index(0),
        }
    }

    /// Move selection one grid row down
    pub fn select_row_down(&mut self) {
        match self.selected_index() {
            Some(i) if i + GRID_COLUMNS < self.skips.len() => {
                self.select_index(i + GRID_COLUMNS)
            }
            Some(_) => {}
            None => self.select_index(0),
        }
    }

    // ========================
    // Continue
    // ========================

    /// Confirm the current selection and end the step. Disabled when no
    /// valid selection exists.
    pub fn request_continue(&mut self) {
        if let Some(skip) = self.selected_skip() {
            tracing::info!(id = skip.id, size = skip.size, "Skip selected, continuing");
            self.completed = Some(skip.clone());
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Skip};

    fn skip(id: i64, size: u32) -> Skip {
        Skip {
            id,
            size,
            hire_period_days: 14,
            price_before_vat: 200.0,
            vat: 40.0,
            transport_cost: None,
            area: String::from("Lowestoft"),
            allowed_on_road: true,
            allows_heavy_waste: false,
            forbidden: false,
        }
    }

    fn ready_state(skips: Vec<Skip>) -> AppState {
        let mut state = AppState::new(Location::default());
        let cmd = state.begin_fetch();
        let id = match cmd {
            NetworkCommand::FetchCatalog { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Catalog { id, skips });
        state
    }

    #[test]
    fn test_initial_selection_is_first_offering() {
        let state = ready_state(vec![skip(7, 4), skip(8, 6)]);
        assert_eq!(state.phase, CatalogPhase::Ready);
        assert_eq!(state.selected_id, Some(7));
        assert!(state.can_continue());
    }

    #[test]
    fn test_empty_catalog_disables_continue() {
        let state = ready_state(vec![]);
        assert_eq!(state.phase, CatalogPhase::Ready);
        assert_eq!(state.selected_id, None);
        assert!(!state.can_continue());
    }

    #[test]
    fn test_select_present_id_updates_summary_source() {
        let mut state = ready_state(vec![skip(1, 4), skip(2, 8)]);
        state.select_skip(2);
        let selected = state.selected_skip().unwrap();
        assert_eq!(selected.id, 2);
        assert_eq!(selected.size, 8);
    }

    #[test]
    fn test_select_absent_id_is_ignored() {
        let mut state = ready_state(vec![skip(1, 4), skip(2, 8)]);
        state.select_skip(99);
        assert_eq!(state.selected_id, Some(1));
    }

    #[test]
    fn test_error_response_enters_error_phase() {
        let mut state = AppState::new(Location::default());
        let cmd = state.begin_fetch();
        let id = match cmd {
            NetworkCommand::FetchCatalog { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Error {
            id,
            message: String::from("Connection failed"),
        });
        assert_eq!(state.phase, CatalogPhase::Error(String::from("Connection failed")));
        assert!(state.skips.is_empty());
        assert!(!state.can_continue());
    }

    #[test]
    fn test_retry_goes_through_loading_with_fresh_id() {
        let mut state = AppState::new(Location::default());
        let first = state.begin_fetch();
        let first_id = match first {
            NetworkCommand::FetchCatalog { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Error {
            id: first_id,
            message: String::from("boom"),
        });

        let cmd = state.retry().expect("retry should issue a command");
        assert_eq!(state.phase, CatalogPhase::Loading);
        match cmd {
            NetworkCommand::FetchCatalog { id, .. } => assert_ne!(id, first_id),
            _ => panic!("expected FetchCatalog"),
        }
        // A second retry while loading must not issue another request
        assert!(state.retry().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new(Location::default());
        let first = state.begin_fetch();
        let first_id = match first {
            NetworkCommand::FetchCatalog { id, .. } => id,
            _ => unreachable!(),
        };
        state.handle_response(NetworkResponse::Error {
            id: first_id,
            message: String::from("boom"),
        });
        let _second = state.retry().unwrap();

        // Late result from the superseded request arrives after the retry
        state.handle_response(NetworkResponse::Catalog {
            id: first_id,
            skips: vec![skip(1, 4)],
        });
        assert_eq!(state.phase, CatalogPhase::Loading);
        assert!(state.skips.is_empty());
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn test_response_after_settled_fetch_is_discarded() {
        let mut state = ready_state(vec![skip(1, 4)]);
        state.select_skip(1);
        // Duplicate delivery of an already-settled request id
        state.handle_response(NetworkResponse::Catalog {
            id: 1,
            skips: vec![skip(9, 40)],
        });
        assert_eq!(state.selected_id, Some(1));
        assert_eq!(state.skips.len(), 1);
    }

    #[test]
    fn test_grid_navigation_clamps_at_edges() {
        let mut state = ready_state((1..=5).map(|i| skip(i, 4)).collect());
        state.select_prev();
        assert_eq!(state.selected_id, Some(1));
        state.select_next();
        assert_eq!(state.selected_id, Some(2));
        state.select_row_down();
        assert_eq!(state.selected_id, Some(5));
        state.select_row_down();
        assert_eq!(state.selected_id, Some(5));
        state.select_row_up();
        assert_eq!(state.selected_id, Some(2));
    }

    #[test]
    fn test_continue_requires_valid_selection() {
        let mut state = ready_state(vec![]);
        state.request_continue();
        assert!(state.completed.is_none());

        let mut state = ready_state(vec![skip(3, 8)]);
        state.request_continue();
        assert_eq!(state.completed.as_ref().map(|s| s.id), Some(3));
    }
}
