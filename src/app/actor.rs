//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::models::Location;

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
        location: Location,
    ) -> Self {
        AppActor {
            state: AppState::new(location),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Kick off the catalog fetch for this step and render the
        // loading screen immediately.
        let cmd = self.state.begin_fetch();
        let _ = self.network_tx.send(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Card navigation
            UiEvent::NextSkip => self.state.select_next(),
            UiEvent::PrevSkip => self.state.select_prev(),
            UiEvent::RowUp => self.state.select_row_up(),
            UiEvent::RowDown => self.state.select_row_down(),

            // Catalog actions
            UiEvent::Retry => {
                if let Some(cmd) = self.state.retry() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Wizard actions
            UiEvent::Continue => {
                self.state.request_continue();
                if self.state.completed.is_some() {
                    // Step finished; network actor is no longer needed
                    let _ = self.network_tx.send(NetworkCommand::Shutdown);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
