//! # Skipdeck
//!
//! The "Select Skip" step of a skip-hire booking wizard, as a terminal app.
//!
//! ## Features
//! - Fetches available skips for a location from the catalog API
//! - Filters out forbidden offerings at load time
//! - Selectable card grid with VAT-inclusive pricing
//! - Road-placement restriction badges
//! - Retryable error state, calm empty state
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, CatalogPhase};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{filter_available, format_price, tier_for_size, Location, Skip, SkipTier};
pub use network::NetworkActor;
