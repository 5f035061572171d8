//! Network messages - communication between App and Network layers

use crate::models::{Location, Skip};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the skip catalog for a location
    FetchCatalog { id: u64, location: Location },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Catalog fetched and filtered to available offerings
    Catalog { id: u64, skips: Vec<Skip> },
    /// Fetch failed (transport error, bad status, or malformed body)
    Error { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID the response belongs to
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Catalog { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
