//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the skip catalog endpoint
pub const CATALOG_URL: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// Default postcode for the catalog query
pub const DEFAULT_POSTCODE: &str = "NR32";

/// Default area for the catalog query
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Cards per row in the selection grid
pub const GRID_COLUMNS: usize = 3;

/// The booking wizard steps, in order
pub const WIZARD_STEPS: [&str; 6] = [
    "Postcode",
    "Waste Type",
    "Select Skip",
    "Permit Check",
    "Choose Date",
    "Payment",
];

/// Index of this step within the wizard
pub const CURRENT_STEP: usize = 2;

/// Application name
pub const APP_NAME: &str = "Skipdeck";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written to the working directory
pub const LOG_FILE: &str = "skipdeck.log";
