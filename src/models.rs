use serde::{Deserialize, Serialize};

/// A single skip offering as returned by the catalog endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: i64,
    /// Nominal container volume in yards
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    pub vat: f64,
    #[serde(default)]
    pub transport_cost: Option<f64>,
    #[serde(default)]
    pub area: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    /// Flagged offerings are excluded from display at load time
    #[serde(default)]
    pub forbidden: bool,
}

impl Skip {
    /// Total price including VAT (display rounding is format_price's job)
    pub fn total_price(&self) -> f64 {
        self.price_before_vat + self.vat
    }

    /// True when the skip must sit on private property
    pub fn private_land_only(&self) -> bool {
        !self.allowed_on_road
    }
}

/// Drop forbidden offerings, preserving order. Idempotent.
pub fn filter_available(skips: Vec<Skip>) -> Vec<Skip> {
    skips.into_iter().filter(|s| !s.forbidden).collect()
}

/// Render a monetary amount with exactly two fractional digits.
/// The currency symbol is the caller's concern.
pub fn format_price(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Sprite bucket for a skip size - the terminal stand-in for product photos
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipTier {
    Mini,
    Maxi,
    RollOnOff,
}

impl SkipTier {
    pub fn as_str(&self) -> &str {
        match self {
            SkipTier::Mini => "Mini",
            SkipTier::Maxi => "Maxi",
            SkipTier::RollOnOff => "Roll-on Roll-off",
        }
    }
}

/// Fixed size-to-tier table. Sizes outside the table have no tier and
/// the card renders without a sprite.
pub fn tier_for_size(size: u32) -> Option<SkipTier> {
    match size {
        4 | 6 | 8 => Some(SkipTier::Mini),
        10 | 12 | 14 => Some(SkipTier::Maxi),
        16 | 20 | 40 => Some(SkipTier::RollOnOff),
        _ => None,
    }
}

/// Query location for the catalog endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Location {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        use crate::constants::{DEFAULT_AREA, DEFAULT_POSTCODE};
        Location::new(DEFAULT_POSTCODE, DEFAULT_AREA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skip(id: i64, size: u32, forbidden: bool) -> Skip {
        Skip {
            id,
            size,
            hire_period_days: 14,
            price_before_vat: 278.0,
            vat: 55.6,
            transport_cost: None,
            area: String::from("Lowestoft"),
            allowed_on_road: true,
            allows_heavy_waste: true,
            forbidden,
        }
    }

    #[test]
    fn test_filter_removes_forbidden() {
        let skips = vec![
            sample_skip(1, 4, false),
            sample_skip(2, 6, true),
            sample_skip(3, 8, false),
        ];
        let available = filter_available(skips);
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|s| !s.forbidden));
        assert_eq!(available[0].id, 1);
        assert_eq!(available[1].id, 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let skips = vec![sample_skip(1, 4, false), sample_skip(2, 6, true)];
        let once = filter_available(skips);
        let twice = filter_available(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(4.50 + 0.90), "5.40");
        assert_eq!(format_price(10.0 + 0.0), "10.00");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn test_total_price() {
        let skip = sample_skip(1, 4, false);
        assert_eq!(format_price(skip.total_price()), "333.60");
    }

    #[test]
    fn test_tier_table() {
        for size in [4, 6, 8] {
            assert_eq!(tier_for_size(size), Some(SkipTier::Mini));
        }
        for size in [10, 12, 14] {
            assert_eq!(tier_for_size(size), Some(SkipTier::Maxi));
        }
        for size in [16, 20, 40] {
            assert_eq!(tier_for_size(size), Some(SkipTier::RollOnOff));
        }
    }

    #[test]
    fn test_unknown_size_has_no_tier() {
        assert_eq!(tier_for_size(0), None);
        assert_eq!(tier_for_size(5), None);
        assert_eq!(tier_for_size(100), None);
    }

    #[test]
    fn test_private_land_only() {
        let mut skip = sample_skip(1, 4, false);
        assert!(!skip.private_land_only());
        skip.allowed_on_road = false;
        assert!(skip.private_land_only());
    }
}
