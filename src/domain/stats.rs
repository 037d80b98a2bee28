use crate::domain::format::format_optional_currency;
use crate::domain::listing::Listing;
use serde::Serialize;

/// Descriptive price statistics over a filtered view.
///
/// `mean` and `max` are `None` for an empty view so callers never divide by
/// zero or fold over nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub max: Option<f64>,
}

impl PriceSummary {
    pub fn from_listings(listings: &[&Listing]) -> Self {
        let count = listings.len();
        if count == 0 {
            return Self {
                count,
                mean: None,
                max: None,
            };
        }

        let total: f64 = listings.iter().map(|l| l.price).sum();
        let max = listings
            .iter()
            .map(|l| l.price)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean: Some(total / count as f64),
            max: Some(max),
        }
    }

    pub fn mean_display(&self) -> String {
        format_optional_currency(self.mean)
    }

    pub fn max_display(&self) -> String {
        format_optional_currency(self.max)
    }
}
