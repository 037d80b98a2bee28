// src/domain/histogram.rs

use crate::domain::listing::Listing;
use serde::Serialize;

pub const HISTOGRAM_BINS: usize = 40;

/// A distinct label and where it sits on the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub position: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Frequency histogram over categorical labels.
///
/// Labels take positions 0..n-1 in order of first appearance and those
/// positions are counted into equal-width bins, the same way a numeric
/// histogram treats a categorical axis. With fewer categories than bins
/// each non-empty bin holds exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub categories: Vec<Category>,
    pub bins: Vec<Bin>,
    pub range: (f64, f64),
}

impl Histogram {
    pub fn of_suburbs(listings: &[&Listing]) -> Self {
        Self::from_labels(listings.iter().map(|l| l.suburb.as_str()), HISTOGRAM_BINS)
    }

    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>, bin_count: usize) -> Self {
        let mut categories: Vec<Category> = Vec::new();

        for label in labels {
            match categories.iter().position(|c| c.label == label) {
                Some(i) => categories[i].count += 1,
                None => {
                    let position = categories.len() as f64;
                    categories.push(Category {
                        label: label.to_string(),
                        position,
                        count: 1,
                    });
                }
            }
        }

        let range = match categories.len() {
            0 => (0.0, 1.0),
            1 => (-0.5, 0.5),
            n => (0.0, (n - 1) as f64),
        };

        let bin_count = bin_count.max(1);
        let width = (range.1 - range.0) / bin_count as f64;

        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                start: range.0 + width * i as f64,
                end: range.0 + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        let span = range.1 - range.0;
        for category in &categories {
            let idx = bin_index(&bins, category.position, range.0, span);
            bins[idx].count += category.count;
        }

        Self {
            categories,
            bins,
            range,
        }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Bin holding `position`. The estimate from the scale factor can land one
/// bin off near an edge, so the stored edges have the final say. The last
/// bin is closed on the right.
fn bin_index(bins: &[Bin], position: f64, lo: f64, span: f64) -> usize {
    let last = bins.len() - 1;
    let mut idx = (((position - lo) * bins.len() as f64 / span).max(0.0) as usize).min(last);

    if idx > 0 && position < bins[idx].start {
        idx -= 1;
    }
    if idx < last && position >= bins[idx + 1].start {
        idx += 1;
    }
    idx
}
