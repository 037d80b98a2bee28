// src/domain/strip.rs

use crate::data::Dataset;
use crate::domain::axis::Axis;
use crate::domain::filter::FilterState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Fraction of a category band the jittered points may spread across.
pub const JITTER_WIDTH: f64 = 0.7;
pub const PRICE_TICKS: usize = 6;

const JITTER_SEED: u64 = 0x5EED_0F_11_57;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripPoint {
    pub suburb: String,
    pub price: f64,
    /// Index into `StripPlot::categories`.
    pub category: usize,
    /// Horizontal offset from the band centre, in band widths.
    pub offset: f64,
}

/// Price against suburb for every listing in a selected suburb.
///
/// Only the suburb selection applies here; the type and room filters do not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripPlot {
    pub categories: Vec<String>,
    pub points: Vec<StripPoint>,
    pub price_axis: Axis,
}

impl StripPlot {
    pub fn for_suburbs(dataset: &Dataset, state: &FilterState) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut points = Vec::new();

        for (row, listing) in dataset.listings().iter().enumerate() {
            if !state.matches_suburb(listing) {
                continue;
            }

            let category = match categories.iter().position(|c| *c == listing.suburb) {
                Some(i) => i,
                None => {
                    categories.push(listing.suburb.clone());
                    categories.len() - 1
                }
            };

            points.push(StripPoint {
                suburb: listing.suburb.clone(),
                price: listing.price,
                category,
                offset: jitter(row),
            });
        }

        let lo = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);
        let price_axis = if points.is_empty() {
            Axis::nice(0.0, 0.0, PRICE_TICKS)
        } else {
            Axis::nice(lo, hi, PRICE_TICKS)
        };

        Self {
            categories,
            points,
            price_axis,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Seeded per dataset row, so a listing lands in the same spot on every
/// render regardless of what else is selected.
fn jitter(row: usize) -> f64 {
    let mut rng = StdRng::seed_from_u64(JITTER_SEED ^ row as u64);
    rng.gen_range(-0.5_f64..0.5) * JITTER_WIDTH
}
