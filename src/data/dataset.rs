use crate::data::data_error::DataError;
use crate::domain::listing::Listing;
use std::collections::BTreeSet;

/// How many source rows the loader saw and threw away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Smallest and largest room count present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomBounds {
    pub min: i64,
    pub max: i64,
}

impl RoomBounds {
    pub fn clamp(&self, rooms: i64) -> i64 {
        rooms.clamp(self.min, self.max)
    }
}

/// The base dataset: every validated listing, built once at startup and
/// only ever borrowed afterwards.
#[derive(Debug)]
pub struct Dataset {
    listings: Vec<Listing>,
    suburbs: Vec<String>,
    property_types: Vec<String>,
    room_bounds: RoomBounds,
    report: LoadReport,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>, report: LoadReport) -> Result<Self, DataError> {
        let min = listings.iter().map(|l| l.rooms).min();
        let max = listings.iter().map(|l| l.rooms).max();
        let room_bounds = match (min, max) {
            (Some(min), Some(max)) => RoomBounds { min, max },
            _ => return Err(DataError::Empty),
        };

        // BTreeSet gives the same ordering as sorting the raw strings.
        let suburbs: BTreeSet<&str> = listings.iter().map(|l| l.suburb.as_str()).collect();
        let property_types: BTreeSet<&str> =
            listings.iter().map(|l| l.property_type.as_str()).collect();

        let suburbs = suburbs.into_iter().map(str::to_string).collect();
        let property_types = property_types.into_iter().map(str::to_string).collect();

        Ok(Self {
            listings,
            suburbs,
            property_types,
            room_bounds,
            report,
        })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Sorted distinct suburbs.
    pub fn suburbs(&self) -> &[String] {
        &self.suburbs
    }

    /// Sorted distinct property type codes.
    pub fn property_types(&self) -> &[String] {
        &self.property_types
    }

    pub fn room_bounds(&self) -> RoomBounds {
        self.room_bounds
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }
}
