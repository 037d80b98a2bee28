// src/data/loader.rs

use crate::data::data_error::DataError;
use crate::data::dataset::{Dataset, LoadReport};
use crate::data::models::{RawListing, REQUIRED_COLUMNS};
use crate::domain::listing::Listing;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the listings file at `path` into the base dataset.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    read_dataset(file)
}

/// Parse listings CSV from any reader.
///
/// Rows missing Suburb, Price, Type or Rooms (after coercion) are dropped.
/// Other columns that fail to coerce are simply left empty.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column.to_string()));
        }
    }

    let mut listings = Vec::new();
    let mut rows_read = 0;

    for record in rdr.deserialize::<RawListing>() {
        let raw = record?;
        rows_read += 1;

        match into_listing(raw) {
            Some(listing) => listings.push(listing),
            None => tracing::trace!(row = rows_read, "dropping row with missing required field"),
        }
    }

    let report = LoadReport {
        rows_read,
        rows_dropped: rows_read - listings.len(),
    };

    Dataset::new(listings, report)
}

fn into_listing(raw: RawListing) -> Option<Listing> {
    Some(Listing {
        suburb: coerce_text(raw.suburb)?,
        council_area: coerce_text(raw.council_area),
        address: coerce_text(raw.address),
        price: coerce_number(raw.price.as_deref())?,
        property_type: coerce_text(raw.property_type)?,
        rooms: coerce_rooms(raw.rooms.as_deref())?,
        landsize: coerce_number(raw.landsize.as_deref()),
        building_area: coerce_number(raw.building_area.as_deref()),
    })
}

/// Cell values read as missing, matching what spreadsheet exports and
/// dataframe tools write for an absent value.
const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

fn coerce_text(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !is_na(s))
}

/// Anything that is not a finite number counts as missing.
pub fn coerce_number(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim();
    if is_na(value) {
        return None;
    }

    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rooms are whole numbers; "3.0" is accepted, "3.5" is not.
pub fn coerce_rooms(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }

    let n = coerce_number(Some(value))?;
    (n.fract() == 0.0).then_some(n as i64)
}
