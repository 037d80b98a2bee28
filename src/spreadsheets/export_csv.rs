use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::{csv_response, ResultResp};
use crate::spreadsheets::LISTING_COLUMNS;

pub const CSV_FILENAME: &str = "filtered_melbourne_housing.csv";

pub fn export_listings_csv(listings: &[&Listing]) -> ResultResp {
    let buffer = write_listings_csv(listings)?;
    csv_response(buffer, CSV_FILENAME)
}

/// Serialize listings as UTF-8 CSV with a header row, Price left numeric.
///
/// The header is written by hand so an empty selection still produces a
/// valid file.
pub fn write_listings_csv(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(LISTING_COLUMNS)
        .map_err(|e| ServerError::ExportError(format!("Failed to write header: {e}")))?;

    for listing in listings {
        wtr.serialize(listing)
            .map_err(|e| ServerError::ExportError(format!("Failed to write row: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| ServerError::ExportError(format!("Failed to flush CSV: {e}")))
}
