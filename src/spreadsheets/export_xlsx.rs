use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::spreadsheets::LISTING_COLUMNS;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

pub const XLSX_FILENAME: &str = "filtered_melbourne_housing.xlsx";

pub fn export_listings_xlsx(listings: &[&Listing]) -> ResultResp {
    let buffer = write_listings_xlsx(listings)?;
    xlsx_response(buffer, XLSX_FILENAME)
}

pub fn write_listings_xlsx(listings: &[&Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in LISTING_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::ExportError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        write_row(worksheet, r, listing)
            .map_err(|e| ServerError::ExportError(format!("Failed to write row {}: {}", r, e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::ExportError(format!("Failed to save workbook: {}", e)))
}

fn write_row(worksheet: &mut Worksheet, r: u32, listing: &Listing) -> Result<(), XlsxError> {
    worksheet.write_string(r, 0, &listing.suburb)?;
    worksheet.write_string(r, 1, listing.council_area.as_deref().unwrap_or(""))?;
    worksheet.write_string(r, 2, listing.address.as_deref().unwrap_or(""))?;
    worksheet.write_number(r, 3, listing.price)?;
    worksheet.write_string(r, 4, &listing.property_type)?;
    worksheet.write_number(r, 5, listing.rooms as f64)?;

    // Missing measurements stay as empty cells.
    if let Some(landsize) = listing.landsize {
        worksheet.write_number(r, 6, landsize)?;
    }
    if let Some(area) = listing.building_area {
        worksheet.write_number(r, 7, area)?;
    }

    Ok(())
}
