pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{export_listings_csv, CSV_FILENAME};
pub use export_xlsx::{export_listings_xlsx, XLSX_FILENAME};

/// Column order shared by every download.
pub const LISTING_COLUMNS: [&str; 8] = [
    "Suburb",
    "CouncilArea",
    "Address",
    "Price",
    "Type",
    "Rooms",
    "Landsize",
    "BuildingArea",
];
