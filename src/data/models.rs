use serde::Deserialize;

// Columns the listings file must carry. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Suburb",
    "CouncilArea",
    "Address",
    "Price",
    "Type",
    "Rooms",
    "Landsize",
    "BuildingArea",
];

/// One row as it appears in the listings file, before coercion.
///
/// Everything is read as text: numeric columns are often stored as strings
/// and a value that fails to parse must become "missing", not a CSV error.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Suburb")]
    pub suburb: Option<String>,
    #[serde(rename = "CouncilArea")]
    pub council_area: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<String>,
    #[serde(rename = "Type")]
    pub property_type: Option<String>,
    #[serde(rename = "Rooms")]
    pub rooms: Option<String>,
    #[serde(rename = "Landsize")]
    pub landsize: Option<String>,
    #[serde(rename = "BuildingArea")]
    pub building_area: Option<String>,
}
