use serde::Serialize;

/// A single housing record that survived loading.
///
/// Field order matches the column order of the CSV export; the serde names
/// are the dataset's own column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "Suburb")]
    pub suburb: String,
    #[serde(rename = "CouncilArea")]
    pub council_area: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Price")]
    pub price: f64,

    // h / u / t
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Rooms")]
    pub rooms: i64,

    #[serde(rename = "Landsize")]
    pub landsize: Option<f64>,
    #[serde(rename = "BuildingArea")]
    pub building_area: Option<f64>,
}
