// src/domain/view.rs

use crate::data::Dataset;
use crate::domain::filter::{FilterState, Page};
use crate::domain::format::{format_currency, format_optional_number};
use crate::domain::histogram::Histogram;
use crate::domain::listing::Listing;
use crate::domain::stats::PriceSummary;
use crate::domain::strip::StripPlot;
use serde::Serialize;

/// A row of the listings table, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub suburb: String,
    pub council_area: String,
    pub address: String,
    /// Numeric price, kept for consumers that want to re-sort.
    pub price: f64,
    pub price_display: String,
    pub property_type: String,
    pub rooms: i64,
    pub landsize: String,
    pub building_area: String,
}

/// Everything the Home page shows for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub filter: FilterState,
    pub listing_count: usize,
    pub summary: PriceSummary,
    pub average_price: String,
    pub max_price: String,
    pub rows: Vec<TableRow>,
    pub histogram: Histogram,
    pub strip: StripPlot,
    pub points_plotted: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home(Box<HomeView>),
    About,
}

/// The whole dashboard as a pure function of the dataset and filter state.
pub fn render(dataset: &Dataset, state: &FilterState) -> PageView {
    match state.page {
        Page::Home => PageView::Home(Box::new(render_home(dataset, state))),
        Page::About => PageView::About,
    }
}

pub fn render_home(dataset: &Dataset, state: &FilterState) -> HomeView {
    let filtered = state.apply(dataset);

    // Metrics come off numeric prices, before the table formats them.
    let summary = PriceSummary::from_listings(&filtered);
    let histogram = Histogram::of_suburbs(&filtered);
    let strip = StripPlot::for_suburbs(dataset, state);
    let rows = table_rows(&filtered);

    HomeView {
        filter: state.clone(),
        listing_count: filtered.len(),
        average_price: summary.mean_display(),
        max_price: summary.max_display(),
        summary,
        rows,
        points_plotted: strip.len(),
        histogram,
        strip,
    }
}

/// Sort by numeric price, most expensive first, then format.
/// Equal prices keep dataset order.
pub fn table_rows(filtered: &[&Listing]) -> Vec<TableRow> {
    let mut sorted = filtered.to_vec();
    sorted.sort_by(|a, b| b.price.total_cmp(&a.price));

    sorted.into_iter().map(table_row).collect()
}

fn table_row(listing: &Listing) -> TableRow {
    TableRow {
        suburb: listing.suburb.clone(),
        council_area: listing.council_area.clone().unwrap_or_default(),
        address: listing.address.clone().unwrap_or_default(),
        price: listing.price,
        price_display: format_currency(listing.price),
        property_type: listing.property_type.clone(),
        rooms: listing.rooms,
        landsize: format_optional_number(listing.landsize),
        building_area: format_optional_number(listing.building_area),
    }
}
