// src/domain/filter.rs

use crate::data::Dataset;
use crate::domain::listing::Listing;
use serde::Serialize;
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const DEFAULT_MIN_ROOMS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
}

impl Page {
    /// Unknown values fall back to Home.
    pub fn from_param(value: &str) -> Self {
        match value {
            "about" => Page::About,
            _ => Page::Home,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
        }
    }
}

/// Everything the sidebar controls. One of these is built per request and
/// fully determines what gets rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub page: Page,
    pub suburbs: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub min_rooms: i64,
}

impl FilterState {
    /// First suburb alphabetically, every type, and two rooms (clamped).
    pub fn defaults(dataset: &Dataset) -> Self {
        Self {
            page: Page::Home,
            suburbs: dataset.suburbs().iter().take(1).cloned().collect(),
            types: dataset.property_types().iter().cloned().collect(),
            min_rooms: dataset.room_bounds().clamp(DEFAULT_MIN_ROOMS),
        }
    }

    /// Read the filter state out of a query string.
    ///
    /// Without `applied=1` the form was never submitted, so missing
    /// `suburb`/`type` keys mean "use the defaults". Once it has been
    /// submitted, a missing key means nothing is selected.
    pub fn from_query(query: Option<&str>, dataset: &Dataset) -> Self {
        let mut state = Self::defaults(dataset);

        let mut applied = false;
        let mut suburbs = BTreeSet::new();
        let mut types = BTreeSet::new();
        let mut min_rooms = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            match key.as_ref() {
                "page" => state.page = Page::from_param(&value),
                "applied" => applied = value == "1",
                "suburb" => {
                    suburbs.insert(value.into_owned());
                }
                "type" => {
                    types.insert(value.into_owned());
                }
                "min_rooms" => min_rooms = value.trim().parse::<i64>().ok(),
                _ => {}
            }
        }

        if applied || !suburbs.is_empty() {
            state.suburbs = suburbs;
        }
        if applied || !types.is_empty() {
            state.types = types;
        }
        if let Some(rooms) = min_rooms {
            state.min_rooms = dataset.room_bounds().clamp(rooms);
        }

        state
    }

    /// Encode back into a query string, marked as applied.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("page", self.page.as_param());
        for suburb in &self.suburbs {
            out.append_pair("suburb", suburb);
        }
        for property_type in &self.types {
            out.append_pair("type", property_type);
        }
        out.append_pair("min_rooms", &self.min_rooms.to_string());
        out.append_pair("applied", "1");
        out.finish()
    }

    pub fn with_page(&self, page: Page) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn matches_suburb(&self, listing: &Listing) -> bool {
        self.suburbs.contains(&listing.suburb)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_suburb(listing)
            && self.types.contains(&listing.property_type)
            && listing.rooms >= self.min_rooms
    }

    /// The filtered view: matching listings in dataset order.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Listing> {
        dataset.listings().iter().filter(|l| self.matches(l)).collect()
    }
}
