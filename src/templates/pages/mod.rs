pub mod about;
pub mod home;

pub use about::about_page;
pub use home::home_page;

use crate::data::Dataset;
use crate::domain::{FilterState, PageView};
use crate::templates::components::filter_sidebar;
use maud::Markup;

/// Full document for whichever page the filter state selects.
pub fn dashboard_page(view: &PageView, dataset: &Dataset, state: &FilterState) -> Markup {
    let sidebar = filter_sidebar(dataset, state);

    match view {
        PageView::Home(home) => home_page(home, sidebar),
        PageView::About => about_page(state, sidebar),
    }
}
