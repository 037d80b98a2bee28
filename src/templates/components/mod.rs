use maud::{html, Markup};

pub mod error;
pub mod sidebar;
pub mod table;

pub use error::error_page;
pub use sidebar::filter_sidebar;
pub use table::listings_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A labelled headline number.
pub fn metric(label: &str, value: &str) -> Markup {
    html! {
        div class="metric" {
            div class="metric-label" { (label) }
            div class="metric-value" { (value) }
        }
    }
}
