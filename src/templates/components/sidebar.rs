use crate::data::Dataset;
use crate::domain::FilterState;
use crate::spreadsheets::{CSV_FILENAME, XLSX_FILENAME};
use maud::{html, Markup};

/// Filter form plus download links. Submitting re-requests the current page
/// with the new selection in the query string.
pub fn filter_sidebar(dataset: &Dataset, state: &FilterState) -> Markup {
    let bounds = dataset.room_bounds();
    let query = state.to_query();

    html! {
        aside class="sidebar" {
            h2 { "🔍 Filter Options" }

            form method="get" action="/" class="filters" {
                input type="hidden" name="page" value=(state.page.as_param());
                input type="hidden" name="applied" value="1";

                label for="suburb" { "Select Suburbs" }
                select id="suburb" name="suburb" multiple size="8" {
                    @for suburb in dataset.suburbs() {
                        option value=(suburb) selected[state.suburbs.contains(suburb)] { (suburb) }
                    }
                }

                label for="type" { "Select Property Types" }
                select id="type" name="type" multiple size="3" {
                    @for property_type in dataset.property_types() {
                        option value=(property_type) selected[state.types.contains(property_type)] { (property_type) }
                    }
                }

                label for="min_rooms" {
                    "Minimum Rooms: "
                    output id="min_rooms_value" for="min_rooms" { (state.min_rooms) }
                }
                input
                    type="range"
                    id="min_rooms"
                    name="min_rooms"
                    min=(bounds.min)
                    max=(bounds.max)
                    step="1"
                    value=(state.min_rooms)
                    oninput="document.getElementById('min_rooms_value').value = this.value";

                button type="submit" class="primary" { "Apply filters" }
            }

            div class="downloads" {
                a class="download" href=(format!("/download.csv?{query}")) download=(CSV_FILENAME) {
                    "⬇️ Download Listing Data as CSV"
                }
                a class="download secondary" href=(format!("/download.xlsx?{query}")) download=(XLSX_FILENAME) {
                    "Download as Excel"
                }
            }
        }
    }
}
