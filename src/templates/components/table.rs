use crate::domain::view::TableRow;
use maud::{html, Markup};

const HEADERS: [&str; 8] = [
    "Suburb",
    "CouncilArea",
    "Address",
    "Price",
    "Type",
    "Rooms",
    "Landsize",
    "BuildingArea",
];

pub fn listings_table(rows: &[TableRow]) -> Markup {
    html! {
        div class="table-wrap" {
            table class="listings" {
                thead {
                    tr {
                        @for header in HEADERS {
                            th scope="col" { (header) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.suburb) }
                            td { (row.council_area) }
                            td { (row.address) }
                            td class="num" data-value=(row.price) { (row.price_display) }
                            td { (row.property_type) }
                            td class="num" { (row.rooms) }
                            td class="num" { (row.landsize) }
                            td class="num" { (row.building_area) }
                        }
                    }
                    @if rows.is_empty() {
                        tr {
                            td class="empty" colspan="8" { "No listings match the current filters." }
                        }
                    }
                }
            }
        }
    }
}
