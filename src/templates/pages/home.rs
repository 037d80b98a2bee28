// templates/pages/home.rs

use crate::domain::HomeView;
use crate::templates::{
    charts::{histogram_chart, strip_chart},
    components::listings_table,
    desktop_layout, metric,
};
use maud::{html, Markup};

pub fn home_page(vm: &HomeView, sidebar: Markup) -> Markup {
    desktop_layout(
        "Melbourne Housing Dashboard",
        &vm.filter,
        sidebar,
        html! {
            img src="/static/banner" width="300" alt="Melbourne housing";

            h1 style="color: #2c3e50;" { "🏘 Melbourne Property Listings" }
            p style="color: #95a5a6;" { "Visualize, filter and understand Melbourne's housing data." }

            h3 { "Welcome! Find your ideal home here!" }
            p {
                "Use the filter on the left to narrow down listings. "
                "Below you will see an overview of the listings and their price distributions."
            }
            p { "House type:" }
            ul class="type-legend" {
                li { "h - house, villa, terrace" }
                li { "u - duplex" }
                li { "t - townhouse" }
            }
            hr;

            p id="listing-count" {
                strong { "Showing" } " " (vm.listing_count) " listing based on your filter."
            }

            div class="metrics" {
                (metric("Average Price", &vm.average_price))
                (metric("Max Price", &vm.max_price))
            }

            (listings_table(&vm.rows))

            h3 { "Unit Availability" }
            div class="chart" {
                (histogram_chart(&vm.histogram))
            }

            h3 { "💰 Price Distribution Across Selected Suburbs" }
            div class="chart" {
                (strip_chart(&vm.strip))
            }

            p id="points-plotted" { "Total points plotted: " (vm.points_plotted) }
        },
    )
}
