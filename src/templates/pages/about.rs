use crate::domain::FilterState;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn about_page(state: &FilterState, sidebar: Markup) -> Markup {
    desktop_layout(
        "About | Melbourne Housing Dashboard",
        state,
        sidebar,
        html! {
            h2 { "About This Dashboard" }

            (card("What it does", html! {
                p { "This app analyzes Melbourne housing data." }
                p { strong { "Features:" } }
                ul {
                    li { "Interactive filters for suburb, property type and room count" }
                    li { "Histogram of listings per suburb" }
                    li { "Price distribution across the selected suburbs" }
                    li { "Dynamic table of listings, downloadable as CSV or Excel" }
                }
                p { strong { "Data Source:" } " Cleaned version of the Melbourne housing dataset" }
            }))

            p { "Created by:" }
            p { "Shah Jehan & Qawiem Lutfan" }
        },
    )
}
