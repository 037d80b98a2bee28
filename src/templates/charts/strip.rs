use super::px;
use crate::domain::format::format_currency;
use crate::domain::strip::StripPlot;
use maud::{html, Markup};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 450.0;
const LEFT: f64 = 110.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 20.0;
const BOTTOM: f64 = 70.0;

const MARKER_RADIUS: f64 = 4.0;

pub fn strip_chart(plot: &StripPlot) -> Markup {
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let baseline = TOP + plot_h;

    let band = plot_w / plot.categories.len().max(1) as f64;
    let band_centre = |category: usize| LEFT + band * (category as f64 + 0.5);
    let sy = |price: f64| baseline - plot.price_axis.scale(price, plot_h);

    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            role="img"
            aria-label="Price distribution across selected suburbs"
            class="strip"
        {
            @for tick in &plot.price_axis.ticks {
                line x1=(px(LEFT)) x2=(px(LEFT + plot_w)) y1=(px(sy(*tick))) y2=(px(sy(*tick))) stroke="#e5ecf6" {}
                text x=(px(LEFT - 8.0)) y=(px(sy(*tick) + 4.0)) text-anchor="end" font-size="12" { (format_currency(*tick)) }
            }

            @for point in &plot.points {
                circle
                    cx=(px(band_centre(point.category) + point.offset * band))
                    cy=(px(sy(point.price)))
                    r=(MARKER_RADIUS)
                    fill="teal"
                    fill-opacity="0.5"
                {
                    title { "Suburb=" (point.suburb) ", Price (AUD)=" (format_currency(point.price)) }
                }
            }

            line x1=(px(LEFT)) x2=(px(LEFT + plot_w)) y1=(px(baseline)) y2=(px(baseline)) stroke="#444444" {}

            @for (i, suburb) in plot.categories.iter().enumerate() {
                text x=(px(band_centre(i))) y=(px(baseline + 18.0)) text-anchor="middle" font-size="12" { (suburb) }
            }

            text x=(px(LEFT + plot_w / 2.0)) y=(px(HEIGHT - 12.0)) text-anchor="middle" font-size="14" { "Suburb" }
            text
                x="18"
                y=(px(TOP + plot_h / 2.0))
                text-anchor="middle"
                font-size="14"
                transform=(format!("rotate(-90 18 {})", px(TOP + plot_h / 2.0)))
            { "Price (AUD)" }
        }
    }
}
