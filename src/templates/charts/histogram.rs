use super::px;
use crate::domain::axis::Axis;
use crate::domain::histogram::Histogram;
use maud::{html, Markup};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 420.0;
const LEFT: f64 = 70.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 40.0;
const BOTTOM: f64 = 120.0;

pub fn histogram_chart(histogram: &Histogram) -> Markup {
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let baseline = TOP + plot_h;

    let (r0, r1) = histogram.range;
    let sx = |v: f64| LEFT + (v - r0) / (r1 - r0) * plot_w;

    let y_axis = Axis::nice(0.0, histogram.max_count().max(1) as f64, 5);
    let sy = |v: f64| baseline - y_axis.scale(v, plot_h);
    let count_ticks = y_axis.ticks.iter().copied().filter(|t| (t - t.round()).abs() < 1e-9);

    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
            role="img"
            aria-label="Unit availability by suburb"
            class="histogram"
        {
            text x=(px(LEFT + plot_w / 2.0)) y="24" text-anchor="middle" font-size="16" { "Unit Available" }

            @for tick in count_ticks {
                line x1=(px(LEFT)) x2=(px(LEFT + plot_w)) y1=(px(sy(tick))) y2=(px(sy(tick))) stroke="#eeeeee" {}
                text x=(px(LEFT - 8.0)) y=(px(sy(tick) + 4.0)) text-anchor="end" font-size="12" { (tick as i64) }
            }

            @for bin in histogram.bins.iter().filter(|b| b.count > 0) {
                rect
                    x=(px(sx(bin.start)))
                    y=(px(sy(bin.count as f64)))
                    width=(px(sx(bin.end) - sx(bin.start)))
                    height=(px(baseline - sy(bin.count as f64)))
                    fill="skyblue"
                    stroke="black"
                    stroke-width="1"
                {
                    title { (bin.count) }
                }
            }

            line x1=(px(LEFT)) x2=(px(LEFT + plot_w)) y1=(px(baseline)) y2=(px(baseline)) stroke="black" {}
            line x1=(px(LEFT)) x2=(px(LEFT)) y1=(px(TOP)) y2=(px(baseline)) stroke="black" {}

            @for category in &histogram.categories {
                @let x = sx(category.position);
                line x1=(px(x)) x2=(px(x)) y1=(px(baseline)) y2=(px(baseline + 5.0)) stroke="black" {}
                text
                    x=(px(x))
                    y=(px(baseline + 16.0))
                    text-anchor="end"
                    font-size="12"
                    transform=(format!("rotate(-45 {} {})", px(x), px(baseline + 16.0)))
                { (category.label) }
            }

            text x=(px(LEFT + plot_w / 2.0)) y=(px(HEIGHT - 8.0)) text-anchor="middle" font-size="14" { "Suburb" }
            text
                x="18"
                y=(px(TOP + plot_h / 2.0))
                text-anchor="middle"
                font-size="14"
                transform=(format!("rotate(-90 18 {})", px(TOP + plot_h / 2.0)))
            { "Count" }
        }
    }
}
