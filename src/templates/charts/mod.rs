pub mod histogram;
pub mod strip;

pub use histogram::histogram_chart;
pub use strip::strip_chart;

/// SVG coordinates don't need more than a tenth of a pixel.
fn px(v: f64) -> String {
    format!("{:.1}", v)
}
