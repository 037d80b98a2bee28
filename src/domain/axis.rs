use serde::Serialize;

/// A linear axis with "nice" tick positions (multiples of 1, 2 or 5 times a
/// power of ten) that fully covers the data range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn nice(lo: f64, hi: f64, target_ticks: usize) -> Self {
        let (lo, hi) = if hi > lo {
            (lo, hi)
        } else if lo == 0.0 {
            (0.0, 1.0)
        } else {
            // Single value: pad by 10% either side.
            let pad = lo.abs() * 0.1;
            (lo - pad, lo + pad)
        };

        let step = nice_step((hi - lo) / target_ticks.max(1) as f64);
        // Tolerate representation error so exact multiples stay put.
        let min = (lo / step + 1e-9).floor() * step;
        let max = (hi / step - 1e-9).ceil() * step;

        let count = ((max - min) / step).round() as usize;
        let ticks = (0..=count).map(|i| min + step * i as f64).collect();

        Self { min, max, ticks }
    }

    /// Map `value` onto `[0, length]`, 0 at `min`.
    pub fn scale(&self, value: f64, length: f64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (value - self.min) / (self.max - self.min) * length
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let residual = raw / magnitude;

    let nice = if residual <= 1.0 + 1e-9 {
        1.0
    } else if residual <= 2.0 + 1e-9 {
        2.0
    } else if residual <= 5.0 + 1e-9 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}
