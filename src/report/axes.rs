/// Linear axis range with "nice number" ticks and data → page mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
    pub tick_labels: Vec<String>,
}

/// Fraction of the data span added on each side of the data.
const MARGIN: f64 = 0.05;

/// Upper bound on ticks per axis, whatever the range.
pub const MAX_TICKS: usize = 50;

/// (upper bound of the normalised rough step, mantissa chosen for it)
const STEP_MANTISSAS: [(f64, f64); 3] = [(1.5, 1.0), (3.5, 2.0), (7.5, 5.0)];

impl AxisScale {
    /// Pad `[data_min, data_max]` by a small margin and place about
    /// `target_ticks` ticks at round values inside it.
    pub fn padded(data_min: f64, data_max: f64, target_ticks: usize) -> Self {
        let (min, max) = padded_range(data_min, data_max);
        let (ticks, tick_labels) = place_ticks(min, max, target_ticks);
        AxisScale {
            min,
            max,
            ticks,
            tick_labels,
        }
    }

    /// Map a data value into `[lo, hi]` page units.
    pub fn map(&self, value: f64, lo: f64, hi: f64) -> f64 {
        lo + (value - self.min) / (self.max - self.min) * (hi - lo)
    }
}

fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let (min, max) = if span.abs() < 1e-12 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo - span * MARGIN, hi + span * MARGIN)
    };
    if max > min {
        return (min, max);
    }
    // The padding rounded away at this magnitude.
    let widen = lo.abs().max(hi.abs()) * 1e-12;
    (lo - widen, hi + widen)
}

/// Ticks at multiples of a round step inside `[min, max]`.
///
/// No ticks when the step is too small to move a value of this magnitude.
fn place_ticks(min: f64, max: f64, target_ticks: usize) -> (Vec<f64>, Vec<String>) {
    let step = nice_step((max - min) / (target_ticks.max(2) - 1) as f64);
    let first = (min / step).ceil() * step;
    if !(step.is_finite() && step > 0.0 && first.is_finite()) || first + step == first {
        return (Vec::new(), Vec::new());
    }

    let span_steps = ((max - first) / step + 1e-9).floor();
    if span_steps < 0.0 {
        return (Vec::new(), Vec::new());
    }
    let last = (span_steps as usize).min(MAX_TICKS - 1);

    (0..=last)
        .map(|i| {
            let v = first + i as f64 * step;
            (v, format_tick(v, step))
        })
        .unzip()
}

fn nice_step(rough: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let mantissa = STEP_MANTISSAS
        .into_iter()
        .find(|&(limit, _)| normalized <= limit)
        .map_or(10.0, |(_, m)| m);
    mantissa * magnitude
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = (-step.log10()).ceil().max(0.0) as usize;
    // Snap rounding noise at the origin so it never prints as "-0".
    let v = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
