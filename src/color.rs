use std::f32::consts::PI;

use palette::Srgb;

// ---------------------------------------------------------------------------
// Continuous colour maps
// ---------------------------------------------------------------------------

/// Dark blue → blue → white → red → dark red.
const SEISMIC_STOPS: [(f32, (f32, f32, f32)); 5] = [
    (0.0, (0.0, 0.0, 0.3)),
    (0.25, (0.0, 0.0, 1.0)),
    (0.5, (1.0, 1.0, 1.0)),
    (0.75, (1.0, 0.0, 0.0)),
    (1.0, (0.5, 0.0, 0.0)),
];

/// Maps a scalar in `[0, 1]` to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// Violet through green to red, as in matplotlib's `rainbow`.
    Rainbow,
    /// Diverging blue/white/red, as in matplotlib's `seismic`.
    Seismic,
}

impl ColorMap {
    /// Colour at `t`; values outside `[0, 1]` are clamped.
    pub fn at(self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) as f32 };
        match self {
            ColorMap::Rainbow => Srgb::new(
                (2.0 * t - 0.5).abs().min(1.0),
                (PI * t).sin(),
                (0.5 * PI * t).cos(),
            ),
            ColorMap::Seismic => seismic(t),
        }
    }

    /// `n` colours evenly spread over the map, first at 0 and last at 1.
    pub fn spread(self, n: usize) -> Vec<Srgb> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => (0..n)
                .map(|i| self.at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

fn seismic(t: f32) -> Srgb {
    for pair in SEISMIC_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            return Srgb::new(lerp(c0.0, c1.0, f), lerp(c0.1, c1.1, f), lerp(c0.2, c1.2, f));
        }
    }
    let (_, last) = SEISMIC_STOPS[SEISMIC_STOPS.len() - 1];
    Srgb::new(last.0, last.1, last.2)
}

fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}
