use palette::Srgb;

/// A point in the 2D projection plane (horizontal, vertical).
pub type Point2 = (f64, f64);

fn finite(p: Point2) -> bool {
    p.0.is_finite() && p.1.is_finite()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
    pub color: Srgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Point2,
    pub color: Srgb,
}

/// Text centred on `at`. Lines are separated by `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub at: Point2,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    fn around(p: Point2) -> Self {
        Bounds {
            x_min: p.0,
            x_max: p.0,
            y_min: p.1,
            y_max: p.1,
        }
    }

    fn include(&mut self, p: Point2) {
        self.x_min = self.x_min.min(p.0);
        self.x_max = self.x_max.max(p.0);
        self.y_min = self.y_min.min(p.1);
        self.y_max = self.y_max.max(p.1);
    }
}

/// One self-contained page worth of drawing, in data coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Figure {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn line(&mut self, from: Point2, to: Point2, color: Srgb) {
        self.segments.push(Segment { from, to, color });
    }

    pub fn marker(&mut self, at: Point2, color: Srgb) {
        self.markers.push(Marker { at, color });
    }

    pub fn text(&mut self, at: Point2, text: impl Into<String>) {
        self.labels.push(Label {
            at,
            text: text.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty() && self.labels.is_empty()
    }

    /// Bounding box of everything drawn, or `None` for an empty figure.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self
            .segments
            .iter()
            .flat_map(|s| [s.from, s.to])
            .chain(self.markers.iter().map(|m| m.at))
            .chain(self.labels.iter().map(|l| l.at))
            .filter(|&p| finite(p));

        let mut bounds = Bounds::around(points.next()?);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Copy of the figure without primitives that have NaN or infinite
    /// coordinates; those cannot be placed on a page.
    pub fn drawable(&self) -> Figure {
        Figure {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            segments: self
                .segments
                .iter()
                .filter(|s| finite(s.from) && finite(s.to))
                .cloned()
                .collect(),
            markers: self.markers.iter().filter(|m| finite(m.at)).cloned().collect(),
            labels: self.labels.iter().filter(|l| finite(l.at)).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_figure_has_no_bounds() {
        let fig = Figure::new("nothing");
        assert!(fig.is_empty());
        assert_eq!(fig.bounds(), None);
    }

    #[test]
    fn bounds_cover_all_primitives() {
        let red = Srgb::new(1.0, 0.0, 0.0);
        let mut fig = Figure::new("t").with_axis_labels("Z direction", "Y direction");
        fig.line((0.0, 0.0), (10.0, 5.0), red);
        fig.marker((-2.0, 1.0), red);
        fig.text((3.0, 12.0), "tpc:1");
        let b = fig.bounds().unwrap();
        assert_eq!(b.x_min, -2.0);
        assert_eq!(b.x_max, 10.0);
        assert_eq!(b.y_min, 0.0);
        assert_eq!(b.y_max, 12.0);
        assert_eq!(fig.x_label, "Z direction");
    }

    #[test]
    fn drawable_drops_non_finite_primitives() {
        let blue = Srgb::new(0.0, 0.0, 1.0);
        let mut fig = Figure::new("t");
        fig.line((0.0, 0.0), (10.0, 600.0), blue);
        fig.line((f64::NAN, 0.0), (10.0, 600.0), blue);
        fig.line((0.0, 0.0), (f64::INFINITY, 600.0), blue);
        fig.marker((5.0, f64::NEG_INFINITY), blue);
        fig.marker((5.0, 300.0), blue);
        fig.text((f64::NAN, 300.0), "ch:1");

        let clean = fig.drawable();
        assert_eq!(clean.segments.len(), 1);
        assert_eq!(clean.markers.len(), 1);
        assert!(clean.labels.is_empty());
        assert_eq!(clean.title, "t");
        assert_eq!(clean.bounds(), fig.bounds());
    }
}
