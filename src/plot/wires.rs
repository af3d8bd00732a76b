use crate::color::ColorMap;
use crate::data::filter::select_by;
use crate::data::model::{Axis, PlaneView, Wire, WireField};
use crate::error::{Result, WireError};

use super::figure::{Figure, Point2};

/// Projection used for all wire plots: Z across, Y up.
pub const HORIZONTAL: Axis = Axis::Z;
pub const VERTICAL: Axis = Axis::Y;

/// Stride used by the channel overview page.
pub const OVERVIEW_STRIDE: usize = 100;

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Every `stride`-th wire of a subset, plus the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSampling {
    pub stride: usize,
}

impl WireSampling {
    pub fn new(stride: usize) -> Self {
        WireSampling { stride }
    }

    /// Whether position `index` of a subset of `len` wires is drawn.
    pub fn keeps(&self, index: usize, len: usize) -> bool {
        index < len && (index % self.stride == 0 || index + 1 == len)
    }

    pub fn indices(&self, len: usize) -> Vec<usize> {
        (0..len).filter(|&i| self.keeps(i, len)).collect()
    }
}

// ---------------------------------------------------------------------------
// Per-plane wire layout
// ---------------------------------------------------------------------------

/// Parameters of one plane/TPC layout page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub plane: i64,
    pub tpcs: Vec<i64>,
    /// Draw every n-th wire of each TPC.
    pub wire_sampling: usize,
    /// Label every n-th wire of each TPC (among the drawn ones).
    pub text_sampling: usize,
    /// Label shift per entry of `tpcs`, in data units.
    pub offsets: Option<Vec<(f64, f64)>>,
}

impl PlotSpec {
    pub fn new(plane: i64) -> Self {
        PlotSpec {
            plane,
            tpcs: vec![1, 5, 9],
            wire_sampling: 10,
            text_sampling: 100,
            offsets: None,
        }
    }

    pub fn tpcs(mut self, tpcs: &[i64]) -> Self {
        self.tpcs = tpcs.to_vec();
        self
    }

    pub fn wire_sampling(mut self, stride: usize) -> Self {
        self.wire_sampling = stride;
        self
    }

    pub fn text_sampling(mut self, stride: usize) -> Self {
        self.text_sampling = stride;
        self
    }

    pub fn offsets(mut self, offsets: &[(f64, f64)]) -> Self {
        self.offsets = Some(offsets.to_vec());
        self
    }

    fn offset_for(&self, itpc: usize) -> (f64, f64) {
        self.offsets
            .as_ref()
            .and_then(|o| o.get(itpc).copied())
            .unwrap_or((0.0, 0.0))
    }

    fn validate(&self) -> Result<PlaneView> {
        let view = PlaneView::from_index(self.plane)?;
        if self.wire_sampling == 0 || self.text_sampling == 0 {
            return Err(WireError::InvalidSampling {
                wire: self.wire_sampling,
                text: self.text_sampling,
            });
        }
        if let Some(offsets) = &self.offsets {
            if offsets.len() < self.tpcs.len() {
                return Err(WireError::OffsetMismatch {
                    tpcs: self.tpcs.len(),
                    offsets: offsets.len(),
                });
            }
        }
        Ok(view)
    }

    /// Page title, e.g. `U-plane, TPCs: (1, 5, 9)`.
    pub fn title(&self, view: PlaneView) -> String {
        format!("{view}-plane, TPCs: {}", tuple_text(&self.tpcs))
    }
}

impl Default for PlotSpec {
    fn default() -> Self {
        PlotSpec::new(0)
    }
}

fn tuple_text(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    match items.len() {
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}

fn project(wire: &Wire) -> (Point2, Point2) {
    (
        (HORIZONTAL.component(&wire.begin), VERTICAL.component(&wire.begin)),
        (HORIZONTAL.component(&wire.end), VERTICAL.component(&wire.end)),
    )
}

fn midpoint(a: Point2, b: Point2) -> Point2 {
    (0.5 * (a.0 + b.0), 0.5 * (a.1 + b.1))
}

fn axis_labels(fig: Figure) -> Figure {
    fig.with_axis_labels(
        format!("{} direction", HORIZONTAL.letter()),
        format!("{} direction", VERTICAL.letter()),
    )
}

/// Draw the sampled wires of one plane for each requested TPC.
///
/// Wires are coloured by their position within their TPC. A TPC with no
/// wires on the plane is skipped.
pub fn plot_wires_plane_tpc(wires: &[Wire], spec: &PlotSpec) -> Result<Figure> {
    let view = spec.validate()?;
    let mut fig = axis_labels(Figure::new(spec.title(view)));

    let sampling = WireSampling::new(spec.wire_sampling);
    let in_plane = select_by(wires, WireField::Plane, spec.plane);

    for (itpc, &tpc) in spec.tpcs.iter().enumerate() {
        let in_tpc = select_by(&in_plane, WireField::Tpc, tpc);
        if in_tpc.is_empty() {
            log::warn!("No wires for TPC {tpc} on {view}-plane; skipping");
            continue;
        }
        let (dx, dy) = spec.offset_for(itpc);
        let colors = ColorMap::Rainbow.spread(in_tpc.len());

        for ind in sampling.indices(in_tpc.len()) {
            let wire = &in_tpc[ind];
            let color = colors[ind];
            let (a, b) = project(wire);
            fig.line(a, b, color);

            if ind % spec.text_sampling == 0 {
                let mid = midpoint(a, b);
                fig.marker(mid, color);
                fig.text(
                    (mid.0 + dx, mid.1 + dy),
                    format!(
                        "tpc:{tpc}\nwid:{}\nwip:{}\nch:{}",
                        wire.sequence_id, wire.wire_in_plane, wire.channel
                    ),
                );
            }
        }
    }

    log::debug!(
        "{}: {} segments, {} labels",
        fig.title,
        fig.segments.len(),
        fig.labels.len()
    );
    Ok(fig)
}

/// Every hundredth wire of `wires` with its channel number.
pub fn plot_channel_overview(wires: &[Wire], title: &str) -> Figure {
    let mut fig = axis_labels(Figure::new(title));
    let colors = ColorMap::Seismic.spread(wires.len());

    for (ind, wire) in wires.iter().enumerate().step_by(OVERVIEW_STRIDE) {
        let (a, b) = project(wire);
        fig.line(a, b, colors[ind]);
        fig.text(midpoint(a, b), format!("ch {}", wire.channel));
    }
    fig
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_str;

    /// `n` wires per (tpc, plane); wire k of a cell runs along Y at z = k.
    fn layout(tpcs: &[i64], n: usize) -> Vec<Wire> {
        let mut text = String::new();
        let mut ch = 0;
        for &tpc in tpcs {
            for plane in 0..3 {
                for k in 0..n {
                    text.push_str(&format!(
                        "{ch} 0 {tpc} {plane} {k} 0 0 {k} 0 600 {k}\n"
                    ));
                    ch += 1;
                }
            }
        }
        parse_str(&text).unwrap()
    }

    #[test]
    fn sampling_keeps_stride_and_last() {
        let s = WireSampling::new(10);
        assert_eq!(s.indices(25), vec![0, 10, 20, 24]);
        assert_eq!(s.indices(21), vec![0, 10, 20]);
        assert_eq!(s.indices(1), vec![0]);
        assert!(s.indices(0).is_empty());
    }

    #[test]
    fn sampling_is_idempotent() {
        for stride in 1..7 {
            let s = WireSampling::new(stride);
            for len in 0..40 {
                let drawn = s.indices(len);
                let again: Vec<usize> = drawn
                    .iter()
                    .copied()
                    .filter(|&i| s.keeps(i, len))
                    .collect();
                assert_eq!(drawn, again);
            }
        }
    }

    #[test]
    fn draws_sampled_wires_per_tpc() {
        let wires = layout(&[1, 5, 9], 25);
        let fig = plot_wires_plane_tpc(&wires, &PlotSpec::new(0).text_sampling(20)).unwrap();
        // 0, 10, 20, 24 in each of three TPCs.
        assert_eq!(fig.segments.len(), 12);
        // 0 and 20 are labelled.
        assert_eq!(fig.markers.len(), 6);
        assert_eq!(fig.labels.len(), 6);
        assert_eq!(fig.title, "U-plane, TPCs: (1, 5, 9)");
        assert_eq!(fig.x_label, "Z direction");
        assert_eq!(fig.y_label, "Y direction");
    }

    #[test]
    fn segments_use_z_y_projection() {
        let wires = layout(&[1], 3);
        let fig = plot_wires_plane_tpc(&wires, &PlotSpec::new(1).tpcs(&[1]).wire_sampling(1))
            .unwrap();
        assert_eq!(fig.segments[2].from, (2.0, 0.0));
        assert_eq!(fig.segments[2].to, (2.0, 600.0));
        assert_eq!(fig.segments[0].color, ColorMap::Rainbow.at(0.0));
        assert_eq!(fig.segments[2].color, ColorMap::Rainbow.at(1.0));
    }

    #[test]
    fn labels_are_shifted_by_tpc_offset() {
        let wires = layout(&[0, 1], 5);
        let spec = PlotSpec::new(2)
            .tpcs(&[0, 1])
            .offsets(&[(0.0, 20.0), (0.0, -20.0)]);
        let fig = plot_wires_plane_tpc(&wires, &spec).unwrap();
        assert_eq!(fig.markers[0].at, (0.0, 300.0));
        assert_eq!(fig.labels[0].at, (0.0, 320.0));
        assert_eq!(fig.labels[1].at, (0.0, 280.0));

        // sequence ids: tpc 0 plane 2 starts after 10 wires of planes 0 and 1.
        assert_eq!(fig.labels[0].text, "tpc:0\nwid:10\nwip:0\nch:10");
        assert_eq!(fig.title, "W-plane, TPCs: (0, 1)");
    }

    #[test]
    fn missing_tpc_is_skipped() {
        let wires = layout(&[1], 4);
        let fig = plot_wires_plane_tpc(&wires, &PlotSpec::new(0).tpcs(&[1, 7])).unwrap();
        assert_eq!(fig.segments.len(), 2);
        let empty = plot_wires_plane_tpc(&[], &PlotSpec::new(0)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn invalid_specs_are_rejected() {
        let wires = layout(&[1], 2);
        assert!(matches!(
            plot_wires_plane_tpc(&wires, &PlotSpec::new(3)),
            Err(WireError::PlaneOutOfRange(3))
        ));
        assert!(matches!(
            plot_wires_plane_tpc(&wires, &PlotSpec::new(0).wire_sampling(0)),
            Err(WireError::InvalidSampling { .. })
        ));
        assert!(matches!(
            plot_wires_plane_tpc(&wires, &PlotSpec::new(0).offsets(&[(1.0, 1.0)])),
            Err(WireError::OffsetMismatch { tpcs: 3, offsets: 1 })
        ));
    }

    #[test]
    fn single_tpc_title_uses_tuple_syntax() {
        let spec = PlotSpec::new(1).tpcs(&[4]);
        assert_eq!(spec.title(PlaneView::V), "V-plane, TPCs: (4,)");
    }

    #[test]
    fn overview_labels_every_hundredth_channel() {
        let wires = layout(&[0, 1], 50);
        let fig = plot_channel_overview(&wires, "all wires");
        assert_eq!(fig.segments.len(), 3);
        let texts: Vec<&str> = fig.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["ch 0", "ch 100", "ch 200"]);
        assert_eq!(fig.segments[0].color, ColorMap::Seismic.at(0.0));
    }
}
