use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use palette::Srgb;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::error::{Result, WireError};
use crate::plot::figure::{Bounds, Figure};

use super::axes::AxisScale;

// Page geometry in mm: 8 x 6 inch landscape.
const PAGE_W: f32 = 203.2;
const PAGE_H: f32 = 152.4;
const LEFT: f32 = 24.0;
const RIGHT: f32 = 10.0;
const BOTTOM: f32 = 20.0;
const TOP: f32 = 16.0;

const TITLE_PT: f32 = 12.0;
const AXIS_PT: f32 = 10.0;
const TICK_PT: f32 = 8.0;
const LABEL_PT: f32 = 5.0;

const PT_TO_MM: f32 = 0.352_778;
/// Mean Helvetica glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.52;
const MARKER_MM: f32 = 0.9;

/// Page-space rectangle the data is drawn into.
struct PlotArea {
    x: AxisScale,
    y: AxisScale,
}

impl PlotArea {
    fn new(bounds: Bounds) -> Self {
        PlotArea {
            x: AxisScale::padded(bounds.x_min, bounds.x_max, 7),
            y: AxisScale::padded(bounds.y_min, bounds.y_max, 6),
        }
    }

    fn to_page(&self, p: (f64, f64)) -> (f32, f32) {
        (
            self.x.map(p.0, LEFT as f64, (PAGE_W - RIGHT) as f64) as f32,
            self.y.map(p.1, BOTTOM as f64, (PAGE_H - TOP) as f64) as f32,
        )
    }
}

/// Multi-page PDF writer, one figure per page.
///
/// The destination is created up front so an unwritable path fails before
/// any rendering work. Nothing reaches disk until [`PdfPages::finish`].
pub struct PdfPages {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    out: BufWriter<File>,
    path: PathBuf,
    pages: usize,
}

impl PdfPages {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| WireError::io(path, e))?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "wires".to_string());
        let doc = PdfDocument::empty(title);
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| WireError::Pdf(e.to_string()))?;

        Ok(PdfPages {
            doc,
            font,
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            pages: 0,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Render `fig` onto a new page. Primitives with non-finite
    /// coordinates are left out.
    pub fn add_figure(&mut self, fig: &Figure) {
        let fig = &fig.drawable();
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "figure");
        let layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;

        self.centered(&layer, &fig.title, TITLE_PT, PAGE_W / 2.0, PAGE_H - TOP / 2.0);

        let Some(bounds) = fig.bounds() else {
            self.frame(&layer);
            self.centered(&layer, "no wires", AXIS_PT, PAGE_W / 2.0, PAGE_H / 2.0);
            return;
        };
        let area = PlotArea::new(bounds);

        self.frame(&layer);
        self.ticks(&layer, &area);
        self.axis_labels(&layer, fig);

        layer.set_outline_thickness(0.5);
        for s in &fig.segments {
            stroke_color(&layer, s.color);
            polyline(&layer, &[area.to_page(s.from), area.to_page(s.to)], false);
        }

        layer.set_outline_thickness(1.5);
        for m in &fig.markers {
            stroke_color(&layer, m.color);
            let (x, y) = area.to_page(m.at);
            let d = MARKER_MM / 2.0;
            polyline(
                &layer,
                &[(x - d, y), (x, y + d), (x + d, y), (x, y - d)],
                true,
            );
        }

        layer.set_fill_color(black());
        for l in &fig.labels {
            let (x, y) = area.to_page(l.at);
            self.centered(&layer, &l.text, LABEL_PT, x, y);
        }
    }

    /// Write the document and flush it to disk. Returns the page count.
    pub fn finish(self) -> Result<usize> {
        let PdfPages {
            doc,
            mut out,
            path,
            pages,
            ..
        } = self;
        doc.save(&mut out)
            .map_err(|e| WireError::Pdf(e.to_string()))?;
        out.flush().map_err(|e| WireError::io(&path, e))?;
        log::info!("Wrote {pages} pages to {}", path.display());
        Ok(pages)
    }

    fn frame(&self, layer: &PdfLayerReference) {
        layer.set_outline_thickness(0.8);
        layer.set_outline_color(black());
        polyline(
            layer,
            &[
                (LEFT, BOTTOM),
                (PAGE_W - RIGHT, BOTTOM),
                (PAGE_W - RIGHT, PAGE_H - TOP),
                (LEFT, PAGE_H - TOP),
            ],
            true,
        );
    }

    fn ticks(&self, layer: &PdfLayerReference, area: &PlotArea) {
        layer.set_outline_thickness(0.5);
        layer.set_outline_color(black());
        layer.set_fill_color(black());

        for (t, label) in area.x.ticks.iter().zip(&area.x.tick_labels) {
            let x = area.x.map(*t, LEFT as f64, (PAGE_W - RIGHT) as f64) as f32;
            polyline(layer, &[(x, BOTTOM), (x, BOTTOM - 1.5)], false);
            self.centered(layer, label, TICK_PT, x, BOTTOM - 4.5);
        }
        for (t, label) in area.y.ticks.iter().zip(&area.y.tick_labels) {
            let y = area.y.map(*t, BOTTOM as f64, (PAGE_H - TOP) as f64) as f32;
            polyline(layer, &[(LEFT, y), (LEFT - 1.5, y)], false);
            let w = text_width(label, TICK_PT);
            self.centered(layer, label, TICK_PT, LEFT - 2.5 - w / 2.0, y);
        }
    }

    fn axis_labels(&self, layer: &PdfLayerReference, fig: &Figure) {
        layer.set_fill_color(black());
        self.centered(
            layer,
            &fig.x_label,
            AXIS_PT,
            (LEFT + PAGE_W - RIGHT) / 2.0,
            BOTTOM - 11.0,
        );
        // Unrotated, just above the vertical axis.
        let w = text_width(&fig.y_label, AXIS_PT);
        self.centered(layer, &fig.y_label, AXIS_PT, LEFT + w / 2.0, PAGE_H - TOP + 3.0);
    }

    /// Write possibly multi-line text centred on (x, y) in mm.
    fn centered(&self, layer: &PdfLayerReference, text: &str, size_pt: f32, x: f32, y: f32) {
        let line_h = size_pt * 1.2 * PT_TO_MM;
        let lines: Vec<&str> = text.lines().collect();
        let block_h = line_h * lines.len() as f32;
        let cap = size_pt * 0.7 * PT_TO_MM;
        let mut baseline = y + block_h / 2.0 - line_h + (line_h - cap) / 2.0;
        for line in lines {
            let w = text_width(line, size_pt);
            layer.use_text(line, size_pt, Mm(x - w / 2.0), Mm(baseline), &self.font);
            baseline -= line_h;
        }
    }
}

fn text_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * GLYPH_WIDTH * PT_TO_MM
}

fn polyline(layer: &PdfLayerReference, points: &[(f32, f32)], closed: bool) {
    let points = points
        .iter()
        .map(|&(x, y)| (Point::new(Mm(x), Mm(y)), false))
        .collect();
    layer.add_line(Line {
        points,
        is_closed: closed,
    });
}

fn to_pdf_color(c: Srgb) -> Color {
    Color::Rgb(Rgb::new(
        c.red.clamp(0.0, 1.0),
        c.green.clamp(0.0, 1.0),
        c.blue.clamp(0.0, 1.0),
        None,
    ))
}

fn stroke_color(layer: &PdfLayerReference, c: Srgb) {
    layer.set_outline_color(to_pdf_color(c));
}

fn black() -> Color {
    to_pdf_color(Srgb::new(0.0, 0.0, 0.0))
}

/// Number of `/Type /Page` objects in a written PDF.
#[cfg(test)]
pub(crate) fn count_page_objects(bytes: &[u8]) -> usize {
    (0..bytes.len())
        .filter(|&i| bytes[i..].starts_with(b"/Type"))
        .filter(|&i| {
            let rest = &bytes[i + 5..];
            let start = rest
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(rest.len());
            let rest = &rest[start..];
            rest.starts_with(b"/Page")
                && !rest.get(5).is_some_and(|b| b.is_ascii_alphanumeric())
        })
        .count()
}
