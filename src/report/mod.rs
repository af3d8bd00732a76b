//! The wire layout report: a fixed table of plane/TPC plots, one PDF page each.

pub mod axes;
pub mod pdf;

use std::path::Path;

use crate::data::model::Wire;
use crate::error::Result;
use crate::plot::wires::{plot_channel_overview, plot_wires_plane_tpc, PlotSpec};

use self::pdf::PdfPages;

pub const DEFAULT_REPORT_PATH: &str = "larsoftwires.pdf";

/// Pages of the standard report, in order.
///
/// The first three pages show planes U, V, W for TPCs 1, 5 and 9; the last
/// three zoom in on TPCs 0 and 1 with labels pushed apart.
pub fn default_plan() -> Vec<PlotSpec> {
    vec![
        PlotSpec::new(0),
        PlotSpec::new(1),
        PlotSpec::new(2)
            .offsets(&[(0.0, 20.0), (0.0, -20.0), (0.0, 20.0)])
            .text_sampling(100),
        PlotSpec::new(0).tpcs(&[0, 1]).offsets(&[(8.0, 0.0), (-8.0, 0.0)]),
        PlotSpec::new(1).tpcs(&[0, 1]).offsets(&[(8.0, 0.0), (-8.0, 0.0)]),
        PlotSpec::new(2)
            .tpcs(&[0, 1])
            .offsets(&[(0.0, 20.0), (0.0, -20.0)])
            .text_sampling(50),
    ]
}

/// Write the standard report for `wires` to `path`. Returns the page count.
pub fn wire_plots(wires: &[Wire], path: &Path) -> Result<usize> {
    render_report(wires, &default_plan(), path)
}

/// Render each spec of `plan` as one page of the PDF at `path`.
///
/// If a plot fails, the pages rendered before it are still written out and
/// the plot error is returned.
pub fn render_report(wires: &[Wire], plan: &[PlotSpec], path: &Path) -> Result<usize> {
    let mut pages = PdfPages::create(path)?;

    let rendered = plan.iter().enumerate().try_for_each(|(i, spec)| -> Result<()> {
        let fig = plot_wires_plane_tpc(wires, spec)?;
        log::debug!("Page {}: {}", i + 1, fig.title);
        pages.add_figure(&fig);
        Ok(())
    });

    if let Err(e) = &rendered {
        log::error!("Report stopped after {} pages: {e}", pages.page_count());
    }
    let written = pages.finish()?;
    rendered.map(|_| written)
}

/// Write a single page with every hundredth wire and its channel.
pub fn overview_plot(wires: &[Wire], path: &Path) -> Result<usize> {
    let mut pages = PdfPages::create(path)?;
    pages.add_figure(&plot_channel_overview(wires, "Wire channels"));
    pages.finish()
}
