//! Reader and diagnostic plots for detector wire geometry dumps.
//!
//! A dump has one wire per line: channel, cryostat, TPC, plane, wire index
//! and the two 3D endpoints. This crate loads it into [`Wire`] records,
//! selects subsets by attribute, prints per-(TPC, plane) counts and draws
//! the wire layout of each plane into a multi-page PDF.
//!
//! ```no_run
//! use std::path::Path;
//! use larsoft_wires::{load, print_summary, wire_plots};
//!
//! let wires = load(Path::new("WireDump_ProtoDUNESP_v2_2.txt"))?;
//! print_summary(&wires);
//! wire_plots(&wires, Path::new("larsoftwires.pdf"))?;
//! # Ok::<(), larsoft_wires::WireError>(())
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod plot;
pub mod report;

pub use data::filter::{distinct, select_by, select_by_name};
pub use data::loader::load;
pub use data::model::{Wire, WireField};
pub use data::summary::{print_summary, summarize, Summary};
pub use error::WireError;
pub use plot::wires::{plot_wires_plane_tpc, PlotSpec};
pub use report::{default_plan, render_report, wire_plots, DEFAULT_REPORT_PATH};
