use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use larsoft_wires::report::{overview_plot, DEFAULT_REPORT_PATH};
use larsoft_wires::{load, print_summary, select_by, wire_plots, Wire, WireField};

#[derive(Parser)]
#[command(name = "larsoft-wires")]
#[command(about = "Summarize and plot a detector wire geometry dump")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print distinct counts and per-(TPC, plane) channel/wire counts
    Summary {
        /// Wire dump file
        dump: PathBuf,
    },
    /// Print the wires whose field equals a value
    Select {
        dump: PathBuf,
        /// Field name, e.g. tpc, plane, channel, wire_in_plane
        #[arg(short, long)]
        field: WireField,
        #[arg(short, long, allow_hyphen_values = true)]
        value: i64,
    },
    /// Write the six page wire layout report
    Plots {
        dump: PathBuf,
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// Write a single page showing every hundredth wire's channel
    Overview {
        dump: PathBuf,
        #[arg(short, long, default_value = "overview.pdf")]
        output: PathBuf,
    },
}

fn load_dump(path: &Path) -> Result<Vec<Wire>> {
    load(path).with_context(|| format!("loading wire dump {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Summary { dump } => {
            let wires = load_dump(&dump)?;
            print_summary(&wires);
        }
        Command::Select { dump, field, value } => {
            let wires = load_dump(&dump)?;
            let selected = select_by(&wires, field, value);
            log::info!("{} of {} wires have {field} == {value}", selected.len(), wires.len());
            for wire in &selected {
                println!("{wire}");
            }
        }
        Command::Plots { dump, output } => {
            let wires = load_dump(&dump)?;
            wire_plots(&wires, &output)
                .with_context(|| format!("writing report {}", output.display()))?;
        }
        Command::Overview { dump, output } => {
            let wires = load_dump(&dump)?;
            overview_plot(&wires, &output)
                .with_context(|| format!("writing overview {}", output.display()))?;
        }
    }
    Ok(())
}
