use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Writes a synthetic ProtoDUNE-like wire dump for trying out the tool.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    #[arg(default_value = "sample_wire_dump.txt")]
    output: PathBuf,
}

/// One dump line, in file column order.
#[derive(Serialize)]
struct DumpRow {
    channel: u32,
    cryostat: u32,
    tpc: u32,
    plane: u32,
    wire: u32,
    beg_x: f64,
    beg_y: f64,
    beg_z: f64,
    end_x: f64,
    end_y: f64,
    end_z: f64,
}

const N_TPC: u32 = 12;
const APA_HEIGHT: f64 = 600.0;
const APA_LENGTH: f64 = 230.0;
const DRIFT_X: f64 = 360.0;

/// Induction wires per plane and the channels they wrap onto.
const INDUCTION_WIRES: u32 = 500;
const INDUCTION_CHANNELS: u32 = 400;
const COLLECTION_WIRES: u32 = 480;
const CHANNELS_PER_TPC: u32 = 2 * INDUCTION_CHANNELS + COLLECTION_WIRES;

const WIRE_ANGLE_DEG: f64 = 35.7;

fn plane_rows(tpc: u32, plane: u32) -> Vec<DumpRow> {
    let x = if tpc % 2 == 0 { -DRIFT_X } else { DRIFT_X };
    let z0 = (tpc / 2) as f64 * APA_LENGTH;

    let (n_wires, slope) = match plane {
        0 => (INDUCTION_WIRES, WIRE_ANGLE_DEG.to_radians().tan()),
        1 => (INDUCTION_WIRES, -WIRE_ANGLE_DEG.to_radians().tan()),
        _ => (COLLECTION_WIRES, 0.0),
    };
    let pitch = APA_LENGTH / n_wires as f64;
    let half_dz = 0.5 * APA_HEIGHT * slope * 0.25;

    (0..n_wires)
        .map(|wire| {
            let zc = z0 + (wire as f64 + 0.5) * pitch;
            let channel_in_plane = match plane {
                0 | 1 => wire % INDUCTION_CHANNELS,
                _ => wire,
            };
            DumpRow {
                channel: tpc * CHANNELS_PER_TPC + plane * INDUCTION_CHANNELS + channel_in_plane,
                cryostat: 0,
                tpc,
                plane,
                wire,
                beg_x: x,
                beg_y: 0.0,
                beg_z: zc - half_dz,
                end_x: x,
                end_y: APA_HEIGHT,
                end_z: zc + half_dz,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut n_rows = 0usize;
    for tpc in 0..N_TPC {
        for plane in 0..3 {
            for row in plane_rows(tpc, plane) {
                writer.serialize(&row).context("writing dump row")?;
                n_rows += 1;
            }
        }
    }
    writer.flush().context("flushing dump")?;

    println!("Wrote {n_rows} wires to {}", args.output.display());
    Ok(())
}
