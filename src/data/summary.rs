use std::collections::BTreeSet;
use std::fmt;

use super::filter::{distinct, select_by};
use super::model::{Wire, WireField};

/// Fields whose distinct values are counted, in report order.
pub const COUNTED_FIELDS: [WireField; 5] = [
    WireField::Channel,
    WireField::Cryostat,
    WireField::Tpc,
    WireField::Plane,
    WireField::WireInPlane,
];

/// Channel and wire counts for one (TPC, plane) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCount {
    pub tpc: i64,
    pub plane: i64,
    pub channels: usize,
    pub wires: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Distinct value count per field, in [`COUNTED_FIELDS`] order.
    pub distinct: Vec<(WireField, usize)>,
    pub cells: Vec<CellCount>,
}

impl Summary {
    pub fn distinct_count(&self, field: WireField) -> Option<usize> {
        self.distinct
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, n)| *n)
    }
}

/// Count distinct identifiers and per-(TPC, plane) channels and wires.
///
/// TPC and plane indices are walked as `0..distinct_count`, so a dump whose
/// indices are not contiguous from zero gets cells that miss real indices.
pub fn summarize(wires: &[Wire]) -> Summary {
    let distinct_counts: Vec<(WireField, usize)> = COUNTED_FIELDS
        .iter()
        .map(|&f| (f, distinct(wires, f).len()))
        .collect();

    let n_tpc = distinct(wires, WireField::Tpc).len() as i64;
    let n_plane = distinct(wires, WireField::Plane).len() as i64;

    let mut cells = Vec::with_capacity((n_tpc * n_plane) as usize);
    for tpc in 0..n_tpc {
        let in_tpc = select_by(wires, WireField::Tpc, tpc);
        for plane in 0..n_plane {
            let cell = select_by(&in_tpc, WireField::Plane, plane);
            let channels: BTreeSet<i64> = cell.iter().map(|w| w.channel).collect();
            cells.push(CellCount {
                tpc,
                plane,
                channels: channels.len(),
                wires: cell.len(),
            });
        }
    }

    Summary {
        distinct: distinct_counts,
        cells,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, n) in &self.distinct {
            writeln!(f, "#{}: {} ", field.short_name(), n)?;
        }
        for c in &self.cells {
            writeln!(
                f,
                "tpc:{} plane:{} #chans:{} #wires:{}",
                c.tpc, c.plane, c.channels, c.wires
            )?;
        }
        Ok(())
    }
}

/// Print the summary of `wires` to standard output.
pub fn print_summary(wires: &[Wire]) {
    print!("{}", summarize(wires));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_str;

    fn dump() -> Vec<Wire> {
        // Channel 7 is shared by two wire segments in tpc 1 plane 0,
        // as wrapped induction wires are in the real detector.
        parse_str(
            "0 0 0 0 0 0 0 0 0 1 1\n\
             1 0 0 0 1 0 0 1 0 1 2\n\
             2 0 0 1 0 0 0 0 0 1 1\n\
             7 0 1 0 0 0 0 0 0 1 1\n\
             7 0 1 0 1 0 0 5 0 1 6\n\
             3 0 1 1 0 0 0 0 0 1 1\n",
        )
        .unwrap()
    }

    #[test]
    fn counts_distinct_fields() {
        let s = summarize(&dump());
        assert_eq!(s.distinct_count(WireField::Channel), Some(5));
        assert_eq!(s.distinct_count(WireField::Cryostat), Some(1));
        assert_eq!(s.distinct_count(WireField::Tpc), Some(2));
        assert_eq!(s.distinct_count(WireField::Plane), Some(2));
        assert_eq!(s.distinct_count(WireField::WireInPlane), Some(2));
        assert_eq!(s.distinct_count(WireField::SequenceId), None);
    }

    #[test]
    fn cells_cover_index_range_and_respect_channel_bound() {
        let s = summarize(&dump());
        assert_eq!(s.cells.len(), 4);
        let shared = s.cells.iter().find(|c| c.tpc == 1 && c.plane == 0).unwrap();
        assert_eq!(shared.channels, 1);
        assert_eq!(shared.wires, 2);
        assert!(s.cells.iter().all(|c| c.channels <= c.wires));
    }

    #[test]
    fn non_contiguous_tpcs_walk_from_zero() {
        let wires = parse_str("0 0 4 0 0 0 0 0 0 1 1\n1 0 9 0 0 0 0 0 0 1 1\n").unwrap();
        let s = summarize(&wires);
        let tpcs: Vec<i64> = s.cells.iter().map(|c| c.tpc).collect();
        assert_eq!(tpcs, vec![0, 1]);
        assert!(s.cells.iter().all(|c| c.wires == 0));
    }

    #[test]
    fn display_matches_report_layout() {
        let text = summarize(&dump()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#ch: 5 ");
        assert_eq!(lines[4], "#wip: 2 ");
        assert_eq!(lines[5], "tpc:0 plane:0 #chans:2 #wires:2");
        assert_eq!(lines[7], "tpc:1 plane:0 #chans:1 #wires:2");
    }

    #[test]
    fn empty_dump_has_no_cells() {
        let s = summarize(&[]);
        assert!(s.cells.is_empty());
        assert!(s.distinct.iter().all(|(_, n)| *n == 0));
    }
}
