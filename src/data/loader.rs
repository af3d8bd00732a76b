use std::path::Path;

use crate::error::{Result, WireError};

use super::model::{Point3, Wire};

/// Columns per dump line: channel, cryostat, tpc, plane, wire, begin xyz, end xyz.
pub const COLUMNS_PER_LINE: usize = 11;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every wire from a whitespace separated dump file.
///
/// Layout of one line (no header row):
///
/// ```text
/// channel cryostat tpc plane wire  beg_x beg_y beg_z  end_x end_y end_z
/// ```
///
/// Blank lines are skipped. The first malformed line aborts the load.
pub fn load(path: &Path) -> Result<Vec<Wire>> {
    let text = std::fs::read_to_string(path).map_err(|e| WireError::io(path, e))?;
    let wires = parse_str(&text)?;
    log::info!("Loaded {} wires from {}", wires.len(), path.display());
    Ok(wires)
}

/// Parse an in-memory dump. Sequence ids follow the order of the lines.
pub fn parse_str(text: &str) -> Result<Vec<Wire>> {
    let mut wires = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let wire = parse_line(line, wires.len()).map_err(|e| at_line(e, line_no + 1))?;
        wires.push(wire);
    }
    Ok(wires)
}

/// Parse one dump line. Errors carry line 0; `parse_str` fills in the real line.
pub fn parse_line(line: &str, sequence_id: usize) -> Result<Wire> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != COLUMNS_PER_LINE {
        return Err(WireError::TokenCount {
            line: 0,
            found: tokens.len(),
        });
    }

    let mut ints = [0i64; 5];
    for (column, slot) in ints.iter_mut().enumerate() {
        *slot = parse_token(tokens[column], column)?;
    }

    let mut reals = [0f64; 6];
    for (i, slot) in reals.iter_mut().enumerate() {
        *slot = parse_token(tokens[5 + i], 5 + i)?;
    }

    let begin: Point3 = [reals[0], reals[1], reals[2]];
    let end: Point3 = [reals[3], reals[4], reals[5]];

    Ok(Wire {
        sequence_id,
        wire_in_plane: ints[4],
        channel: ints[0],
        cryostat: ints[1],
        tpc: ints[2],
        plane: ints[3],
        begin,
        end,
    })
}

fn parse_token<T: std::str::FromStr>(token: &str, column: usize) -> Result<T> {
    token.parse::<T>().map_err(|_| WireError::Number {
        line: 0,
        column,
        token: token.to_string(),
    })
}

fn at_line(err: WireError, line: usize) -> WireError {
    match err {
        WireError::TokenCount { found, .. } => WireError::TokenCount { line, found },
        WireError::Number { column, token, .. } => WireError::Number {
            line,
            column,
            token,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_WIRES: &str = "0 0 0 0 0 0.0 0.0 0.0 1.0 1.0 1.0\n\
                             1 0 0 0 1 1.0 1.0 1.0 2.0 2.0 2.0\n";

    #[test]
    fn parses_two_line_dump() {
        let wires = parse_str(TWO_WIRES).unwrap();
        assert_eq!(wires.len(), 2);
        assert_eq!(wires[0].sequence_id, 0);
        assert_eq!(wires[1].sequence_id, 1);
        assert_eq!(wires[0].channel, 0);
        assert_eq!(wires[1].channel, 1);
        assert_eq!(wires[1].wire_in_plane, 1);
        assert_eq!(wires[0].begin, [0.0, 0.0, 0.0]);
        assert_eq!(wires[0].end, [1.0, 1.0, 1.0]);
        assert_eq!(wires[1].begin, [1.0, 1.0, 1.0]);
        assert_eq!(wires[1].end, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn column_order_maps_to_fields() {
        let wire = parse_line("15359 0 11 2 479  -0.5 6.0 464.9 -0.5 606.0 464.9", 3).unwrap();
        assert_eq!(wire.sequence_id, 3);
        assert_eq!(wire.channel, 15359);
        assert_eq!(wire.cryostat, 0);
        assert_eq!(wire.tpc, 11);
        assert_eq!(wire.plane, 2);
        assert_eq!(wire.wire_in_plane, 479);
        assert_eq!(wire.end[1], 606.0);
    }

    #[test]
    fn blank_lines_do_not_consume_sequence_ids() {
        let text = format!("\n{TWO_WIRES}\n   \n{TWO_WIRES}");
        let wires = parse_str(&text).unwrap();
        let ids: Vec<usize> = wires.iter().map(|w| w.sequence_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn wrong_token_count_reports_file_line() {
        let text = "0 0 0 0 0 0.0 0.0 0.0 1.0 1.0 1.0\n\n1 0 0 0 1 1.0 1.0\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, WireError::TokenCount { line: 3, found: 7 }));
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let err = parse_str("0 0 x 0 0 0.0 0.0 0.0 1.0 1.0 1.0").unwrap_err();
        match err {
            WireError::Number {
                line,
                column,
                token,
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn number_error_message_counts_columns_from_one() {
        let err = parse_str("0 0 x 0 0 0.0 0.0 0.0 1.0 1.0 1.0").unwrap_err();
        assert_eq!(err.to_string(), "Line 1, column 3: 'x' is not a number");
    }

    #[test]
    fn float_in_integer_column_is_rejected() {
        let err = parse_str("0.5 0 0 0 0 0.0 0.0 0.0 1.0 1.0 1.0").unwrap_err();
        assert!(matches!(err, WireError::Number { column: 0, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/wire_dump.txt")).unwrap_err();
        assert!(matches!(err, WireError::Io { .. }));
    }
}
