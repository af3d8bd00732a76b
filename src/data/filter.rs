use std::collections::BTreeSet;

use crate::error::Result;

use super::model::{Wire, WireField};

// ---------------------------------------------------------------------------
// Exact-match selection
// ---------------------------------------------------------------------------

/// Return the wires whose `field` equals `value`, keeping their order.
pub fn select_by(wires: &[Wire], field: WireField, value: i64) -> Vec<Wire> {
    wires
        .iter()
        .filter(|w| field.value(w) == value)
        .copied()
        .collect()
}

/// Like [`select_by`] but with the field given by name.
///
/// Unknown names are an error rather than an empty selection.
pub fn select_by_name(wires: &[Wire], name: &str, value: i64) -> Result<Vec<Wire>> {
    let field: WireField = name.parse()?;
    Ok(select_by(wires, field, value))
}

/// Sorted set of values `field` takes across `wires`.
pub fn distinct(wires: &[Wire], field: WireField) -> BTreeSet<i64> {
    wires.iter().map(|w| field.value(w)).collect()
}
