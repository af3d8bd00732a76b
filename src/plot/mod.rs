//! Wire layout plots. Plotters build a [`figure::Figure`]; writing it
//! anywhere is the caller's job (see `report::pdf`).

pub mod figure;
pub mod wires;
