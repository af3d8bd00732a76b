/// Data layer: wire records, loading, selection and summary counts.
///
/// Architecture:
/// ```text
///   wire dump (.txt, 11 columns)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Vec<Wire>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  exact match on a WireField → ordered subset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  distinct counts, per (tpc, plane) channels / wires
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
