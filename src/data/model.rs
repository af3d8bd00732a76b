use std::fmt;
use std::str::FromStr;

use crate::error::WireError;

/// A point in detector coordinates (x, y, z), in cm.
pub type Point3 = [f64; 3];

// ---------------------------------------------------------------------------
// Wire – one line of the dump
// ---------------------------------------------------------------------------

/// A single wire segment as read from the dump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    /// Position of the record in the loaded collection.
    pub sequence_id: usize,
    /// Index of the wire within its plane.
    pub wire_in_plane: i64,
    /// Electronics readout channel.
    pub channel: i64,
    pub cryostat: i64,
    pub tpc: i64,
    pub plane: i64,
    pub begin: Point3,
    pub end: Point3,
}

impl Wire {
    /// Midpoint of the wire in 3D.
    pub fn midpoint(&self) -> Point3 {
        [
            0.5 * (self.begin[0] + self.end[0]),
            0.5 * (self.begin[1] + self.end[1]),
            0.5 * (self.begin[2] + self.end[2]),
        ]
    }
}

impl fmt::Display for Wire {
    /// Writes the record back in the dump's column layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.channel, self.cryostat, self.tpc, self.plane, self.wire_in_plane
        )?;
        for v in self.begin.iter().chain(self.end.iter()) {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WireField – the integer attributes a wire can be selected by
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireField {
    SequenceId,
    WireInPlane,
    Channel,
    Cryostat,
    Tpc,
    Plane,
}

impl WireField {
    pub const ALL: [WireField; 6] = [
        WireField::SequenceId,
        WireField::WireInPlane,
        WireField::Channel,
        WireField::Cryostat,
        WireField::Tpc,
        WireField::Plane,
    ];

    /// Read this attribute from a wire.
    pub fn value(self, wire: &Wire) -> i64 {
        match self {
            WireField::SequenceId => wire.sequence_id as i64,
            WireField::WireInPlane => wire.wire_in_plane,
            WireField::Channel => wire.channel,
            WireField::Cryostat => wire.cryostat,
            WireField::Tpc => wire.tpc,
            WireField::Plane => wire.plane,
        }
    }

    /// Short column label used in summaries.
    pub fn short_name(self) -> &'static str {
        match self {
            WireField::SequenceId => "wid",
            WireField::WireInPlane => "wip",
            WireField::Channel => "ch",
            WireField::Cryostat => "cryo",
            WireField::Tpc => "tpc",
            WireField::Plane => "plane",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WireField::SequenceId => "sequence_id",
            WireField::WireInPlane => "wire_in_plane",
            WireField::Channel => "channel",
            WireField::Cryostat => "cryostat",
            WireField::Tpc => "tpc",
            WireField::Plane => "plane",
        }
    }
}

impl FromStr for WireField {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireField::ALL
            .into_iter()
            .find(|f| f.name() == s || f.short_name() == s)
            .ok_or_else(|| WireError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for WireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Projection helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn component(self, p: &Point3) -> f64 {
        match self {
            Axis::X => p[0],
            Axis::Y => p[1],
            Axis::Z => p[2],
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Readout plane letter: induction U and V, collection W.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneView {
    U,
    V,
    W,
}

impl PlaneView {
    pub fn from_index(plane: i64) -> Result<Self, WireError> {
        match plane {
            0 => Ok(PlaneView::U),
            1 => Ok(PlaneView::V),
            2 => Ok(PlaneView::W),
            other => Err(WireError::PlaneOutOfRange(other)),
        }
    }
}

impl fmt::Display for PlaneView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            PlaneView::U => "U",
            PlaneView::V => "V",
            PlaneView::W => "W",
        };
        write!(f, "{letter}")
    }
}
