//! Axial hex-grid coordinates and distance queries.
//!
//! The battlefield is a pointy-top hex grid addressed with axial coordinates
//! `(q, r)`. Distance is the standard cube-coordinate hex distance, which is
//! what "attack range" and "capture range" are measured in.

use serde::{Deserialize, Serialize};

/// A tile position on the hex grid, in axial coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Axial offsets of the six neighboring tiles, in clockwise order.
    pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex distance to another tile.
    ///
    /// Equivalent to the cube-coordinate distance
    /// `max(|dq|, |dr|, |ds|)` with `s = -q - r`, computed in axial form.
    pub fn distance(self, other: Self) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u32
    }

    /// The six tiles adjacent to this one.
    pub fn neighbors(self) -> [HexCoord; 6] {
        Self::DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q + dq, self.r + dr))
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
