//! Planar coordinate type and zone bucketing.
//!
//! Venue coordinates are unit-less floats, read as feet.  `f64` is used
//! throughout: agents advance in half-unit steps and the zone tallies depend
//! on those steps landing exactly on the grid.

use std::fmt;

/// A position on the venue floor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// `false` if either coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── ZoneKey ───────────────────────────────────────────────────────────────────

/// A square grid cell, identified by its bucket indices.
///
/// Buckets use floor division, so `-0.5` falls in bucket `-1` rather than
/// sharing bucket `0` with `+0.5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneKey {
    pub bx: i32,
    pub by: i32,
}

impl ZoneKey {
    #[inline]
    pub const fn new(bx: i32, by: i32) -> Self {
        Self { bx, by }
    }

    /// The zone containing `p` on a grid of `zone_size`-unit cells.
    ///
    /// Coordinates outside the `i32` bucket range saturate.
    #[inline]
    pub fn containing(p: Point, zone_size: f64) -> Self {
        Self {
            bx: (p.x / zone_size).floor() as i32,
            by: (p.y / zone_size).floor() as i32,
        }
    }

    /// Lower-left corner of the zone in venue coordinates.
    #[inline]
    pub fn origin(self, zone_size: f64) -> Point {
        Point::new(self.bx as f64 * zone_size, self.by as f64 * zone_size)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.bx, self.by)
    }
}
