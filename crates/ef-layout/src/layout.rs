//! Venue layout types.
//!
//! Field names follow the camelCase JSON the booking front end submits:
//!
//! ```json
//! {
//!   "tables":  [{ "x": 10, "y": 10 }],
//!   "buffets": [{ "x": 50, "y": 50, "lengthFt": 40 }],
//!   "entry":   { "x": 0,   "y": 0 },
//!   "exit":    { "x": 100, "y": 100 },
//!   "venueSqFt": 2000
//! }
//! ```

use serde::{Deserialize, Serialize};

use ef_core::Point;

/// A buffet serving line.  `length_ft` bounds how many guests it can serve
/// at once; stations that omit it use the configured default.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffetStation {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,
}

impl BuffetStation {
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn length_or(&self, default_ft: f64) -> f64 {
        self.length_ft.unwrap_or(default_ft)
    }
}

/// A venue floor plan submitted with one simulation request.
///
/// Absent `tables` / `buffets` deserialize as empty lists so that
/// [`validate`][crate::validate] can report which one is missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub tables: Vec<Point>,
    #[serde(default)]
    pub buffets: Vec<BuffetStation>,
    pub entry: Point,
    pub exit: Point,
    #[serde(default)]
    pub venue_sq_ft: f64,
}

impl Layout {
    /// Combined frontage of every buffet station.
    pub fn total_buffet_length_ft(&self, default_ft: f64) -> f64 {
        self.buffets.iter().map(|b| b.length_or(default_ft)).sum()
    }
}
