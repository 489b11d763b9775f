//! Plain data row types written by output backends.

/// One point of one agent's path.  Step 0 is the entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPointRow {
    pub agent_id: u32,
    pub step:     u32,
    pub x:        f64,
    pub y:        f64,
}

/// Final visit count of one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRow {
    pub bx:     i32,
    pub by:     i32,
    /// Lower-left corner of the zone.
    pub x:      f64,
    pub y:      f64,
    pub visits: u32,
}
