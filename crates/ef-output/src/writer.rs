//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PathPointRow, ZoneRow};

/// Trait implemented by output backends.
///
/// Errors are surfaced through [`WalkOutputObserver::take_error`][crate::WalkOutputObserver::take_error]
/// because observer hooks have no return value.
pub trait OutputWriter {
    /// Write the full path of one agent.
    fn write_path(&mut self, rows: &[PathPointRow]) -> OutputResult<()>;

    /// Write the occupancy of every visited zone.
    fn write_zones(&mut self, rows: &[ZoneRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
