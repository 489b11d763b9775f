//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_paths.csv`
//! - `zone_occupancy.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathPointRow, ZoneRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    paths:    Writer<File>,
    zones:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut paths = Writer::from_path(dir.join("agent_paths.csv"))?;
        paths.write_record(["agent_id", "step", "x", "y"])?;

        let mut zones = Writer::from_path(dir.join("zone_occupancy.csv"))?;
        zones.write_record(["bx", "by", "x", "y", "visits"])?;

        Ok(Self { paths, zones, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_path(&mut self, rows: &[PathPointRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.agent_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_zones(&mut self, rows: &[ZoneRow]) -> OutputResult<()> {
        for row in rows {
            self.zones.write_record(&[
                row.bx.to_string(),
                row.by.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.visits.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.paths.flush()?;
        self.zones.flush()?;
        Ok(())
    }
}
