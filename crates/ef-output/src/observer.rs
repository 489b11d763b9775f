//! `WalkOutputObserver<W>` — bridges `WalkObserver` to an `OutputWriter`.

use ef_agent::Agent;
use ef_sim::{WalkObserver, ZoneOccupancyMap};

use crate::row::{PathPointRow, ZoneRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WalkObserver`] that writes every agent's path and the final zone
/// occupancy to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally.  After `simulate` returns,
/// check for them with [`take_error`][Self::take_error].
pub struct WalkOutputObserver<W: OutputWriter> {
    writer:     W,
    zone_size:  f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> WalkOutputObserver<W> {
    /// `zone_size` converts bucket indices back to coordinates; pass the
    /// value from the run's `FlowConfig`.
    pub fn new(writer: W, zone_size: f64) -> Self {
        Self { writer, zone_size, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WalkObserver for WalkOutputObserver<W> {
    fn on_agent_done(&mut self, agent: &Agent) {
        let rows: Vec<PathPointRow> = agent
            .path
            .iter()
            .enumerate()
            .map(|(step, p)| PathPointRow {
                agent_id: agent.id.0,
                step:     step as u32,
                x:        p.x,
                y:        p.y,
            })
            .collect();
        let result = self.writer.write_path(&rows);
        self.store_err(result);
    }

    fn on_walk_end(&mut self, occupancy: &ZoneOccupancyMap) {
        let rows: Vec<ZoneRow> = occupancy
            .ranked()
            .into_iter()
            .map(|(zone, visits)| {
                let origin = zone.origin(self.zone_size);
                ZoneRow { bx: zone.bx, by: zone.by, x: origin.x, y: origin.y, visits }
            })
            .collect();
        let result = self.writer.write_zones(&rows).and_then(|_| self.writer.finish());
        self.store_err(result);
    }
}
