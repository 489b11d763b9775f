//! `ef-output` — simulation output writers.
//!
//! | Backend | Files created                                    |
//! |---------|--------------------------------------------------|
//! | CSV     | `agent_paths.csv`, `zone_occupancy.csv`          |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`WalkOutputObserver`], which implements `ef_sim::WalkObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ef_output::{CsvWriter, WalkOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = WalkOutputObserver::new(writer, config.zone_size);
//! sim.simulate(&layout, 120, 3.0, &mut rng, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::WalkOutputObserver;
pub use row::{PathPointRow, ZoneRow};
pub use writer::OutputWriter;
