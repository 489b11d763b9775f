//! `ef-core` — foundational types for the event flow simulator.
//!
//! This crate is a dependency of every other `ef-*` crate.  It has no `ef-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TableId`, `StationId`                     |
//! | [`geo`]         | `Point`, `ZoneKey`, Euclidean distance                |
//! | [`config`]      | `FlowConfig` (all tunables, with defaults)            |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (per-run)            |
//! | [`error`]       | `EfError`, `EfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public types and         |
//! |         | `FlowConfig::from_json_str`.                               |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FlowConfig;
pub use error::{EfError, EfResult};
pub use geo::{Point, ZoneKey};
pub use ids::{AgentId, StationId, TableId};
pub use rng::{AgentRng, SimRng};
