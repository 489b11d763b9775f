//! `ef-planner` — the transport-agnostic boundary of the event flow
//! simulator.
//!
//! # Request flow
//!
//! ```text
//! JSON body
//!   → parse_request        MissingField / OutOfRange / Malformed
//!   → layout validation    InvalidLayout
//!   → FlowSimulator        metrics + zone occupancy
//!   → congestion::analyze  top hotspots
//!   → ef_advisor           staff / buffet / plates
//!   → PlannerResponse      { success, congestionZones, recommendations, metrics }
//! ```
//!
//! Failures become an [`ErrorPayload`] (`{ "error": "..." }`) with an
//! HTTP-style status for whatever transport sits in front.  Authentication,
//! persistence and request logging belong to that transport.

pub mod error;
pub mod planner;
pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use error::{ErrorPayload, PlannerError, PlannerResult};
pub use planner::EventPlanner;
pub use request::{SimulationRequest, parse_request};
pub use response::{PlannerResponse, ResponseMetrics};
