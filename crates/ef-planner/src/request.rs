//! Request parsing and range validation.

use serde::Deserialize;

use ef_layout::Layout;

use crate::error::{DURATION_RANGE, GUEST_COUNT_RANGE};
use crate::{PlannerError, PlannerResult};

pub const MIN_GUESTS: u32 = 10;
pub const MAX_GUESTS: u32 = 500;
pub const MIN_DURATION_HOURS: f64 = 1.0;
pub const MAX_DURATION_HOURS: f64 = 8.0;

/// Wire shape: every field optional so absence can be reported by name.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    layout:      Option<Layout>,
    guest_count: Option<f64>,
    duration:    Option<f64>,
}

/// A request that passed presence and range checks.  The layout itself is
/// checked later, by the planner.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationRequest {
    pub layout:         Layout,
    pub guest_count:    u32,
    pub duration_hours: f64,
}

impl SimulationRequest {
    /// Range-check `guest_count` (whole number in `[10, 500]`) and
    /// `duration_hours` (`[1, 8]`).
    pub fn new(layout: Layout, guest_count: f64, duration_hours: f64) -> PlannerResult<Self> {
        let guests_ok = guest_count.fract() == 0.0
            && (MIN_GUESTS as f64..=MAX_GUESTS as f64).contains(&guest_count);
        if !guests_ok {
            return Err(PlannerError::OutOfRange(GUEST_COUNT_RANGE));
        }
        if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&duration_hours) {
            return Err(PlannerError::OutOfRange(DURATION_RANGE));
        }
        Ok(Self {
            layout,
            guest_count: guest_count as u32,
            duration_hours,
        })
    }
}

/// Parse a `{ layout, guestCount, duration }` JSON body.
///
/// Missing (or `null`) fields are reported in the order layout, guestCount,
/// duration; range errors for guestCount before duration.
pub fn parse_request(json: &str) -> PlannerResult<SimulationRequest> {
    let raw: RawRequest = serde_json::from_str(json)?;
    let layout = raw.layout.ok_or(PlannerError::MissingField("layout"))?;
    let guest_count = raw.guest_count.ok_or(PlannerError::MissingField("guestCount"))?;
    let duration = raw.duration.ok_or(PlannerError::MissingField("duration"))?;
    SimulationRequest::new(layout, guest_count, duration)
}
