//! Boundary error taxonomy.

use serde::Serialize;
use thiserror::Error;

use ef_layout::LayoutError;
use ef_sim::SimError;

pub const GUEST_COUNT_RANGE: &str = "Guest count must be between 10 and 500";
pub const DURATION_RANGE: &str = "Duration must be between 1 and 8 hours";

/// Why a request was rejected.  Every variant is terminal for the request.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    OutOfRange(&'static str),

    #[error("{0}")]
    InvalidLayout(&'static str),

    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Details stay in the source chain; callers only see a generic message.
    #[error("Simulation failed")]
    InternalSimulationFailure(#[source] SimError),
}

impl PlannerError {
    /// HTTP-style status: 400 for client errors, 500 for internal failures.
    pub fn status(&self) -> u16 {
        match self {
            PlannerError::InternalSimulationFailure(_) => 500,
            _ => 400,
        }
    }
}

impl From<SimError> for PlannerError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::Layout(LayoutError::InvalidLayout(msg)) => PlannerError::InvalidLayout(msg),
            other => PlannerError::InternalSimulationFailure(other),
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

/// The `{ "error": "..." }` body returned for a rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip)]
    pub status: u16,
}

impl From<&PlannerError> for ErrorPayload {
    fn from(e: &PlannerError) -> Self {
        Self { error: e.to_string(), status: e.status() }
    }
}

impl From<PlannerError> for ErrorPayload {
    fn from(e: PlannerError) -> Self {
        Self::from(&e)
    }
}
