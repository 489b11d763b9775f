use ef_core::{AgentId, EfError};
use ef_layout::LayoutError;
use thiserror::Error;

use crate::Leg;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("simulation configuration error: {0}")]
    Config(#[from] EfError),

    #[error("non-finite value in {what}")]
    NonFinite { what: &'static str },

    #[error("{agent} stopped making progress on the {leg} leg")]
    Stalled {
        agent: AgentId,
        leg:   Leg,
    },
}

pub type SimResult<T> = Result<T, SimError>;
