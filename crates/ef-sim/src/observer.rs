//! Walk observer trait for recording agent movement.

use ef_agent::Agent;
use ef_core::{AgentId, ZoneKey};

use crate::ZoneOccupancyMap;

/// Callbacks invoked by [`FlowSimulator::simulate`][crate::FlowSimulator::simulate]
/// while agent walks are merged into the occupancy map.
///
/// Hooks fire in ascending `AgentId` order, with each agent's visits in step
/// order, regardless of whether the walks themselves ran in parallel.
///
/// All methods have default no-op implementations.
pub trait WalkObserver {
    /// `steps` consecutive transit steps of `agent` counted against `zone`.
    fn on_zone_visit(&mut self, _agent: AgentId, _zone: ZoneKey, _steps: u32) {}

    /// `agent` reached the exit.  Its full path is available.
    fn on_agent_done(&mut self, _agent: &Agent) {}

    /// Called once after every agent has been merged.
    fn on_walk_end(&mut self, _occupancy: &ZoneOccupancyMap) {}
}

/// A [`WalkObserver`] that does nothing.
pub struct NoopObserver;

impl WalkObserver for NoopObserver {}
