//! One sampled guest's route through the venue.

use std::fmt;

use ef_agent::{Agent, AgentState};
use ef_core::{AgentId, AgentRng, FlowConfig, Point, StationId, TableId, ZoneKey};
use ef_layout::validate::{NO_BUFFETS, NO_TABLES};
use ef_layout::{Layout, LayoutError};

use crate::{SimError, SimResult};

/// A straight-line segment of the route, named by its destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Leg {
    Table,
    Buffet,
    Exit,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Leg::Table  => "table",
            Leg::Buffet => "buffet",
            Leg::Exit   => "exit",
        })
    }
}

/// The finished walk of one agent.
#[derive(Clone, Debug)]
pub struct AgentWalk {
    pub agent:   Agent,
    pub table:   TableId,
    pub station: StationId,
    /// Zones of the transit steps in step order, consecutive steps in the
    /// same zone collapsed into one `(zone, steps)` run.  Arrival steps are
    /// not included.
    pub visits:  Vec<(ZoneKey, u32)>,
}


/// Walk agent `id` from the entry to a random table, a random buffet station,
/// then the exit.
///
/// Table and station are drawn uniformly from `rng`, table first.
pub fn walk_agent(
    id:     AgentId,
    layout: &Layout,
    config: &FlowConfig,
    rng:    &mut AgentRng,
) -> SimResult<AgentWalk> {
    let table = rng
        .choose_index(layout.tables.len())
        .map(|i| TableId(i as u32))
        .ok_or(LayoutError::InvalidLayout(NO_TABLES))?;
    let station = rng
        .choose_index(layout.buffets.len())
        .map(|i| StationId(i as u32))
        .ok_or(LayoutError::InvalidLayout(NO_BUFFETS))?;

    let table_pos = layout.tables[table.index()];
    let station_pos = layout.buffets[station.index()].position();

    let mut agent = Agent::new(id, layout.entry);
    let mut visits = Vec::new();

    let route = [
        (Leg::Table,  AgentState::ToTable,  table_pos),
        (Leg::Buffet, AgentState::ToBuffet, station_pos),
        (Leg::Exit,   AgentState::ToExit,   layout.exit),
    ];
    for (leg, state, target) in route {
        agent.state = state;
        walk_leg(&mut agent, leg, target, config, &mut visits)?;
    }
    agent.state = AgentState::Done;

    Ok(AgentWalk {
        agent,
        table,
        station,
        visits,
    })
}

/// Step toward `target` until arrival, recording the zone after every step
/// that did not arrive.
///
/// Every non-arriving step must bring the agent strictly closer to `target`.
/// A step that does not (the coordinates are too large for `step_speed` to
/// register) aborts the leg with [`SimError::Stalled`].
fn walk_leg(
    agent:  &mut Agent,
    leg:    Leg,
    target: Point,
    config: &FlowConfig,
    visits: &mut Vec<(ZoneKey, u32)>,
) -> SimResult<()> {
    if !target.is_finite() || !agent.position().is_finite() {
        return Err(SimError::NonFinite { what: "layout coordinates" });
    }

    let mut remaining = agent.position().distance(target);
    loop {
        if agent.move_to(target.x, target.y, config.step_speed) {
            return Ok(());
        }
        let now = agent.position().distance(target);
        if now >= remaining {
            return Err(SimError::Stalled { agent: agent.id, leg });
        }
        remaining = now;

        let zone = ZoneKey::containing(agent.position(), config.zone_size);
        match visits.last_mut() {
            Some((last, steps)) if *last == zone => *steps += 1,
            _ => visits.push((zone, 1)),
        }
    }
}
