//! The `FlowSimulator` and its run phases.

use tracing::{debug, warn};

use ef_core::{AgentId, FlowConfig, SimRng};
use ef_layout::{Layout, validate};

use crate::walk::walk_agent;
use crate::{AgentWalk, SimError, SimResult, SimulationMetrics, WalkObserver, ZoneOccupancyMap};
use crate::queue;

/// Runs queueing estimates and the sampled agent walk for a venue layout.
///
/// The simulator holds only configuration; every call to
/// [`simulate`][Self::simulate] builds its own agents and zone map, so one
/// instance can serve any number of independent requests.
#[derive(Clone, Debug)]
pub struct FlowSimulator {
    config: FlowConfig,
}

impl FlowSimulator {
    /// Validate `config` and build a simulator.
    pub fn new(config: FlowConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Number of agents walked for `guest_count` guests.
    #[inline]
    pub fn sample_size(&self, guest_count: u32) -> u32 {
        guest_count.min(self.config.sample_cap)
    }

    /// Simulate one event.
    ///
    /// `rng` supplies the wait-time jitter; agent routing uses per-agent RNGs
    /// derived from `rng.seed()`.  The layout is validated before any
    /// randomness is consumed.
    pub fn simulate<O: WalkObserver>(
        &self,
        layout:         &Layout,
        guest_count:    u32,
        duration_hours: f64,
        rng:            &mut SimRng,
        observer:       &mut O,
    ) -> SimResult<SimulationMetrics> {
        validate(layout)?;

        // ── Queueing estimates ────────────────────────────────────────────
        let peak = queue::peak_concurrent_diners(guest_count, duration_hours);
        let total_length = layout.total_buffet_length_ft(self.config.default_buffet_length_ft);
        if !total_length.is_finite() {
            return Err(SimError::NonFinite { what: "buffet length" });
        }
        let capacity = queue::buffet_capacity(total_length);
        let service_rate = queue::service_rate(capacity);
        let arrival_rate = queue::arrival_rate_at_peak(peak);
        let avg_wait_time = queue::avg_wait_time(arrival_rate, service_rate, rng);
        let max_queue_length = queue::max_queue_length(peak, capacity);

        debug!(
            guest_count,
            duration_hours,
            peak,
            capacity,
            service_rate,
            arrival_rate,
            avg_wait_time,
            "queueing estimates"
        );

        // ── Sampled walk + merge (ascending AgentId) ──────────────────────
        let sample_size = self.sample_size(guest_count);
        let mut zone_occupancy = ZoneOccupancyMap::new();
        self.walk_sample(layout, sample_size, rng, |walk| {
            for &(zone, steps) in &walk.visits {
                zone_occupancy.record(zone, steps);
                observer.on_zone_visit(walk.agent.id, zone, steps);
            }
            observer.on_agent_done(&walk.agent);
        })
        .inspect_err(|e| {
            warn!(error = %e, "agent walk aborted");
        })?;
        observer.on_walk_end(&zone_occupancy);

        debug!(
            sample_size,
            zones = zone_occupancy.len(),
            visits = zone_occupancy.total_visits(),
            "agent walk complete"
        );

        Ok(SimulationMetrics {
            avg_wait_time,
            peak_concurrent_diners: peak,
            max_queue_length,
            buffet_capacity: capacity,
            total_buffet_length_ft: total_length,
            service_rate,
            arrival_rate_at_peak: arrival_rate,
            sample_size,
            zone_occupancy,
        })
    }

    /// Walk `sample_size` agents and hand each finished walk to `merge` in
    /// ascending `AgentId` order.
    ///
    /// Sequentially, each walk is merged and dropped before the next agent
    /// starts.  With `parallel`, walks are computed on the pool and merged
    /// afterward.  On error, earlier agents may already have been merged.
    fn walk_sample<F>(
        &self,
        layout:      &Layout,
        sample_size: u32,
        rng:         &SimRng,
        mut merge:   F,
    ) -> SimResult<()>
    where
        F: FnMut(AgentWalk),
    {
        let config = &self.config;

        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..sample_size {
                let id = AgentId(i);
                merge(walk_agent(id, layout, config, &mut rng.agent(id))?);
            }
            Ok(())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed parallel collect preserves the input order.
            let walks: Vec<AgentWalk> = (0..sample_size)
                .into_par_iter()
                .map(|i| {
                    let id = AgentId(i);
                    walk_agent(id, layout, config, &mut rng.agent(id))
                })
                .collect::<SimResult<_>>()?;
            walks.into_iter().for_each(&mut merge);
            Ok(())
        }
    }
}
