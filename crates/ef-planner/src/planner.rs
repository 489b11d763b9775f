//! `EventPlanner` — validation, simulation and advice in one call.

use tracing::{info, warn};

use ef_advisor::{AdvisorInput, recommend};
use ef_core::{FlowConfig, SimRng};
use ef_sim::{FlowSimulator, NoopObserver, SimResult, WalkObserver, congestion};

use crate::{
    ErrorPayload, PlannerResponse, PlannerResult, ResponseMetrics, SimulationRequest, parse_request,
};

/// Serves simulation requests.  Holds configuration only; requests share no
/// state.
#[derive(Clone, Debug)]
pub struct EventPlanner {
    simulator: FlowSimulator,
}

impl EventPlanner {
    pub fn new(config: FlowConfig) -> SimResult<Self> {
        Ok(Self { simulator: FlowSimulator::new(config)? })
    }

    #[inline]
    pub fn config(&self) -> &FlowConfig {
        self.simulator.config()
    }

    /// Plan an event with an RNG seeded from the configuration.
    pub fn plan(&self, request: &SimulationRequest) -> PlannerResult<PlannerResponse> {
        let mut rng = SimRng::new(self.config().seed);
        self.plan_with(request, &mut rng, &mut NoopObserver)
    }

    /// Plan an event with an explicit RNG and walk observer.
    ///
    /// The layout is validated before `rng` is touched.
    pub fn plan_with<O: WalkObserver>(
        &self,
        request:  &SimulationRequest,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> PlannerResult<PlannerResponse> {
        let metrics = self.simulator.simulate(
            &request.layout,
            request.guest_count,
            request.duration_hours,
            rng,
            observer,
        )?;
        let zones = congestion::analyze(&metrics.zone_occupancy, metrics.sample_size, self.config());

        let recommendations = recommend(&AdvisorInput {
            guest_count:            request.guest_count,
            duration_hours:         request.duration_hours,
            avg_wait_time:          metrics.avg_wait_time,
            peak_concurrent_diners: metrics.peak_concurrent_diners,
            total_buffet_length_ft: metrics.total_buffet_length_ft,
            buffet_capacity:        metrics.buffet_capacity,
            congestion_zones:       zones.len(),
            venue_sq_ft:            request.layout.venue_sq_ft,
        });

        info!(
            guest_count = request.guest_count,
            avg_wait_time = metrics.avg_wait_time,
            hotspots = zones.len(),
            staff = recommendations.staff.count,
            "event plan ready"
        );

        Ok(PlannerResponse {
            success: true,
            metrics: ResponseMetrics::new(&metrics, zones.len()),
            congestion_zones: zones,
            recommendations,
        })
    }

    /// Parse a JSON body and plan it, mapping any failure to an
    /// [`ErrorPayload`].
    pub fn handle_json(&self, body: &str) -> Result<PlannerResponse, ErrorPayload> {
        parse_request(body)
            .and_then(|request| self.plan(&request))
            .map_err(|e| {
                warn!(error = %e, status = e.status(), "request rejected");
                ErrorPayload::from(e)
            })
    }

    /// Like [`handle_json`][Self::handle_json] but returns the status code and
    /// serialized body ready for a transport.
    pub fn respond_json(&self, body: &str) -> (u16, String) {
        let serialized = match self.handle_json(body) {
            Ok(response) => serde_json::to_string(&response).map(|s| (200, s)),
            Err(payload) => serde_json::to_string(&payload).map(|s| (payload.status, s)),
        };
        serialized.unwrap_or_else(|_| (500, r#"{"error":"Simulation failed"}"#.to_owned()))
    }
}
