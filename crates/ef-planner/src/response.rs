//! Success payload.

use serde::Serialize;

use ef_advisor::Recommendations;
use ef_sim::{CongestionZone, SimulationMetrics};

/// Headline figures shown next to the recommendations.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetrics {
    /// Minutes, formatted with one decimal place.
    pub avg_wait_time:    String,
    pub peak_diners:      u32,
    /// Number of hotspots reported.
    pub congestion_zones: usize,
    /// Guests the buffet line serves at once.
    pub service_capacity: u32,
    pub max_queue_length: u32,
    pub sample_size:      u32,
}

impl ResponseMetrics {
    pub fn new(metrics: &SimulationMetrics, congestion_zones: usize) -> Self {
        Self {
            avg_wait_time:    format!("{:.1}", metrics.avg_wait_time),
            peak_diners:      metrics.peak_concurrent_diners,
            congestion_zones,
            service_capacity: metrics.buffet_capacity,
            max_queue_length: metrics.max_queue_length,
            sample_size:      metrics.sample_size,
        }
    }
}

/// The combined result of one successful simulation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerResponse {
    pub success:          bool,
    pub congestion_zones: Vec<CongestionZone>,
    pub recommendations:  Recommendations,
    pub metrics:          ResponseMetrics,
}
