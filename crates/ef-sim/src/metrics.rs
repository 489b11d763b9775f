//! Per-run simulation output.

use crate::ZoneOccupancyMap;

/// Aggregate queueing figures and raw zone tallies for one run.
///
/// Recomputed from scratch on every call to
/// [`FlowSimulator::simulate`][crate::FlowSimulator::simulate].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationMetrics {
    /// Minutes, one decimal place.
    pub avg_wait_time:          f64,
    pub peak_concurrent_diners: u32,
    pub max_queue_length:       u32,
    pub buffet_capacity:        u32,
    pub total_buffet_length_ft: f64,
    /// Guests served per minute.
    pub service_rate:           f64,
    /// Guests arriving per minute at the peak.
    pub arrival_rate_at_peak:   f64,
    /// Agents actually walked.
    pub sample_size:            u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub zone_occupancy:         ZoneOccupancyMap,
}
