//! Congestion hotspot extraction.
//!
//! A zone is congested when its visit count exceeds `congestion_threshold`
//! times the sample size.  Visits count transit steps, so one agent lingering
//! across a zone contributes several visits and `percent_traffic` may exceed
//! 100 while `severity` saturates at 1.

use ef_core::{FlowConfig, ZoneKey};

use crate::ZoneOccupancyMap;

/// A grid cell whose sampled traffic crossed the threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CongestionZone {
    /// Lower-left corner of the zone in venue coordinates.
    pub x:               f64,
    pub y:               f64,
    /// `visits / sample_size`, capped at 1.
    pub severity:        f64,
    /// `visits / sample_size` as a rounded percentage.
    pub percent_traffic: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub zone:            ZoneKey,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub visits:          u32,
}

/// Busiest zones above the threshold, most visited first (ties by ascending
/// zone key), at most `config.max_congestion_zones` of them.
///
/// An empty sample yields no zones.
pub fn analyze(
    occupancy:   &ZoneOccupancyMap,
    sample_size: u32,
    config:      &FlowConfig,
) -> Vec<CongestionZone> {
    if sample_size == 0 {
        return vec![];
    }
    let sample = sample_size as f64;
    let threshold = sample * config.congestion_threshold;

    occupancy
        .ranked()
        .into_iter()
        .filter(|&(_, visits)| (visits as f64) > threshold)
        .take(config.max_congestion_zones)
        .map(|(zone, visits)| {
            let share = visits as f64 / sample;
            let origin = zone.origin(config.zone_size);
            CongestionZone {
                x:               origin.x,
                y:               origin.y,
                severity:        share.min(1.0),
                percent_traffic: (share * 100.0).round() as u32,
                zone,
                visits,
            }
        })
        .collect()
}
