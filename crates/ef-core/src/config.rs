//! Simulation tunables.
//!
//! Every constant the flow model depends on lives here so a deployment can
//! adjust them without touching the algorithm.  `FlowConfig::default()` holds
//! the calibrated values; with the `serde` feature a JSON file may override
//! any subset of them.

use crate::{EfError, EfResult};

/// Top-level configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Maximum number of guests walked through the layout.  Results are
    /// statistical estimates over this sample, not the full population.
    pub sample_cap: u32,

    /// Distance an agent covers per `move_to` call.
    pub step_speed: f64,

    /// Side length of a square congestion zone.
    pub zone_size: f64,

    /// Fraction of the sample a zone's visit count must exceed to be
    /// reported as congested.
    pub congestion_threshold: f64,

    /// Maximum number of congestion zones reported per run.
    pub max_congestion_zones: usize,

    /// Buffet length assumed for stations that omit `lengthFt`.
    pub default_buffet_length_ft: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            seed:                     42,
            sample_cap:               50,
            step_speed:               0.5,
            zone_size:                5.0,
            congestion_threshold:     0.3,
            max_congestion_zones:     5,
            default_buffet_length_ft: 20.0,
        }
    }
}

impl FlowConfig {
    /// Default configuration with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Reject values that would make the walk loop or the zone grid
    /// meaningless.
    pub fn validate(&self) -> EfResult<()> {
        if !(self.step_speed.is_finite() && self.step_speed > 0.0) {
            return Err(EfError::Config(format!(
                "step_speed must be positive, got {}",
                self.step_speed
            )));
        }
        if !(self.zone_size.is_finite() && self.zone_size > 0.0) {
            return Err(EfError::Config(format!(
                "zone_size must be positive, got {}",
                self.zone_size
            )));
        }
        if !(0.0..=1.0).contains(&self.congestion_threshold) {
            return Err(EfError::Config(format!(
                "congestion_threshold must be within [0, 1], got {}",
                self.congestion_threshold
            )));
        }
        if self.sample_cap == 0 {
            return Err(EfError::Config("sample_cap must be at least 1".into()));
        }
        if !(self.default_buffet_length_ft.is_finite() && self.default_buffet_length_ft >= 0.0) {
            return Err(EfError::Config(format!(
                "default_buffet_length_ft must be non-negative, got {}",
                self.default_buffet_length_ft
            )));
        }
        Ok(())
    }

    /// Parse a JSON configuration.  Missing keys take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> EfResult<Self> {
        let config: FlowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    #[cfg(feature = "serde")]
    pub fn from_path(path: &std::path::Path) -> EfResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
