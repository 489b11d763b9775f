//! Inputs to the recommendation engine.

/// The request fields and simulation results the advice is based on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvisorInput {
    pub guest_count:            u32,
    pub duration_hours:         f64,
    /// Minutes.
    pub avg_wait_time:          f64,
    pub peak_concurrent_diners: u32,
    pub total_buffet_length_ft: f64,
    pub buffet_capacity:        u32,
    /// Number of congestion hotspots found in the layout.
    pub congestion_zones:       usize,
    pub venue_sq_ft:            f64,
}

impl AdvisorInput {
    /// Floor area per guest, or `None` when the venue size is unknown.
    pub fn sq_ft_per_guest(&self) -> Option<f64> {
        (self.venue_sq_ft > 0.0 && self.guest_count > 0)
            .then(|| self.venue_sq_ft / self.guest_count as f64)
    }
}
