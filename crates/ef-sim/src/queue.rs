//! First-order buffet queueing model.
//!
//! All rates are per minute.  The peak load is assumed to arrive over a
//! ten-minute window; one guest occupies two linear feet of buffet frontage
//! and each occupied slot serves half a guest per minute.

use ef_core::SimRng;

/// Share of guests eating at once for events of `LONG_EVENT_HOURS` or more.
pub const PEAK_SHARE_LONG_EVENT: f64 = 0.4;
/// Share of guests eating at once for shorter events.
pub const PEAK_SHARE_SHORT_EVENT: f64 = 0.5;
pub const LONG_EVENT_HOURS: f64 = 4.0;

pub const FEET_PER_GUEST: f64 = 2.0;
pub const SERVICE_PER_SLOT: f64 = 0.5;
pub const PEAK_WINDOW_MINUTES: f64 = 10.0;

pub const BASE_WAIT_MINUTES: f64 = 2.0;
pub const WAIT_PER_LOAD_RATIO: f64 = 4.0;
pub const MAX_WAIT_MINUTES: f64 = 10.0;

/// Guests eating simultaneously at the busiest moment.
///
/// Longer events stagger arrivals, so a smaller share overlaps.
pub fn peak_concurrent_diners(guest_count: u32, duration_hours: f64) -> u32 {
    let share = if duration_hours >= LONG_EVENT_HOURS {
        PEAK_SHARE_LONG_EVENT
    } else {
        PEAK_SHARE_SHORT_EVENT
    };
    (guest_count as f64 * share).floor() as u32
}

/// Guests the buffet line can serve at once.  Negative or NaN totals give 0.
pub fn buffet_capacity(total_buffet_length_ft: f64) -> u32 {
    (total_buffet_length_ft / FEET_PER_GUEST).floor() as u32
}

#[inline]
pub fn service_rate(buffet_capacity: u32) -> f64 {
    buffet_capacity as f64 * SERVICE_PER_SLOT
}

#[inline]
pub fn arrival_rate_at_peak(peak_concurrent_diners: u32) -> f64 {
    peak_concurrent_diners as f64 / PEAK_WINDOW_MINUTES
}

/// Round to one decimal place.
#[inline]
pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Wait when arrivals outpace service: grows with the load ratio, capped at
/// `MAX_WAIT_MINUTES`.  A zero service rate yields the cap.
pub fn congested_wait(arrival_rate: f64, service_rate: f64) -> f64 {
    let ratio = arrival_rate / service_rate;
    round_tenth((BASE_WAIT_MINUTES + WAIT_PER_LOAD_RATIO * ratio).min(MAX_WAIT_MINUTES))
}

/// Average minutes a guest waits at the buffet.
///
/// Even with spare capacity there is some queueing, so the uncongested case
/// draws one uniform jitter from `rng` and lands on one of the tenths
/// 2.0 ..= 2.9 with equal probability.  The congested case consumes no
/// randomness.
pub fn avg_wait_time(arrival_rate: f64, service_rate: f64, rng: &mut SimRng) -> f64 {
    if service_rate >= arrival_rate {
        let jitter: f64 = rng.random();
        round_tenth(BASE_WAIT_MINUTES + (jitter * 10.0).floor() / 10.0)
    } else {
        congested_wait(arrival_rate, service_rate)
    }
}

/// Guests left standing in line at the peak.
#[inline]
pub fn max_queue_length(peak_concurrent_diners: u32, buffet_capacity: u32) -> u32 {
    peak_concurrent_diners.saturating_sub(buffet_capacity)
}
