//! The recommendation rules.
//!
//! Each topic is decided independently; [`recommend`] simply bundles the
//! three.  Counts use integer ceiling division so thresholds are exact.

use crate::advice::{
    BuffetRecommendation, Confidence, PlateRecommendation, Recommendations, StaffRecommendation,
};
use crate::AdvisorInput;

// ── Staff ─────────────────────────────────────────────────────────────────────

pub const GUESTS_PER_SERVER: u32 = 45;
pub const GUESTS_PER_SERVER_CONGESTED: u32 = 35;
pub const GUESTS_PER_SERVER_EFFICIENT: u32 = 50;
/// Minutes above which the line counts as congested.
pub const CONGESTED_WAIT_MINUTES: f64 = 6.0;
/// Minutes below which service counts as efficient.
pub const EFFICIENT_WAIT_MINUTES: f64 = 3.0;

// ── Buffet ────────────────────────────────────────────────────────────────────

/// Minimum feet of buffet per ten guests.
pub const MIN_FT_PER_TEN_GUESTS: u32 = 1;
/// Comfortable feet of buffet per hundred guests (1.5 ft per ten).
pub const COMFORTABLE_FT_PER_HUNDRED_GUESTS: u32 = 15;
/// Floor area per guest below which walkways get tight.
pub const CROWDED_SQ_FT_PER_GUEST: f64 = 10.0;

// ── Plates ────────────────────────────────────────────────────────────────────

/// Spare plates per hundred guests.
pub const PLATE_BUFFER_PERCENT: u32 = 18;

/// Produce all three recommendations.
pub fn recommend(input: &AdvisorInput) -> Recommendations {
    Recommendations {
        staff:  recommend_staff(input),
        buffet: recommend_buffet(input),
        plates: recommend_plates(input),
    }
}

/// Servers needed, chosen by the average-wait bracket.
pub fn recommend_staff(input: &AdvisorInput) -> StaffRecommendation {
    let wait = input.avg_wait_time;
    let (ratio, confidence, mut reason) = if wait > CONGESTED_WAIT_MINUTES {
        (
            GUESTS_PER_SERVER_CONGESTED,
            Confidence::Medium,
            format!(
                "Average wait of {wait:.1} minutes points to buffet congestion; \
                 one server per {GUESTS_PER_SERVER_CONGESTED} guests keeps the line moving."
            ),
        )
    } else if wait < EFFICIENT_WAIT_MINUTES {
        (
            GUESTS_PER_SERVER_EFFICIENT,
            Confidence::High,
            format!(
                "Average wait of {wait:.1} minutes shows efficient service; \
                 one server per {GUESTS_PER_SERVER_EFFICIENT} guests is enough."
            ),
        )
    } else {
        (
            GUESTS_PER_SERVER,
            Confidence::High,
            format!(
                "Average wait of {wait:.1} minutes is within normal range; \
                 the standard one server per {GUESTS_PER_SERVER} guests applies."
            ),
        )
    };

    match input.congestion_zones {
        0 => {}
        1 => reason.push_str(" One congestion hotspot was found; post a server near it."),
        n => reason.push_str(&format!(
            " {n} congestion hotspots were found; post servers near the busiest ones."
        )),
    }

    StaffRecommendation {
        count: input.guest_count.div_ceil(ratio),
        ratio,
        reason,
        confidence,
    }
}

/// Buffet frontage compared against the minimum and comfortable lengths.
pub fn recommend_buffet(input: &AdvisorInput) -> BuffetRecommendation {
    let guests = input.guest_count;
    let current = input.total_buffet_length_ft;
    let minimum = (guests * MIN_FT_PER_TEN_GUESTS).div_ceil(10);
    let comfortable = (guests * COMFORTABLE_FT_PER_HUNDRED_GUESTS).div_ceil(100);

    let (recommended, confidence, mut reason) = if current < minimum as f64 {
        (
            minimum as f64,
            Confidence::High,
            format!(
                "Current buffet length of {current} ft is below the {minimum} ft minimum for \
                 {guests} guests; extend the line to avoid long queues."
            ),
        )
    } else if current < comfortable as f64 {
        (
            comfortable as f64,
            Confidence::Medium,
            format!(
                "Current buffet length of {current} ft meets minimum but could improve; \
                 {comfortable} ft gives {guests} guests a comfortable flow."
            ),
        )
    } else {
        (
            current,
            Confidence::High,
            format!(
                "Current buffet length of {current} ft exceeds the comfortable {comfortable} ft \
                 for {guests} guests; there is capacity to spare."
            ),
        )
    };

    if let Some(density) = input.sq_ft_per_guest().filter(|&d| d < CROWDED_SQ_FT_PER_GUEST) {
        reason.push_str(&format!(
            " The venue allows only {density:.1} sq ft per guest, so keep serving lines clear of walkways."
        ));
    }

    BuffetRecommendation {
        current_length_ft: current,
        recommended_length_ft: recommended,
        minimum_length_ft: minimum,
        comfortable_length_ft: comfortable,
        reason,
        confidence,
    }
}

/// Plates with an 18 % allowance on top of the guest count.
pub fn recommend_plates(input: &AdvisorInput) -> PlateRecommendation {
    let guests = input.guest_count;
    let buffer = (guests * PLATE_BUFFER_PERCENT).div_ceil(100);
    PlateRecommendation {
        guest_count: guests,
        buffer,
        total: guests + buffer,
        reason: format!(
            "{guests} guests plus {buffer} spare plates ({PLATE_BUFFER_PERCENT}%) to cover \
             replacements, accidents, and guests making multiple trips."
        ),
        confidence: Confidence::High,
    }
}
