//! Recommendation output types.

use std::fmt;

/// How strongly the metrics back a recommendation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Confidence {
    High,
    Medium,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::High   => "High",
            Confidence::Medium => "Medium",
        })
    }
}

/// Servers to book.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StaffRecommendation {
    pub count:      u32,
    /// Guests per server.
    pub ratio:      u32,
    pub reason:     String,
    pub confidence: Confidence,
}

/// Total buffet frontage to set up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BuffetRecommendation {
    pub current_length_ft:     f64,
    pub recommended_length_ft: f64,
    pub minimum_length_ft:     u32,
    pub comfortable_length_ft: u32,
    pub reason:                String,
    pub confidence:            Confidence,
}

/// Plates to stock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlateRecommendation {
    pub guest_count: u32,
    pub buffer:      u32,
    pub total:       u32,
    pub reason:      String,
    pub confidence:  Confidence,
}

/// The full advisory payload for one event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendations {
    pub staff:  StaffRecommendation,
    pub buffet: BuffetRecommendation,
    pub plates: PlateRecommendation,
}
