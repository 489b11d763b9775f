//! `ef-advisor` — turns simulation metrics into catering advice.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`input`]     | `AdvisorInput`                                            |
//! | [`advice`]    | `Recommendations`, the three sub-recommendations, `Confidence` |
//! | [`engine`]    | `recommend` and the three pure per-topic functions        |
//!
//! Everything here is a pure function of its input: no RNG, no state, no
//! failure modes.

pub mod advice;
pub mod engine;
pub mod input;


pub use advice::{BuffetRecommendation, Confidence, PlateRecommendation, Recommendations, StaffRecommendation};
pub use engine::{recommend, recommend_buffet, recommend_plates, recommend_staff};
pub use input::AdvisorInput;
