//! Minimum-element check run before any simulation work.
//!
//! Only the presence of tables and buffet stations is checked.  Entry, exit
//! and `venueSqFt` are trusted, and coordinates are not range-checked here;
//! the simulator reports non-finite arithmetic on its own.

use crate::{Layout, LayoutError, LayoutResult};

pub const NO_TABLES: &str = "Layout must include at least one table";
pub const NO_BUFFETS: &str = "Layout must include at least one buffet station";

/// Fail with [`LayoutError::InvalidLayout`] if the layout has no tables or no
/// buffet stations.  Tables are checked first.
pub fn validate(layout: &Layout) -> LayoutResult<()> {
    if layout.tables.is_empty() {
        return Err(LayoutError::InvalidLayout(NO_TABLES));
    }
    if layout.buffets.is_empty() {
        return Err(LayoutError::InvalidLayout(NO_BUFFETS));
    }
    Ok(())
}
