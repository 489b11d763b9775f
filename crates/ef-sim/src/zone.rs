//! Zone occupancy grid.
//!
//! A sparse `ZoneKey → visit count` map.  Only zones an agent actually
//! stepped through have entries, so the grid costs nothing for empty floor.

use rustc_hash::FxHashMap;

use ef_core::ZoneKey;

/// Visit counts per zone for one simulation run.
///
/// Filled during the walk merge and read-only afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneOccupancyMap {
    counts: FxHashMap<ZoneKey, u32>,
}

impl ZoneOccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `steps` visits to `zone`.
    #[inline]
    pub fn record(&mut self, zone: ZoneKey, steps: u32) {
        *self.counts.entry(zone).or_insert(0) += steps;
    }

    /// Visits recorded for `zone` (0 if never visited).
    #[inline]
    pub fn get(&self, zone: ZoneKey) -> u32 {
        self.counts.get(&zone).copied().unwrap_or(0)
    }

    /// Number of distinct zones visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all visit counts.
    pub fn total_visits(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// Iterate `(zone, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneKey, u32)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    /// All entries ordered busiest first, ties by ascending key.
    pub fn ranked(&self) -> Vec<(ZoneKey, u32)> {
        let mut entries: Vec<(ZoneKey, u32)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<(ZoneKey, u32)> for ZoneOccupancyMap {
    fn from_iter<I: IntoIterator<Item = (ZoneKey, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (zone, count) in iter {
            map.record(zone, count);
        }
        map
    }
}
