//! Hit testing over computed control regions.
//!
//! [`SpatialMap`] keeps control regions in placement order and answers which
//! control lies under a point.

use crate::control::ControlId;
use crate::geometry::{Offset, Region};

/// Control regions with point queries.
///
/// Placements of a resolved grid never overlap. For hand-built maps, later
/// entries are in front of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SpatialMap {
    entries: Vec<(ControlId, Region)>,
}

impl SpatialMap {
    /// Create an empty spatial map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `entries`; the last entry is frontmost.
    pub fn update_ordered(&mut self, entries: &[(ControlId, Region)]) {
        self.entries.clear();
        self.entries.extend_from_slice(entries);
    }

    /// The frontmost control containing `point`.
    pub fn control_at(&self, point: Offset) -> Option<ControlId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, region)| region.contains(point.x, point.y))
            .map(|&(id, _)| id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
