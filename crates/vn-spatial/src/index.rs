//! Per-timestamp spatial index.
//!
//! An R-tree (via `rstar`) over every vehicle that has a sample at one
//! timestamp index.  Range lookups prefilter with a square envelope, then
//! apply the same inclusive Euclidean test as [`query_neighbors`], so both
//! paths agree on boundary cases.
//!
//! [`query_neighbors`]: crate::query_neighbors

use std::collections::BTreeSet;

use rstar::{AABB, RTree, RTreeObject};

use vn_core::{Position, VehicleIdx};
use vn_trace::MobilityTrace;

use crate::NeighborResult;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct VehicleEntry {
    point: [f64; 2], // [x, y]
    idx:   VehicleIdx,
}

impl RTreeObject for VehicleEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── SnapshotIndex ─────────────────────────────────────────────────────────────

/// All positions at one timestamp index, spatially indexed.
///
/// Vehicles whose timelines are shorter than the index are simply absent.
pub struct SnapshotIndex {
    index:     usize,
    /// Position of each vehicle slot at `index`; `None` if its timeline is
    /// too short.  Indexed by `VehicleIdx`.
    positions: Vec<Option<Position>>,
    tree:      RTree<VehicleEntry>,
}

impl SnapshotIndex {
    /// Bulk-load the positions of every vehicle present at `index`.
    pub fn build(trace: &MobilityTrace, index: usize) -> Self {
        let positions: Vec<Option<Position>> = trace
            .iter()
            .map(|(_, _, timeline)| timeline.position_at(index))
            .collect();

        let entries: Vec<VehicleEntry> = positions
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| {
                pos.map(|p| VehicleEntry { point: [p.x, p.y], idx: VehicleIdx(i as u32) })
            })
            .collect();

        Self { index, positions, tree: RTree::bulk_load(entries) }
    }

    /// The timestamp index this snapshot was built for.
    #[inline]
    pub fn timestamp(&self) -> usize {
        self.index
    }

    /// Number of vehicles present at this timestamp.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Slots of all vehicles present, ascending.
    pub fn present(&self) -> impl Iterator<Item = VehicleIdx> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_some())
            .map(|(i, _)| VehicleIdx(i as u32))
    }

    #[inline]
    pub fn position(&self, idx: VehicleIdx) -> Option<Position> {
        self.positions.get(idx.index()).copied().flatten()
    }

    /// Vehicles within `radius` of `reference`, excluding `reference` itself.
    ///
    /// Returns `None` if `reference` has no sample at this timestamp.
    /// `trace` must be the trace the snapshot was built from.
    pub fn neighbors(
        &self,
        trace:     &MobilityTrace,
        reference: VehicleIdx,
        radius:    f64,
    ) -> Option<NeighborResult> {
        let origin = self.position(reference)?;
        if radius.is_nan() || radius < 0.0 {
            return Some(NeighborResult::empty());
        }

        // Padded so float rounding at the envelope edge never hides a point
        // that the exact distance test below would accept.
        let reach = radius + radius * 1e-9 + 1e-12;
        let envelope = AABB::from_corners(
            [origin.x - reach, origin.y - reach],
            [origin.x + reach, origin.y + reach],
        );

        let neighbors: BTreeSet<_> = self
            .tree
            .locate_in_envelope(&envelope)
            .filter(|e| e.idx != reference)
            .filter(|e| origin.distance(Position::new(e.point[0], e.point[1])) <= radius)
            .map(|e| trace.id(e.idx).clone())
            .collect();

        Some(NeighborResult::from_neighbors(neighbors))
    }
}
