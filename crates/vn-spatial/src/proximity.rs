//! Reference-vehicle neighbor scan.

use std::collections::BTreeSet;

use vn_core::{Diagnostic, Diagnostics, VehicleId};
use vn_trace::MobilityTrace;

// ── NeighborResult ────────────────────────────────────────────────────────────

/// Vehicles within range of a reference at one timestamp, and which of them
/// were marked exposed.
///
/// The exposed set is always a subset of the neighbor set, so
/// `exposed_count() <= count()` holds by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborResult {
    neighbors: BTreeSet<VehicleId>,
    exposed:   BTreeSet<VehicleId>,
}

impl NeighborResult {
    /// The zero-valued result returned by soft failures.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_neighbors(neighbors: BTreeSet<VehicleId>) -> Self {
        Self { neighbors, exposed: BTreeSet::new() }
    }

    /// Replace the exposed set.  Ids that are not neighbors are dropped.
    pub fn set_exposed(&mut self, exposed: BTreeSet<VehicleId>) {
        let neighbors = &self.neighbors;
        self.exposed = exposed.into_iter().filter(|id| neighbors.contains(id)).collect();
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn exposed_count(&self) -> usize {
        self.exposed.len()
    }

    pub fn neighbor_ids(&self) -> &BTreeSet<VehicleId> {
        &self.neighbors
    }

    pub fn exposed_ids(&self) -> &BTreeSet<VehicleId> {
        &self.exposed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.neighbors.contains(id)
    }
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// Vehicles within `radius` of `reference` at timestamp `index`.
///
/// Fails softly:
///
/// | Condition                               | Result                     |
/// |-----------------------------------------|----------------------------|
/// | `reference` not in the trace            | empty + `UnknownVehicle`   |
/// | `index >=` reference timeline length    | empty + `ReferenceOutOfRange` |
/// | `index >=` a candidate's timeline length| candidate skipped + `CandidateOutOfRange` |
///
/// The reference is excluded by identity, so a second vehicle parked on the
/// same spot still counts.  The boundary is inclusive (`distance == radius`
/// is in range).  A negative or NaN radius matches nothing.
pub fn query_neighbors(
    trace:     &MobilityTrace,
    reference: &str,
    index:     usize,
    radius:    f64,
    diags:     &mut Diagnostics,
) -> NeighborResult {
    let Some(ref_idx) = trace.idx_of(reference) else {
        diags.push(Diagnostic::UnknownVehicle { vehicle: VehicleId::from(reference) });
        return NeighborResult::empty();
    };

    let ref_timeline = trace.timeline(ref_idx);
    let Some(origin) = ref_timeline.position_at(index) else {
        diags.push(Diagnostic::ReferenceOutOfRange {
            vehicle: trace.id(ref_idx).clone(),
            index,
            len:     ref_timeline.len(),
        });
        return NeighborResult::empty();
    };

    let mut neighbors = BTreeSet::new();
    for (idx, id, timeline) in trace.iter() {
        if idx == ref_idx {
            continue;
        }
        match timeline.position_at(index) {
            Some(pos) => {
                if origin.distance(pos) <= radius {
                    neighbors.insert(id.clone());
                }
            }
            None => diags.push(Diagnostic::CandidateOutOfRange {
                vehicle: id.clone(),
                index,
                len:     timeline.len(),
            }),
        }
    }

    NeighborResult::from_neighbors(neighbors)
}
