//! The in-memory mobility trace.

use rustc_hash::FxHashMap;

use vn_core::{Position, Timestep, VehicleId, VehicleIdx};

// ── PositionSample ────────────────────────────────────────────────────────────

/// One recorded position of one vehicle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSample {
    /// Trace time of the enclosing `<timestep>` block.  Informational only.
    pub timestep: Timestep,
    pub position: Position,
}

impl PositionSample {
    #[inline]
    pub fn new(timestep: Timestep, x: f64, y: f64) -> Self {
        Self { timestep, position: Position::new(x, y) }
    }
}

// ── VehicleTimeline ───────────────────────────────────────────────────────────

/// Samples of one vehicle in parse order.  Index `i` is timestamp `i`.
///
/// Append-only: samples are never removed or reordered.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleTimeline {
    samples: Vec<PositionSample>,
}

impl VehicleTimeline {
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample at timestamp `index`, if the timeline is that long.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PositionSample> {
        self.samples.get(index)
    }

    #[inline]
    pub fn position_at(&self, index: usize) -> Option<Position> {
        self.samples.get(index).map(|s| s.position)
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    fn push(&mut self, sample: PositionSample) {
        self.samples.push(sample);
    }
}

// ── MobilityTrace ─────────────────────────────────────────────────────────────

/// Vehicle id → timeline, built once per trace file and read-only afterwards.
///
/// Timelines are stored in a `Vec` indexed by [`VehicleIdx`], assigned in
/// order of first appearance; `index` maps trace ids to slots.  Iteration is
/// therefore in first-appearance order, which keeps every query (and every
/// seeded exposure draw downstream) reproducible.
#[derive(Clone, Debug, Default)]
pub struct MobilityTrace {
    ids:       Vec<VehicleId>,
    timelines: Vec<VehicleTimeline>,
    index:     FxHashMap<VehicleId, VehicleIdx>,
}

impl MobilityTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sample` to `id`'s timeline, creating the timeline if absent.
    ///
    /// Returns the vehicle's slot.
    pub fn record(&mut self, id: &str, sample: PositionSample) -> VehicleIdx {
        let idx = match self.index.get(id) {
            Some(&idx) => idx,
            None => {
                let idx = VehicleIdx(self.ids.len() as u32);
                let id = VehicleId::from(id);
                self.ids.push(id.clone());
                self.timelines.push(VehicleTimeline::default());
                self.index.insert(id, idx);
                idx
            }
        };
        self.timelines[idx.index()].push(sample);
        idx
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of distinct vehicles.
    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Total samples across all timelines.
    pub fn sample_count(&self) -> usize {
        self.timelines.iter().map(VehicleTimeline::len).sum()
    }

    /// Length of the longest timeline (0 for an empty trace).
    pub fn max_timeline_len(&self) -> usize {
        self.timelines.iter().map(VehicleTimeline::len).max().unwrap_or(0)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    pub fn idx_of(&self, id: &str) -> Option<VehicleIdx> {
        self.index.get(id).copied()
    }

    /// The timeline of vehicle `id`, if present.
    pub fn get(&self, id: &str) -> Option<&VehicleTimeline> {
        self.idx_of(id).map(|idx| &self.timelines[idx.index()])
    }

    /// The trace id of slot `idx`.
    ///
    /// # Panics
    /// Panics if `idx` was not issued by this trace.
    #[inline]
    pub fn id(&self, idx: VehicleIdx) -> &VehicleId {
        &self.ids[idx.index()]
    }

    /// The timeline of slot `idx`.
    ///
    /// # Panics
    /// Panics if `idx` was not issued by this trace.
    #[inline]
    pub fn timeline(&self, idx: VehicleIdx) -> &VehicleTimeline {
        &self.timelines[idx.index()]
    }

    /// All vehicles in first-appearance order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VehicleIdx, &VehicleId, &VehicleTimeline)> + '_ {
        self.ids
            .iter()
            .zip(&self.timelines)
            .enumerate()
            .map(|(i, (id, tl))| (VehicleIdx(i as u32), id, tl))
    }

    /// All vehicle ids in first-appearance order.
    pub fn ids(&self) -> &[VehicleId] {
        &self.ids
    }
}
