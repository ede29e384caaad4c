//! Multi-run studies: exposure sweeps, fleet-wide census, dataset comparison.

use tracing::{debug, info};
use vn_core::{SimRng, VnError};
use vn_model::ExposureModel;
use vn_spatial::SnapshotIndex;
use vn_trace::MobilityTrace;

use crate::{Analysis, AnalysisResult, NoopObserver, RunSummary};

// ── Exposure sweep ────────────────────────────────────────────────────────────

impl Analysis {
    /// Run once per exposure probability, everything else unchanged.
    ///
    /// Every probability is validated before any run starts.  Since each step
    /// draws once per neighbor regardless of `p`, the runs share their random
    /// streams and differ only in the threshold.
    pub fn sweep_exposure(
        &self,
        trace:         &MobilityTrace,
        probabilities: &[f64],
    ) -> AnalysisResult<Vec<(f64, RunSummary)>> {
        let runs = probabilities
            .iter()
            .map(|&p| self.with_exposure_probability(p).map(|a| (p, a)))
            .collect::<AnalysisResult<Vec<_>>>()?;

        Ok(runs
            .into_iter()
            .map(|(p, analysis)| (p, analysis.run(trace, &mut NoopObserver).summary))
            .collect())
    }
}

/// Largest number of steps [`exposure_grid`] will produce.
pub const MAX_GRID_STEPS: usize = 1_000_000;

/// `0, step, 2·step, …` up to and including `max`.
///
/// Empty if `step` is not a finite positive value, `max` is negative or not
/// finite, or the grid would need more than [`MAX_GRID_STEPS`] steps.
pub fn exposure_grid(max: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && max.is_finite() && max >= 0.0) {
        return Vec::new();
    }
    // Tolerance so that 0.7 / 0.1 = 6.999… still includes 0.7.
    let steps = (max / step + 1e-9).floor();
    if steps > MAX_GRID_STEPS as f64 {
        return Vec::new();
    }
    let n = steps as usize;
    (0..=n).map(|i| i as f64 * step).collect()
}

// ── Fleet census ──────────────────────────────────────────────────────────────

/// Exposed-node totals when every vehicle acts as reference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CensusReport {
    pub fleet_size:      usize,
    /// Exposed neighbors summed over every (reference, timestamp) pair.
    pub total_exposed:   usize,
    /// `min(total_exposed, fleet_size)`.
    pub clamped_exposed: usize,
}

/// Count exposed neighbors for every vehicle at every timestamp it has.
///
/// Each timestamp is indexed once with a [`SnapshotIndex`]; references are
/// visited in slot order and draw from a single `SimRng` seeded by `seed`.
/// Vehicles absent at a timestamp are neither references nor neighbors there.
pub fn exposure_census(
    trace:       &MobilityTrace,
    radius:      f64,
    probability: f64,
    seed:        u64,
) -> AnalysisResult<CensusReport> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(VnError::InvalidParameter {
            name:     "radius",
            value:    radius,
            expected: "a finite value >= 0",
        }
        .into());
    }
    let model = ExposureModel::new(probability)?;

    let mut rng = SimRng::new(seed);
    let mut total_exposed = 0;
    for index in 0..trace.max_timeline_len() {
        let snapshot = SnapshotIndex::build(trace, index);
        let mut exposed_here = 0;
        for reference in snapshot.present() {
            if let Some(result) = snapshot.neighbors(trace, reference, radius) {
                exposed_here += model.mark(result.neighbor_ids(), &mut rng).len();
            }
        }
        debug!(index, present = snapshot.len(), exposed = exposed_here, "census timestamp");
        total_exposed += exposed_here;
    }

    let fleet_size = trace.vehicle_count();
    let report = CensusReport {
        fleet_size,
        total_exposed,
        clamped_exposed: total_exposed.min(fleet_size),
    };
    info!(fleet_size, total_exposed, "exposure census finished");
    Ok(report)
}

// ── Dataset comparison ────────────────────────────────────────────────────────

/// One independent trace, e.g. one lane configuration.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub label: String,
    pub lanes: u32,
    pub trace: MobilityTrace,
}

impl Dataset {
    pub fn new(label: impl Into<String>, lanes: u32, trace: MobilityTrace) -> Self {
        Self { label: label.into(), lanes, trace }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    pub label:       String,
    pub lanes:       u32,
    pub fleet_size:  usize,
    pub summary:     RunSummary,
    /// Number of diagnostics the run recorded.
    pub diagnostics: usize,
}

/// Run `analysis` over each dataset independently, in input order.
pub fn compare_datasets(datasets: &[Dataset], analysis: &Analysis) -> Vec<ComparisonRow> {
    datasets
        .iter()
        .map(|dataset| {
            let report = analysis.run(&dataset.trace, &mut NoopObserver);
            debug!(
                label      = %dataset.label,
                lanes      = dataset.lanes,
                efficiency = report.summary.efficiency_initial,
                "dataset compared"
            );
            ComparisonRow {
                label:       dataset.label.clone(),
                lanes:       dataset.lanes,
                fleet_size:  dataset.trace.vehicle_count(),
                summary:     report.summary,
                diagnostics: report.diagnostics.len(),
            }
        })
        .collect()
}
