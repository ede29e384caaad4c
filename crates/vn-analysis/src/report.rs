//! Per-step records and run-level aggregates.

use vn_core::{Diagnostics, VehicleId};
use vn_model::{RangeAdjustment, aggregate_efficiency};
use vn_spatial::NeighborResult;

/// Everything computed for one timestamp index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    pub index: usize,

    /// Neighbors within the base range, with their exposed subset.
    pub initial: NeighborResult,

    /// Density of `initial` over the base-range disc.
    pub density: f64,

    pub adjustment: RangeAdjustment,

    /// Neighbors within the adjusted radius.  `None` when re-querying is off.
    pub reduced: Option<NeighborResult>,

    pub throughput_initial: f64,

    pub throughput_reduced: Option<f64>,
}

/// Totals over every step of a run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub steps: usize,

    /// Σ neighbor count at the base range.
    pub total_in_range: usize,

    pub total_exposed_initial: usize,

    /// Σ neighbor count at the adjusted radius.  Zero when re-querying is off.
    pub total_in_range_reduced: usize,

    /// Zero when re-querying is off.
    pub total_exposed_reduced: usize,

    pub throughput_initial_sum: f64,

    pub throughput_reduced_sum: f64,

    /// `(Σcount − Σexposed_initial) / Σcount`, 0 when nothing was in range.
    pub efficiency_initial: f64,

    /// `(Σcount_reduced − Σexposed_reduced) / Σcount_reduced`.
    pub efficiency_reduced: f64,
}

impl RunSummary {
    pub fn from_steps(steps: &[StepRecord]) -> Self {
        let mut summary = RunSummary { steps: steps.len(), ..RunSummary::default() };
        for step in steps {
            summary.total_in_range += step.initial.count();
            summary.total_exposed_initial += step.initial.exposed_count();
            summary.throughput_initial_sum += step.throughput_initial;
            if let Some(reduced) = &step.reduced {
                summary.total_in_range_reduced += reduced.count();
                summary.total_exposed_reduced += reduced.exposed_count();
            }
            if let Some(t) = step.throughput_reduced {
                summary.throughput_reduced_sum += t;
            }
        }
        summary.efficiency_initial =
            aggregate_efficiency(summary.total_in_range, summary.total_exposed_initial);
        summary.efficiency_reduced =
            aggregate_efficiency(summary.total_in_range_reduced, summary.total_exposed_reduced);
        summary
    }
}

/// Result of [`Analysis::run`][crate::Analysis::run].
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub reference:   VehicleId,
    /// Ascending by `index`.
    pub steps:       Vec<StepRecord>,
    pub summary:     RunSummary,
    pub diagnostics: Diagnostics,
}

impl AnalysisReport {
    pub fn step(&self, index: usize) -> Option<&StepRecord> {
        self.steps.iter().find(|s| s.index == index)
    }
}
