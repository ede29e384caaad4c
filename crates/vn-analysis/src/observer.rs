//! Run observer trait for progress reporting and series collection.

use vn_core::VehicleId;

use crate::{RunSummary, StepRecord};

/// Callbacks invoked by [`Analysis::run`][crate::Analysis::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_step` is called in ascending index
/// order even when steps were evaluated in parallel.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl AnalysisObserver for Progress {
///     fn on_step(&mut self, step: &StepRecord) {
///         println!("t={} in range {}", step.index, step.initial.count());
///     }
/// }
/// ```
pub trait AnalysisObserver {
    /// Called once before the first step.  `steps` is the number of steps
    /// that will follow.
    fn on_run_start(&mut self, _reference: &VehicleId, _steps: usize) {}

    fn on_step(&mut self, _step: &StepRecord) {}

    /// Called once after the last step.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// An [`AnalysisObserver`] that does nothing.
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}

/// Collects the per-step values as parallel series, ready for plotting.
///
/// All series have one entry per step.  Steps without a reduced result
/// contribute `0` to `reduced_counts` and `exposed_reduced`, and `0.0` to
/// `throughput_reduced`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesCollector {
    pub timestamps:         Vec<usize>,
    pub counts:             Vec<usize>,
    pub densities:          Vec<f64>,
    pub ranges:             Vec<f64>,
    pub reduced_counts:     Vec<usize>,
    pub exposed_initial:    Vec<usize>,
    pub exposed_reduced:    Vec<usize>,
    pub throughput_initial: Vec<f64>,
    pub throughput_reduced: Vec<f64>,
    pub summary:            Option<RunSummary>,
}

impl SeriesCollector {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl AnalysisObserver for SeriesCollector {
    fn on_run_start(&mut self, _reference: &VehicleId, _steps: usize) {
        *self = SeriesCollector::default();
    }

    fn on_step(&mut self, step: &StepRecord) {
        self.timestamps.push(step.index);
        self.counts.push(step.initial.count());
        self.densities.push(step.density);
        self.ranges.push(step.adjustment.radius);
        self.exposed_initial.push(step.initial.exposed_count());
        self.throughput_initial.push(step.throughput_initial);
        self.reduced_counts.push(step.reduced.as_ref().map_or(0, |r| r.count()));
        self.exposed_reduced.push(step.reduced.as_ref().map_or(0, |r| r.exposed_count()));
        self.throughput_reduced.push(step.throughput_reduced.unwrap_or(0.0));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}
