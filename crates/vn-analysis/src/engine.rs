//! The `Analysis` engine and its per-step pipeline.

use std::ops::Range;
use std::path::Path;

use tracing::{debug, info};
use vn_core::{Diagnostic, Diagnostics, StepRng};
use vn_model::{
    PopulationBase, ThroughputStrategy, adapt_range, coverage_area, estimate_density, mark_exposed,
};
use vn_spatial::{NeighborResult, query_neighbors};
use vn_trace::{MobilityTrace, load_trace_file};

use crate::{
    AnalysisConfig, AnalysisObserver, AnalysisReport, AnalysisResult, RunSummary, StepRecord,
};

/// A validated configuration, ready to run against any number of traces.
///
/// `Analysis` holds no mutable state; `run` borrows the trace immutably and
/// can be called repeatedly (or concurrently) with identical results.
///
/// Create via [`AnalysisBuilder`][crate::AnalysisBuilder] or [`Analysis::new`].
#[derive(Clone, Debug)]
pub struct Analysis {
    config: AnalysisConfig,
}

impl Analysis {
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The same analysis with a different exposure probability.
    pub fn with_exposure_probability(&self, probability: f64) -> AnalysisResult<Self> {
        Analysis::new(AnalysisConfig { exposure_probability: probability, ..self.config.clone() })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Evaluate every step from `start_index` to the end of the reference's
    /// timeline.
    ///
    /// An unknown reference yields zero steps and an `UnknownVehicle`
    /// diagnostic; a `start_index` past the end yields zero steps.
    pub fn run<O: AnalysisObserver>(&self, trace: &MobilityTrace, observer: &mut O) -> AnalysisReport {
        let reference = self.config.reference.clone();
        let mut diagnostics = Diagnostics::new();

        let indices = match trace.get(reference.as_str()) {
            Some(timeline) => self.config.start_index.min(timeline.len())..timeline.len(),
            None => {
                diagnostics.push(Diagnostic::UnknownVehicle { vehicle: reference.clone() });
                0..0
            }
        };

        info!(reference = %reference, steps = indices.len(), "analysis run started");
        observer.on_run_start(&reference, indices.len());

        let evaluated = self.evaluate_all(trace, indices);

        // Merge in index order so the report is independent of scheduling.
        let mut steps = Vec::with_capacity(evaluated.len());
        for (record, mut step_diags) in evaluated {
            diagnostics.append(&mut step_diags);
            observer.on_step(&record);
            steps.push(record);
        }

        let summary = RunSummary::from_steps(&steps);
        info!(
            reference   = %reference,
            steps       = summary.steps,
            in_range    = summary.total_in_range,
            exposed     = summary.total_exposed_initial,
            efficiency  = summary.efficiency_initial,
            diagnostics = diagnostics.len(),
            "analysis run finished"
        );
        observer.on_run_end(&summary);

        AnalysisReport { reference, steps, summary, diagnostics }
    }

    /// Load a trace file and run against it.
    ///
    /// Parse diagnostics come first in the report, followed by the run's.
    pub fn run_file<O: AnalysisObserver>(
        &self,
        path:     &Path,
        observer: &mut O,
    ) -> AnalysisResult<AnalysisReport> {
        let mut diagnostics = Diagnostics::new();
        let trace = load_trace_file(path, &mut diagnostics)?;
        let mut report = self.run(&trace, observer);
        diagnostics.append(&mut report.diagnostics);
        report.diagnostics = diagnostics;
        Ok(report)
    }

    /// Evaluate the single step at `index`.
    ///
    /// `time_slots` is the normalization base for `TimeNormalized`
    /// throughput, normally the number of steps in the run.
    pub fn evaluate_step(
        &self,
        trace:      &MobilityTrace,
        index:      usize,
        time_slots: usize,
        diags:      &mut Diagnostics,
    ) -> StepRecord {
        let cfg = &self.config;
        let reference = cfg.reference.as_str();

        let mut initial = query_neighbors(trace, reference, index, cfg.base_range, diags);
        if coverage_area(cfg.base_range) == 0.0 {
            diags.push(Diagnostic::DegenerateRadius { index, radius: cfg.base_range });
        }
        let density = estimate_density(initial.count(), cfg.base_range);
        let adjustment = adapt_range(cfg.range_policy, density, cfg.base_range);

        let mut reduced = if cfg.requery {
            // Same index as the initial query, so any soft failures have
            // already been recorded.
            let mut repeat = Diagnostics::new();
            Some(query_neighbors(trace, reference, index, adjustment.radius, &mut repeat))
        } else {
            None
        };

        // Initial set first, then reduced, from one per-index stream.
        let mut rng = StepRng::new(cfg.seed, index);
        let exposed = mark_exposed(initial.neighbor_ids(), cfg.exposure_probability, &mut rng);
        initial.set_exposed(exposed);
        if let Some(reduced) = reduced.as_mut() {
            let exposed = mark_exposed(reduced.neighbor_ids(), cfg.exposure_probability, &mut rng);
            reduced.set_exposed(exposed);
        }

        let throughput_initial = cfg.throughput.estimate(
            initial.exposed_count(),
            self.normalization_base(trace, &initial, time_slots),
        );
        let throughput_reduced = reduced.as_ref().map(|r| {
            cfg.throughput.estimate(r.exposed_count(), self.normalization_base(trace, r, time_slots))
        });

        debug!(
            index,
            in_range = initial.count(),
            density,
            radius   = adjustment.radius,
            exposed  = initial.exposed_count(),
            "step evaluated"
        );

        StepRecord {
            index,
            initial,
            density,
            adjustment,
            reduced,
            throughput_initial,
            throughput_reduced,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// `in_range` is the neighbor set whose exposed count is being normalized.
    fn normalization_base(&self, trace: &MobilityTrace, in_range: &NeighborResult, time_slots: usize) -> usize {
        match self.config.throughput {
            ThroughputStrategy::TimeNormalized { .. } => time_slots,
            ThroughputStrategy::PopulationNormalized { base: PopulationBase::InRange } => in_range.count(),
            ThroughputStrategy::PopulationNormalized { base: PopulationBase::Fleet } => trace.vehicle_count(),
        }
    }

    /// Evaluate every index, each with its own diagnostics.  Output is in
    /// ascending index order with or without the `parallel` feature.
    fn evaluate_all(&self, trace: &MobilityTrace, indices: Range<usize>) -> Vec<(StepRecord, Diagnostics)> {
        let time_slots = indices.len();
        let evaluate = |index: usize| {
            let mut diags = Diagnostics::new();
            let record = self.evaluate_step(trace, index, time_slots, &mut diags);
            (record, diags)
        };

        #[cfg(not(feature = "parallel"))]
        {
            indices.map(evaluate).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            indices.into_par_iter().map(evaluate).collect()
        }
    }
}
