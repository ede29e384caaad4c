//! `vn-analysis` — the per-timestamp analysis pipeline.
//!
//! # Pipeline
//!
//! ```text
//! for index in config.start_index..len(reference timeline):
//!   ① Query     — neighbors of the reference within base_range.
//!   ② Density   — count / (π · base_range²).
//!   ③ Range     — RangePolicy maps density to an adjusted radius.
//!   ④ Re-query  — neighbors within the adjusted radius (if enabled).
//!   ⑤ Exposure  — mark exposed neighbors, initial set then reduced set,
//!                 drawing from a StepRng seeded by (seed, index).
//!   ⑥ Throughput — ThroughputStrategy over the exposed counts.
//! ```
//!
//! Every step reads only the immutable trace and its own RNG, so steps are
//! independent.  With the `parallel` feature they are evaluated on Rayon's
//! pool; observer callbacks and diagnostics are still delivered in ascending
//! index order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates timestamps on Rayon's thread pool.           |
//! | `serde`    | Serialize/Deserialize for config, records, summaries.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vn_analysis::{AnalysisBuilder, SeriesCollector};
//!
//! let analysis = AnalysisBuilder::new("f_0.7")
//!     .base_range(2.5)
//!     .exposure_probability(0.2)
//!     .build()?;
//! let mut series = SeriesCollector::default();
//! let report = analysis.run(&trace, &mut series);
//! println!("efficiency {:.3}", report.summary.efficiency_initial);
//! ```

pub mod builder;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod report;


pub use builder::AnalysisBuilder;
pub use compare::{
    CensusReport, ComparisonRow, Dataset, MAX_GRID_STEPS, compare_datasets, exposure_census,
    exposure_grid,
};
pub use config::AnalysisConfig;
pub use engine::Analysis;
pub use error::{AnalysisError, AnalysisResult};
pub use observer::{AnalysisObserver, NoopObserver, SeriesCollector};
pub use report::{AnalysisReport, RunSummary, StepRecord};
