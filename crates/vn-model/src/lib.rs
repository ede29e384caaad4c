//! `vn-model` — the numeric models applied to each neighbor query.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`density`]    | `estimate_density`, `coverage_area`                          |
//! | [`range`]      | `RangePolicy`, `RangeAdjustment`, `adapt_range`              |
//! | [`exposure`]   | `ExposureModel`, `mark_exposed`                              |
//! | [`throughput`] | `ThroughputStrategy`, `PopulationBase`, `estimate_throughput`|
//!
//! Every function here is pure apart from the injected
//! [`UniformSource`][vn_core::UniformSource] used by the exposure model.
//! Degenerate inputs (zero radius, zero population) produce defined zero
//! values rather than errors; only constructors that take configuration
//! parameters return `VnResult`.

pub mod density;
pub mod exposure;
pub mod range;
pub mod throughput;

#[cfg(test)]
mod tests;

pub use density::{coverage_area, estimate_density};
pub use exposure::{ExposureModel, mark_exposed};
pub use range::{RangeAdjustment, RangePolicy, adapt_range};
pub use throughput::{PopulationBase, ThroughputStrategy, aggregate_efficiency, estimate_throughput};
