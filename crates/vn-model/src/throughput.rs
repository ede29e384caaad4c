//! Throughput figures from exposed/total counts.
//!
//! Two normalisations are in use:
//!
//! | Strategy               | Formula                                  | Zero base |
//! |------------------------|------------------------------------------|-----------|
//! | `TimeNormalized`       | `(capacity − exposed) / time_slots`      | 0         |
//! | `PopulationNormalized` | `(population − exposed) / population`    | 0         |
//!
//! `TimeNormalized` goes negative when `exposed > capacity`.  That is left
//! as is: the capacity constant is a modelling input, and clamping here
//! would hide a badly chosen one.

use vn_core::{VnError, VnResult};

/// Which population a `PopulationNormalized` figure is divided by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopulationBase {
    /// The reference's neighbor count at the initial range.
    #[default]
    InRange,
    /// Every vehicle in the trace.
    Fleet,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThroughputStrategy {
    /// `capacity` is a fixed reference count, e.g. the population size.
    TimeNormalized { capacity: f64 },
    PopulationNormalized { base: PopulationBase },
}

impl Default for ThroughputStrategy {
    fn default() -> Self {
        ThroughputStrategy::TimeNormalized { capacity: 20.0 }
    }
}

impl ThroughputStrategy {
    pub fn validate(&self) -> VnResult<()> {
        match *self {
            ThroughputStrategy::TimeNormalized { capacity } if !capacity.is_finite() => {
                Err(VnError::InvalidParameter {
                    name:     "capacity",
                    value:    capacity,
                    expected: "a finite value",
                })
            }
            _ => Ok(()),
        }
    }

    /// Throughput for `exposed` exposed nodes.
    ///
    /// `normalization_base` is the number of time slots for
    /// `TimeNormalized` and the population for `PopulationNormalized`.
    pub fn estimate(&self, exposed: usize, normalization_base: usize) -> f64 {
        if normalization_base == 0 {
            return 0.0;
        }
        let base = normalization_base as f64;
        match *self {
            ThroughputStrategy::TimeNormalized { capacity } => (capacity - exposed as f64) / base,
            ThroughputStrategy::PopulationNormalized { .. } => (base - exposed as f64) / base,
        }
    }
}

/// Free-function form of [`ThroughputStrategy::estimate`].
#[inline]
pub fn estimate_throughput(strategy: ThroughputStrategy, exposed: usize, normalization_base: usize) -> f64 {
    strategy.estimate(exposed, normalization_base)
}

/// Aggregate efficiency over a run, `(Σcount − Σexposed) / Σcount`, or 0 when
/// nothing was in range.
#[inline]
pub fn aggregate_efficiency(total_count: usize, total_exposed: usize) -> f64 {
    ThroughputStrategy::PopulationNormalized { base: PopulationBase::InRange }
        .estimate(total_exposed, total_count)
}
