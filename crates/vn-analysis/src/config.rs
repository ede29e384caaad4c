//! Run configuration.

use vn_core::{VehicleId, VnError, VnResult};
use vn_model::{ExposureModel, RangePolicy, ThroughputStrategy};

/// Everything that parameterises one analysis run.
///
/// The defaults reproduce the single-lane study: reference `f_0.7`, a 2.5 m
/// base range, 20 % exposure, linear shrink, and throughput normalised
/// against a capacity of 20 nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Vehicle whose neighborhood is analysed.
    pub reference: VehicleId,

    /// Transmission range before adaptation.  Finite and `>= 0`.
    pub base_range: f64,

    /// Per-neighbor exposure probability in `[0, 1]`.
    pub exposure_probability: f64,

    pub range_policy: RangePolicy,

    pub throughput: ThroughputStrategy,

    /// First timestamp index evaluated.  Indices before it are skipped
    /// entirely (no query, no RNG draws).
    pub start_index: usize,

    /// Query again at the adjusted radius.  When `false`, steps carry no
    /// reduced result.
    pub requery: bool,

    /// Master seed.  The same seed always produces identical exposure draws.
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference:            VehicleId::from("f_0.7"),
            base_range:           2.5,
            exposure_probability: 0.2,
            range_policy:         RangePolicy::LinearShrink,
            throughput:           ThroughputStrategy::TimeNormalized { capacity: 20.0 },
            start_index:          0,
            requery:              true,
            seed:                 42,
        }
    }
}

impl AnalysisConfig {
    /// Reject parameters no run could use meaningfully.
    ///
    /// An unknown reference vehicle is not a configuration error: it is only
    /// detectable against a trace and surfaces as a diagnostic.
    pub fn validate(&self) -> VnResult<()> {
        if !self.base_range.is_finite() || self.base_range < 0.0 {
            return Err(VnError::InvalidParameter {
                name:     "base_range",
                value:    self.base_range,
                expected: "a finite value >= 0",
            });
        }
        ExposureModel::new(self.exposure_probability)?;
        self.range_policy.validate()?;
        self.throughput.validate()
    }
}
