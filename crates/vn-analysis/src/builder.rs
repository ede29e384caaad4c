//! Fluent builder for constructing an [`Analysis`].

use vn_core::VehicleId;
use vn_model::{RangePolicy, ThroughputStrategy};

use crate::{Analysis, AnalysisConfig, AnalysisResult};

/// Fluent builder for [`Analysis`].
///
/// Only the reference vehicle is required; everything else starts from
/// [`AnalysisConfig::default`].
///
/// | Method                       | Default                              |
/// |------------------------------|--------------------------------------|
/// | `.base_range(r)`             | 2.5                                  |
/// | `.exposure_probability(p)`   | 0.2                                  |
/// | `.range_policy(p)`           | `RangePolicy::LinearShrink`          |
/// | `.throughput(s)`             | `TimeNormalized { capacity: 20.0 }`  |
/// | `.start_index(i)`            | 0                                    |
/// | `.requery(b)`                | `true`                               |
/// | `.seed(s)`                   | 42                                   |
///
/// # Example
///
/// ```rust,ignore
/// let analysis = AnalysisBuilder::new("f_0.7")
///     .range_policy(RangePolicy::NormalizedScale { max_density: 0.5 })
///     .start_index(10)
///     .build()?;
/// ```
pub struct AnalysisBuilder {
    config: AnalysisConfig,
}

impl AnalysisBuilder {
    pub fn new(reference: impl Into<VehicleId>) -> Self {
        Self {
            config: AnalysisConfig { reference: reference.into(), ..AnalysisConfig::default() },
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn base_range(mut self, range: f64) -> Self {
        self.config.base_range = range;
        self
    }

    pub fn exposure_probability(mut self, probability: f64) -> Self {
        self.config.exposure_probability = probability;
        self
    }

    pub fn range_policy(mut self, policy: RangePolicy) -> Self {
        self.config.range_policy = policy;
        self
    }

    pub fn throughput(mut self, strategy: ThroughputStrategy) -> Self {
        self.config.throughput = strategy;
        self
    }

    pub fn start_index(mut self, index: usize) -> Self {
        self.config.start_index = index;
        self
    }

    pub fn requery(mut self, enabled: bool) -> Self {
        self.config.requery = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Analysis`].
    pub fn build(self) -> AnalysisResult<Analysis> {
        Analysis::new(self.config)
    }
}
