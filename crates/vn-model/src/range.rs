//! Density-adaptive transmission range.

use vn_core::{VnError, VnResult};

/// How the transmission range reacts to local density.
///
/// | Policy            | Adjusted range                          | Clamp          |
/// |-------------------|-----------------------------------------|----------------|
/// | `LinearShrink`    | `base · (1 − density)`                  | below at 0     |
/// | `NormalizedScale` | `base · (density / max_density)`        | below at 0 only|
///
/// `NormalizedScale` is deliberately unbounded above: a density beyond
/// `max_density` *grows* the range past `base`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangePolicy {
    #[default]
    LinearShrink,
    NormalizedScale { max_density: f64 },
}

impl RangePolicy {
    /// Reject a `NormalizedScale` whose `max_density` is not finite and > 0.
    pub fn validate(&self) -> VnResult<()> {
        match *self {
            RangePolicy::LinearShrink => Ok(()),
            RangePolicy::NormalizedScale { max_density } => {
                if max_density.is_finite() && max_density > 0.0 {
                    Ok(())
                } else {
                    Err(VnError::InvalidParameter {
                        name:     "max_density",
                        value:    max_density,
                        expected: "a finite value > 0",
                    })
                }
            }
        }
    }

    /// Adjusted range for `density`, never negative.
    ///
    /// An unvalidated `NormalizedScale` with `max_density <= 0` yields 0.
    pub fn adjust(&self, density: f64, base_range: f64) -> f64 {
        let raw = match *self {
            RangePolicy::LinearShrink => base_range * (1.0 - density),
            RangePolicy::NormalizedScale { max_density } => {
                if max_density > 0.0 {
                    base_range * (density / max_density)
                } else {
                    0.0
                }
            }
        };
        // `f64::max` also maps NaN to 0.
        raw.max(0.0)
    }
}

/// A density together with the range derived from it.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeAdjustment {
    pub density: f64,
    /// Always `>= 0`.
    pub radius:  f64,
}

/// Apply `policy` to `density` around `base_range`.
pub fn adapt_range(policy: RangePolicy, density: f64, base_range: f64) -> RangeAdjustment {
    RangeAdjustment { density, radius: policy.adjust(density, base_range) }
}
