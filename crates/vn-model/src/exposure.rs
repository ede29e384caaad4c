//! Stochastic exposed-node marking.
//!
//! Each in-range neighbor independently suffers interference with
//! probability `p`: one uniform draw per neighbor, exposed when the draw is
//! `< p`.  Neighbors are visited in ascending id order and a draw is taken
//! for every neighbor regardless of `p`, so two runs that differ only in `p`
//! consume the random stream identically.

use std::collections::BTreeSet;

use vn_core::{UniformSource, VehicleId, VnError, VnResult};

/// Mark each of `neighbors` exposed with probability `probability`.
///
/// `probability` is clamped to `[0, 1]` (NaN counts as 0): `0` never exposes,
/// `1` always exposes, since draws lie in `[0, 1)`.
pub fn mark_exposed<S: UniformSource + ?Sized>(
    neighbors:   &BTreeSet<VehicleId>,
    probability: f64,
    rng:         &mut S,
) -> BTreeSet<VehicleId> {
    let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
    neighbors
        .iter()
        .filter(|_| rng.next_uniform() < p)
        .cloned()
        .collect()
}

/// A validated exposure probability.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureModel {
    probability: f64,
}

impl ExposureModel {
    /// `probability` must lie in `[0, 1]`.
    pub fn new(probability: f64) -> VnResult<Self> {
        if (0.0..=1.0).contains(&probability) {
            Ok(Self { probability })
        } else {
            Err(VnError::InvalidParameter {
                name:     "exposure_probability",
                value:    probability,
                expected: "a value in [0, 1]",
            })
        }
    }

    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn mark<S: UniformSource + ?Sized>(
        &self,
        neighbors: &BTreeSet<VehicleId>,
        rng:       &mut S,
    ) -> BTreeSet<VehicleId> {
        mark_exposed(neighbors, self.probability, rng)
    }
}
