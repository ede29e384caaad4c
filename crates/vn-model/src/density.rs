//! Neighbor density under a circular-coverage assumption.
//!
//! Vehicles actually move along lanes, but coverage is modelled as the full
//! disc of the transmission range:
//!
//! ```text
//! density = count / (π · radius²)
//! ```

use std::f64::consts::PI;

/// Area of the disc of `radius`.  Zero for non-positive or non-finite radii.
#[inline]
pub fn coverage_area(radius: f64) -> f64 {
    if radius.is_finite() && radius > 0.0 {
        PI * radius * radius
    } else {
        0.0
    }
}

/// Neighbors per unit area within `radius`.
///
/// A radius with no coverage (zero, negative, NaN, infinite) yields `0.0`
/// rather than an infinite or undefined density.
#[inline]
pub fn estimate_density(count: usize, radius: f64) -> f64 {
    let area = coverage_area(radius);
    if area > 0.0 { count as f64 / area } else { 0.0 }
}
