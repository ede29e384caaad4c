//! Recorded trace time.
//!
//! Queries never look samples up by this value; they use the sample's
//! position in its timeline ("timestamp index").  `Timestep` is kept only so
//! the original trace time remains available to reporting code.

use std::fmt;

/// Integer trace time taken from a `<timestep time="T">` marker.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep(pub i64);

impl Timestep {
    pub const ZERO: Timestep = Timestep(0);

    /// Truncate a real-valued trace time toward zero.
    ///
    /// Returns `None` for NaN, infinities, and values outside `i64`.
    pub fn from_seconds(secs: f64) -> Option<Timestep> {
        if !secs.is_finite() {
            return None;
        }
        let t = secs.trunc();
        if t < i64::MIN as f64 || t >= i64::MAX as f64 {
            return None;
        }
        Some(Timestep(t as i64))
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
