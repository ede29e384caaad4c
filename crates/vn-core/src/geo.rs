//! Planar coordinates and distance.
//!
//! Trace coordinates are simulator-local metres (`x`, `y`), not geographic,
//! so distances are plain 2-D Euclidean.  `f64` is used throughout because
//! radii are compared with an inclusive boundary and must match exactly.

/// A point in the trace's planar coordinate system.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, `sqrt((x2-x1)² + (y2-y1)²)`.
    ///
    /// Symmetric bit-for-bit: swapping the operands only negates the deltas,
    /// which squaring discards.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
