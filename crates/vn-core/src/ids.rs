//! Vehicle identifiers.
//!
//! Traces name vehicles with free-form strings (`"f_0.7"`, `"veh12"`), so the
//! public key is the string-backed [`VehicleId`].  Inside a
//! `MobilityTrace` each vehicle also owns a dense slot, [`VehicleIdx`], used
//! to index the timeline `Vec` directly.

use std::borrow::Borrow;
use std::fmt;

/// A vehicle's identifier as it appears in the trace (`id="..."`).
///
/// `Ord` is lexical, which gives neighbor sets a stable iteration order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VehicleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for VehicleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dense slot of a vehicle inside one `MobilityTrace`, assigned in order of
/// first appearance.  Only meaningful for the trace that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleIdx(pub u32);

impl VehicleIdx {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VehicleIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleIdx({})", self.0)
    }
}
