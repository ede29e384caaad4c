//! `vn-spatial` — who is near whom, and when.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`proximity`] | `query_neighbors`, `NeighborResult`                       |
//! | [`index`]     | `SnapshotIndex` — R-tree of one timestamp's positions     |
//!
//! `query_neighbors` is the reference-vehicle scan: one reference, every
//! other vehicle compared at the same timestamp index, soft failures
//! recorded as diagnostics.  `SnapshotIndex` answers the same question for
//! *every* vehicle at a timestamp and is used for fleet-wide sweeps, where a
//! linear scan per reference would be quadratic.

pub mod index;
pub mod proximity;


pub use index::SnapshotIndex;
pub use proximity::{NeighborResult, query_neighbors};
