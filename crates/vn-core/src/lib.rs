//! `vn-core` — foundational types for the `rust_vanet` analysis engine.
//!
//! This crate is a dependency of every other `vn-*` crate.  It has no `vn-*`
//! dependencies and only `rand`, `thiserror` and `tracing` externally (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                             |
//! |-------------------|------------------------------------------------------|
//! | [`ids`]           | `VehicleId` (trace string id), `VehicleIdx` (slot)    |
//! | [`geo`]           | `Position`, planar Euclidean distance                 |
//! | [`time`]          | `Timestep` (recorded trace time)                     |
//! | [`rng`]           | `UniformSource`, `SimRng`, `StepRng`                 |
//! | [`diagnostics`]   | `Diagnostic`, `DiagnosticKind`, `Diagnostics`        |
//! | [`error`]         | `VnError`, `VnResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the plain data types.    |

pub mod diagnostics;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, RecordFault};
pub use error::{VnError, VnResult};
pub use geo::Position;
pub use ids::{VehicleId, VehicleIdx};
pub use rng::{SimRng, StepRng, UniformSource};
pub use time::Timestep;
