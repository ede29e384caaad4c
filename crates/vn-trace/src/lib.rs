//! `vn-trace` — per-vehicle position timelines and the trace parser.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`trace`]   | `PositionSample`, `VehicleTimeline`, `MobilityTrace`           |
//! | [`parser`]  | `TraceParser`, `parse_str`, `parse_reader`, `load_trace_file`  |
//! | [`error`]   | `TraceError`, `TraceResult<T>`                                 |
//!
//! # Time axis
//!
//! A sample's position in its vehicle's timeline *is* its timestamp for all
//! queries: "timestamp 5" means "the sixth sample recorded for this vehicle".
//! The `<timestep time=..>` value is stored on each sample but never used for
//! lookup.  Vehicles that enter the trace late are therefore indexed from
//! zero, not from the timestep at which they appeared.

pub mod error;
pub mod parser;
pub mod trace;


pub use error::{TraceError, TraceResult};
pub use parser::{TraceParser, load_trace_file, parse_reader, parse_str};
pub use trace::{MobilityTrace, PositionSample, VehicleTimeline};
