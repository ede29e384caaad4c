//! Framework error type.
//!
//! Hard errors only arise at the edges (invalid parameters).  Soft
//! failures inside the analysis core are [`Diagnostic`][crate::Diagnostic]s,
//! never `Err` values.

use thiserror::Error;

/// The top-level error type for `vn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VnError {
    #[error("invalid {name} = {value}: {expected}")]
    InvalidParameter {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },
}

/// Shorthand result type for all `vn-*` crates.
pub type VnResult<T> = Result<T, VnError>;
