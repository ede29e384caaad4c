//! Structured soft-failure channel.
//!
//! Nothing in the analysis core aborts on a bad record or an out-of-range
//! query.  Instead the condition is recorded as a [`Diagnostic`] in a
//! caller-owned [`Diagnostics`] list and mirrored to `tracing` at `warn`
//! level.  Callers inspect the list after the operation returns.

use thiserror::Error;
use tracing::warn;

use crate::VehicleId;

/// Why a vehicle record line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordFault {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("attribute `{attribute}` is not a number: {value:?}")]
    InvalidNumber { attribute: &'static str, value: String },

    #[error("empty vehicle id")]
    EmptyId,
}

/// One recovered soft failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("vehicle {vehicle} not found in trace")]
    UnknownVehicle { vehicle: VehicleId },

    #[error("timestamp {index} is out of range for reference vehicle {vehicle} (timeline length {len})")]
    ReferenceOutOfRange { vehicle: VehicleId, index: usize, len: usize },

    #[error("timestamp {index} is out of range for vehicle {vehicle} (timeline length {len}); skipped")]
    CandidateOutOfRange { vehicle: VehicleId, index: usize, len: usize },

    #[error("line {line}: malformed vehicle record: {fault}")]
    MalformedRecord { line: usize, fault: RecordFault },

    #[error("line {line}: vehicle record before any timestep marker")]
    RecordBeforeTimestep { line: usize },

    #[error("line {line}: timestep marker without a usable time attribute")]
    MalformedTimestep { line: usize },

    #[error("timestamp {index}: radius {radius} covers no area; density taken as 0")]
    DegenerateRadius { index: usize, radius: f64 },
}

/// Field-less discriminant of [`Diagnostic`], for counting and filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    UnknownVehicle,
    ReferenceOutOfRange,
    CandidateOutOfRange,
    MalformedRecord,
    RecordBeforeTimestep,
    MalformedTimestep,
    DegenerateRadius,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnknownVehicle { .. }       => DiagnosticKind::UnknownVehicle,
            Diagnostic::ReferenceOutOfRange { .. }  => DiagnosticKind::ReferenceOutOfRange,
            Diagnostic::CandidateOutOfRange { .. }  => DiagnosticKind::CandidateOutOfRange,
            Diagnostic::MalformedRecord { .. }      => DiagnosticKind::MalformedRecord,
            Diagnostic::RecordBeforeTimestep { .. } => DiagnosticKind::RecordBeforeTimestep,
            Diagnostic::MalformedTimestep { .. }    => DiagnosticKind::MalformedTimestep,
            Diagnostic::DegenerateRadius { .. }     => DiagnosticKind::DegenerateRadius,
        }
    }
}

/// Append-only list of diagnostics accumulated by one or more operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    events: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `diagnostic` and mirror it to the `tracing` subscriber.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!(kind = ?diagnostic.kind(), "{diagnostic}");
        self.events.push(diagnostic);
    }

    /// Move all events from `other` into `self` without re-logging them.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.events.append(&mut other.events);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.events.iter()
    }

    /// Number of recorded events of `kind`.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.events.iter().filter(|d| d.kind() == kind).count()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
