//! Line-oriented trace parser.
//!
//! # Accepted format
//!
//! Floating-car-data style output, one tag per line:
//!
//! ```text
//! <timestep time="0.00">
//!     <vehicle id="f_0.0" x="12.40" y="3.20" angle="90.00" speed="13.89"/>
//!     <vehicle id="f_0.1" x="4.10" y="3.20" angle="90.00" speed="13.89"/>
//! </timestep>
//! <timestep time="1.00">
//!     ...
//! ```
//!
//! This is **not** an XML parser.  Each line is classified on its own:
//!
//! | Trimmed line starts with | Effect                                                   |
//! |--------------------------|----------------------------------------------------------|
//! | `<timestep`              | current timestep = `trunc(time)`                         |
//! | `<vehicle`               | append `(current timestep, x, y)` to vehicle `id`        |
//! | anything else            | ignored                                                  |
//!
//! Attributes are found by locating `name="` at an attribute boundary
//! (preceded by whitespace) and reading up to the next `"`, so attribute
//! order does not matter.
//!
//! # Recovery
//!
//! Bad lines never abort ingestion.  Each is skipped with a diagnostic:
//!
//! | Condition                                  | Diagnostic              |
//! |--------------------------------------------|-------------------------|
//! | `id`, `x` or `y` absent, empty id, or a    | `MalformedRecord`       |
//! | non-finite / unparseable coordinate        |                         |
//! | vehicle record before any `<timestep>`     | `RecordBeforeTimestep`  |
//! | `<timestep>` without a usable `time`       | `MalformedTimestep`     |
//!
//! A malformed `<timestep>` leaves the previous timestep in effect.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use vn_core::{Diagnostic, Diagnostics, RecordFault, Timestep};

use crate::{MobilityTrace, PositionSample, TraceResult};

// ── Line classification ───────────────────────────────────────────────────────

enum LineKind {
    Timestep,
    Vehicle,
    Other,
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if opens_tag(trimmed, "timestep") {
        LineKind::Timestep
    } else if opens_tag(trimmed, "vehicle") {
        LineKind::Vehicle
    } else {
        LineKind::Other
    }
}

/// `true` if `s` starts with `<name` followed by whitespace, `>`, `/`, or the
/// end of the line.  Keeps `<vehicles>` from matching `<vehicle`.
fn opens_tag(s: &str, name: &str) -> bool {
    s.strip_prefix('<')
        .and_then(|rest| rest.strip_prefix(name))
        .is_some_and(|rest| {
            rest.chars()
                .next()
                .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/')
        })
}

/// Value of attribute `name` in `line`, or `None` if absent or unterminated.
fn attribute<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("{name}=\"");
    let mut from = 0;
    while let Some(found) = line[from..].find(&pattern) {
        let start = from + found;
        let at_boundary = line[..start]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        if at_boundary {
            let rest = &line[start + pattern.len()..];
            return rest.find('"').map(|end| &rest[..end]);
        }
        // Attribute names are ASCII, so `start + 1` is a char boundary.
        from = start + 1;
    }
    None
}

fn coordinate(line: &str, name: &'static str) -> Result<f64, RecordFault> {
    let raw = attribute(line, name).ok_or(RecordFault::MissingAttribute(name))?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RecordFault::InvalidNumber { attribute: name, value: raw.to_owned() }),
    }
}

fn vehicle_record(line: &str) -> Result<(&str, f64, f64), RecordFault> {
    let id = attribute(line, "id").ok_or(RecordFault::MissingAttribute("id"))?;
    if id.is_empty() {
        return Err(RecordFault::EmptyId);
    }
    let x = coordinate(line, "x")?;
    let y = coordinate(line, "y")?;
    Ok((id, x, y))
}

// ── TraceParser ───────────────────────────────────────────────────────────────

/// Incremental parser.  Feed lines in order, then [`finish`][Self::finish].
///
/// ```rust,ignore
/// let mut diags = Diagnostics::new();
/// let trace = TraceParser::parse(text.lines(), &mut diags);
/// ```
#[derive(Default)]
pub struct TraceParser {
    /// `None` until the first well-formed `<timestep>` marker.
    current: Option<Timestep>,
    /// 1-based number of the last line fed.
    line:    usize,
    trace:   MobilityTrace,
}

impl TraceParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete sequence of lines.
    pub fn parse<I, S>(lines: I, diags: &mut Diagnostics) -> MobilityTrace
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        for line in lines {
            parser.feed_line(line.as_ref(), diags);
        }
        parser.finish()
    }

    /// Process one line.
    pub fn feed_line(&mut self, line: &str, diags: &mut Diagnostics) {
        self.line += 1;
        match classify(line) {
            LineKind::Timestep => {
                let time = attribute(line, "time")
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
                    .and_then(Timestep::from_seconds);
                match time {
                    Some(t) => self.current = Some(t),
                    None => diags.push(Diagnostic::MalformedTimestep { line: self.line }),
                }
            }
            LineKind::Vehicle => match vehicle_record(line) {
                Err(fault) => diags.push(Diagnostic::MalformedRecord { line: self.line, fault }),
                Ok((id, x, y)) => match self.current {
                    None => diags.push(Diagnostic::RecordBeforeTimestep { line: self.line }),
                    Some(t) => {
                        self.trace.record(id, PositionSample::new(t, x, y));
                    }
                },
            },
            LineKind::Other => {}
        }
    }

    /// Consume the parser and return the completed trace.
    pub fn finish(self) -> MobilityTrace {
        debug!(
            lines    = self.line,
            vehicles = self.trace.vehicle_count(),
            samples  = self.trace.sample_count(),
            "trace parsed"
        );
        self.trace
    }
}

// ── Convenience entry points ──────────────────────────────────────────────────

/// Parse an in-memory trace.
pub fn parse_str(text: &str, diags: &mut Diagnostics) -> MobilityTrace {
    TraceParser::parse(text.lines(), diags)
}

/// Parse from any buffered reader.
///
/// Invalid UTF-8 is replaced rather than rejected, so a corrupt byte only
/// spoils the line it sits on.  Only genuine I/O failures are returned as
/// errors.
pub fn parse_reader<R: BufRead>(reader: R, diags: &mut Diagnostics) -> TraceResult<MobilityTrace> {
    let mut parser = TraceParser::new();
    for chunk in reader.split(b'\n') {
        let bytes = chunk?;
        parser.feed_line(&String::from_utf8_lossy(&bytes), diags);
    }
    Ok(parser.finish())
}

/// Open and parse the trace file at `path`.
pub fn load_trace_file(path: &Path, diags: &mut Diagnostics) -> TraceResult<MobilityTrace> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file), diags)
}
