//! Structural validation of game logs.
//!
//! A log is well formed when, at end of stream, no game and no round is left
//! open: every `start_game` has a later `end_game` and every `start_kyoku` a
//! later `end_kyoku`. Round-ending events missing `deltas` are reported as
//! warnings but never change the verdict.

use crate::errors::LogError;
use crate::event::{parse_event, EventJson, EventKind, TypedEvent};
use crate::reader::LogReader;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Advisory diagnostic raised during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// A `hora` or `ryukyoku` without a `deltas` field.
    MissingDeltas {
        /// 1-based line number, when known.
        line: Option<u64>,
        /// `hora` or `ryukyoku`.
        event_type: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDeltas {
                line: Some(line),
                event_type,
            } => write!(f, "line {}: {} event has no deltas", line, event_type),
            Self::MissingDeltas {
                line: None,
                event_type,
            } => write!(f, "{} event has no deltas", event_type),
        }
    }
}

/// Outcome of validating one log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` when no game or round was left open.
    pub valid: bool,
    /// A game was started and never ended.
    pub game_open: bool,
    /// A round was started and never ended.
    pub kyoku_open: bool,
    /// Number of events observed.
    pub events: u64,
    /// Advisory diagnostics; these do not affect `valid`.
    pub warnings: Vec<ValidationWarning>,
}

/// Incremental game/round bookkeeping over a stream of events.
///
/// # Example
///
/// ```rust
/// use mjai_log::{TypedEvent, Validator};
///
/// let mut validator = Validator::new();
/// validator.observe(&TypedEvent::StartGame, None);
/// assert!(!validator.finish().valid);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    game_started: bool,
    kyoku_started: bool,
    events: u64,
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    /// Creates a validator with no game or round open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event.
    ///
    /// `line` is only used to locate warnings.
    pub fn observe(&mut self, event: &TypedEvent, line: Option<u64>) {
        self.events += 1;
        match event {
            TypedEvent::StartGame => self.game_started = true,
            TypedEvent::StartKyoku => self.kyoku_started = true,
            TypedEvent::EndKyoku => self.kyoku_started = false,
            TypedEvent::EndGame => self.game_started = false,
            TypedEvent::Hora(terminal) | TypedEvent::Ryukyoku(terminal) => {
                if !terminal.has_deltas() {
                    let kind = event.kind();
                    tracing::warn!(event_type = %kind, line = ?line, "terminal event has no deltas");
                    self.warnings.push(ValidationWarning::MissingDeltas {
                        line,
                        event_type: kind.to_string(),
                    });
                }
            }
            TypedEvent::Unknown(_) => {}
        }
    }

    /// Whether a game is currently open.
    pub fn game_open(&self) -> bool {
        self.game_started
    }

    /// Whether a round is currently open.
    pub fn kyoku_open(&self) -> bool {
        self.kyoku_started
    }

    /// Warnings collected so far.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Ends the stream and produces the verdict.
    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            valid: !(self.game_started || self.kyoku_started),
            game_open: self.game_started,
            kyoku_open: self.kyoku_started,
            events: self.events,
            warnings: self.warnings,
        }
    }
}

/// Validates an in-memory sequence of decoded records.
///
/// # Errors
///
/// Returns [`LogError::Event`] for a record that is not an object or whose
/// settlement fields are malformed. Line numbers count records from 1.
pub fn validate_events<'a, I>(events: I) -> Result<ValidationReport, LogError>
where
    I: IntoIterator<Item = &'a EventJson>,
{
    let mut validator = Validator::new();
    for (index, json) in events.into_iter().enumerate() {
        let line = index as u64 + 1;
        let event = parse_event(json).map_err(|source| LogError::Event { line, source })?;
        validator.observe(&event, Some(line));
    }
    Ok(validator.finish())
}

/// Validates every event a reader yields.
///
/// The first decode failure aborts validation; no partial report is returned.
pub fn validate_reader(mut reader: LogReader) -> Result<ValidationReport, LogError> {
    let mut validator = Validator::new();
    while let Some(json) = reader.read_event()? {
        let line = reader.line();
        let event = parse_event(&json).map_err(|source| LogError::Event { line, source })?;
        validator.observe(&event, Some(line));
    }
    Ok(validator.finish())
}

/// Validates a compressed log file.
pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport, LogError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "validating log");
    validate_reader(LogReader::open(path)?)
}

/// Validates a compressed log file, returning only the verdict.
pub fn validate_mjai_file<P: AsRef<Path>>(path: P) -> Result<bool, LogError> {
    Ok(validate_file(path)?.valid)
}

impl ValidationReport {
    /// Describes why the log is invalid, if it is.
    pub fn reason(&self) -> Option<String> {
        match (self.game_open, self.kyoku_open) {
            (false, false) => None,
            (true, false) => Some(format!("{} without {}", EventKind::StartGame, EventKind::EndGame)),
            (false, true) => Some(format!("{} without {}", EventKind::StartKyoku, EventKind::EndKyoku)),
            (true, true) => Some(format!(
                "{} and {} left open",
                EventKind::StartGame,
                EventKind::StartKyoku
            )),
        }
    }
}
