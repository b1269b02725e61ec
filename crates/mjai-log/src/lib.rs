//! Reader, writer and structural validator for mjai game logs.
//!
//! An mjai log is a gzip-compressed UTF-8 text file holding one JSON event
//! object per line. This crate provides:
//! - Typed decoding of event records keyed by their `type` tag
//! - Streaming reader and writer over the compressed line format
//! - A validator that checks every game and round opened is also closed
//! - Recursive discovery of log files under a directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mjai_log::{validate_file, LogWriter};
//! use serde_json::json;
//!
//! let mut writer = LogWriter::create("game.json.gz")?;
//! writer.append_event(&json!({"type": "start_game"}))?;
//! writer.append_event(&json!({"type": "end_game"}))?;
//! writer.finish()?;
//!
//! let report = validate_file("game.json.gz")?;
//! assert!(report.valid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`LogReader`] - Read events from compressed logs
//! - [`LogWriter`] - Write events to compressed logs
//! - [`Validator`] - Incremental game/round bookkeeping
//! - [`TypedEvent`] - Decoded event record

#![deny(missing_docs)]

/// Recursive log discovery.
pub mod discover;
/// Error types for log operations.
pub mod errors;
/// Event record types and parsing.
pub mod event;
/// Log reader implementation.
pub mod reader;
/// Structural validation of game logs.
pub mod validation;
/// Log writer implementation.
pub mod writer;

pub use discover::{discover_logs, DEFAULT_PATTERN};
pub use errors::{LogError, ParseError};
pub use event::{parse_event, EventJson, EventKind, Terminal, TypedEvent};
pub use reader::{read_to_string, LogReader};
pub use validation::{
    validate_events, validate_file, validate_mjai_file, validate_reader, ValidationReport,
    ValidationWarning, Validator,
};
pub use writer::LogWriter;
