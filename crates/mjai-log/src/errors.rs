use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, writing or validating a log.
#[derive(Error, Debug)]
pub enum LogError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Log file could not be opened.
    #[error("failed to open log {path}: {source}")]
    Open {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line is not valid JSON.
    #[error("JSON parse error at line {line}: {source}")]
    Decode {
        /// 1-based line number within the decompressed stream.
        line: u64,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A line is valid JSON but not a usable event record.
    #[error("invalid event at line {line}: {source}")]
    Event {
        /// 1-based line number within the decompressed stream.
        line: u64,
        /// Reason the record was rejected.
        #[source]
        source: ParseError,
    },
    /// JSON serialization failed while writing.
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),
    /// Discovery pattern is malformed.
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        /// Pattern after joining onto the root.
        pattern: String,
        /// Underlying pattern error.
        #[source]
        source: glob::PatternError,
    },
}

/// Errors that can occur when typing a decoded event.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Event is not a JSON object.
    #[error("event is not a JSON object")]
    NotAnObject,
}
