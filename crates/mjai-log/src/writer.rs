//! Log writer implementation.

use crate::errors::LogError;
use crate::event::EventJson;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer producing gzip-compressed JSON-lines logs.
///
/// Each appended event is serialized compactly on its own line. The gzip
/// trailer is only written by [`finish`](Self::finish); a writer dropped
/// without finishing leaves a truncated stream.
///
/// # Example
///
/// ```rust,no_run
/// use mjai_log::LogWriter;
/// use serde_json::json;
///
/// let mut writer = LogWriter::create("game.json.gz")?;
/// writer.append_event(&json!({"type": "start_game"}))?;
/// writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LogWriter<W: Write> {
    encoder: GzEncoder<W>,
    events: u64,
}

impl LogWriter<BufWriter<File>> {
    /// Creates (or truncates) a log file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LogWriter<W> {
    /// Wraps an uncompressed sink.
    pub fn new(inner: W) -> Self {
        Self {
            encoder: GzEncoder::new(inner, Compression::default()),
            events: 0,
        }
    }

    /// Appends one event as a single line.
    pub fn append_event(&mut self, event: &EventJson) -> Result<(), LogError> {
        serde_json::to_writer(&mut self.encoder, event)?;
        self.encoder.write_all(b"\n")?;
        self.events += 1;
        Ok(())
    }

    /// Number of events appended so far.
    pub fn event_count(&self) -> u64 {
        self.events
    }

    /// Completes the gzip stream and returns the inner sink.
    pub fn finish(self) -> Result<W, LogError> {
        let mut inner = self.encoder.finish()?;
        inner.flush()?;
        Ok(inner)
    }
}
