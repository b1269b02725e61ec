//! Log reader implementation.

use crate::errors::LogError;
use crate::event::EventJson;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Streaming reader over a gzip-compressed JSON-lines log.
///
/// Lines are decoded lazily, one JSON object per non-empty line. Blank lines
/// are skipped; any other line that fails to decode is an error carrying its
/// line number.
///
/// # Example
///
/// ```rust,no_run
/// use mjai_log::LogReader;
///
/// let mut reader = LogReader::open("game.json.gz")?;
/// while let Some(event) = reader.read_event()? {
///     println!("Event: {}", event["type"]);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LogReader {
    lines: Box<dyn BufRead>,
    buf: String,
    line: u64,
}

impl LogReader {
    /// Opens a compressed log file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened. A corrupt gzip
    /// stream surfaces later, from [`read_event`](Self::read_event).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }

    /// Wraps any compressed byte stream.
    pub fn from_reader<R: Read + 'static>(inner: R) -> Self {
        Self {
            lines: Box::new(BufReader::new(MultiGzDecoder::new(inner))),
            buf: String::new(),
            line: 0,
        }
    }

    /// Returns the number of lines consumed so far.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Reads the next event from the log.
    ///
    /// Returns `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] if:
    /// - The gzip stream is corrupt or the text is not UTF-8
    /// - A non-empty line is not valid JSON
    pub fn read_event(&mut self) -> Result<Option<EventJson>, LogError> {
        loop {
            self.buf.clear();
            if self.lines.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }

            let event = serde_json::from_str(text).map_err(|source| LogError::Decode {
                line: self.line,
                source,
            })?;
            return Ok(Some(event));
        }
    }

    /// Turns the reader into an iterator of events.
    ///
    /// The iterator stops after the first error.
    pub fn events(self) -> Events {
        Events {
            reader: self,
            failed: false,
        }
    }
}

/// Iterator returned by [`LogReader::events`].
pub struct Events {
    reader: LogReader,
    failed: bool,
}

impl Events {
    /// Line number of the most recently yielded event.
    pub fn line(&self) -> u64 {
        self.reader.line()
    }
}

impl Iterator for Events {
    type Item = Result<EventJson, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.reader.read_event() {
            Ok(event) => event.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads a compressed log into a single string.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, LogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    MultiGzDecoder::new(file).read_to_string(&mut text)?;
    Ok(text)
}
