use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while generating a viewer.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The log could not be read or decompressed.
    #[error("failed to read log: {0}")]
    Log(#[from] mjai_log::LogError),
    /// The template could not be read.
    #[error("failed to read template {path}: {source}")]
    Template {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A marker is absent from the template.
    #[error("could not find allActions variable in template (missing {marker:?})")]
    MarkerNotFound {
        /// The marker that was not found.
        marker: &'static str,
    },
    /// The closing marker occurs before the opening one.
    #[error("allActions end marker precedes its start marker")]
    MarkersOutOfOrder,
    /// The viewer could not be written.
    #[error("failed to write viewer {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ViewerError {
    pub(crate) fn template(path: &Path, source: std::io::Error) -> Self {
        Self::Template {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
