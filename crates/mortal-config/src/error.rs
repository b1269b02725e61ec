use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Resolved config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML.
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        /// Resolved config path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
    /// A requested section is absent.
    #[error("missing config section [{name}]")]
    MissingSection {
        /// Section name.
        name: String,
    },
    /// A section does not match the requested shape.
    #[error("invalid config section [{name}]: {source}")]
    Section {
        /// Section name.
        name: String,
        /// Underlying deserialization error.
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
