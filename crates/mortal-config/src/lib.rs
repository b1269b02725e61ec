//! Locates and parses the Mortal TOML configuration file.
//!
//! The file name comes from the `MORTAL_CFG` environment variable and falls
//! back to `config.toml`. Relative names are resolved against the project
//! root. The parsed document is returned as a [`Config`] value that callers
//! build once at startup and pass by reference; there is no global instance.
//!
//! ```rust,no_run
//! use mortal_config::Config;
//!
//! let config = Config::load()?;
//! let batch_size = config.get_i64("training.batch_size");
//! # Ok::<(), mortal_config::ConfigError>(())
//! ```

#![deny(missing_docs)]

/// Error types for configuration loading.
pub mod error;
/// Configuration file path resolution.
pub mod resolve;

pub use error::ConfigError;
pub use resolve::{project_root, resolve_config_path, CONFIG_ENV, DEFAULT_CONFIG_FILE};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    path: PathBuf,
    table: Table,
}

impl Config {
    /// Loads the configuration named by `MORTAL_CFG` (or the default file).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable or not
    /// valid TOML. There is no fallback to default values.
    pub fn load() -> Result<Self, ConfigError> {
        let env_value = std::env::var(CONFIG_ENV).ok();
        let path = resolve_config_path(env_value.as_deref(), &project_root());
        Self::from_path(path)
    }

    /// Loads the configuration from an explicit path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let table = contents
            .parse::<Table>()
            .map_err(|e| ConfigError::parse(path, e))?;

        tracing::debug!(path = %path.display(), sections = table.len(), "loaded config");
        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    /// Parses configuration text not backed by a file.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let table = contents
            .parse::<Table>()
            .map_err(|e| ConfigError::parse("<string>", e))?;
        Ok(Self {
            path: PathBuf::new(),
            table,
        })
    }

    /// Path the configuration was loaded from (empty for in-memory text).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Looks up a value by dotted key, e.g. `"control.version"`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.table.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    /// Returns a top-level table.
    pub fn section(&self, name: &str) -> Option<&Table> {
        self.table.get(name)?.as_table()
    }

    /// Looks up a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Looks up an integer value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_integer()
    }

    /// Looks up a float value. Integers are widened.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Looks up a boolean value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Deserializes a top-level section into a typed struct.
    pub fn section_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        let value = self
            .table
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::MissingSection {
                name: name.to_string(),
            })?;
        value.try_into().map_err(|source| ConfigError::Section {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const SAMPLE: &str = r#"
[control]
version = 4
online = true
batch_size = 512

[optim]
lr = 1e-4
eps = 1

[dataset]
globs = ["data/training/**/*.json.gz"]
file_index = "file_index.pth"
"#;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Dataset {
        globs: Vec<String>,
        file_index: String,
    }

    #[test]
    fn dotted_lookups() {
        let config = Config::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.get_i64("control.version"), Some(4));
        assert_eq!(config.get_bool("control.online"), Some(true));
        assert_eq!(config.get_f64("optim.lr"), Some(1e-4));
        assert_eq!(config.get_f64("optim.eps"), Some(1.0));
        assert_eq!(config.get_str("dataset.file_index"), Some("file_index.pth"));
        assert!(config.get("control.missing").is_none());
        assert!(config.get("control.version.deeper").is_none());
        assert_eq!(config.section("control").unwrap().len(), 3);
    }

    #[test]
    fn typed_section() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let dataset: Dataset = config.section_as("dataset").unwrap();

        assert_eq!(dataset.globs, vec!["data/training/**/*.json.gz"]);
        assert!(matches!(
            config.section_as::<Dataset>("grp"),
            Err(ConfigError::MissingSection { .. })
        ));
        assert!(matches!(
            config.section_as::<Dataset>("control"),
            Err(ConfigError::Section { .. })
        ));
    }

    #[test]
    fn malformed_text() {
        let result = Config::from_toml_str("[control\nversion = ");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
