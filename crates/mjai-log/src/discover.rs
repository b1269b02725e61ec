//! Recursive log discovery.

use crate::errors::LogError;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Pattern matching every compressed log below a root.
pub const DEFAULT_PATTERN: &str = "**/*.json.gz";

/// Discovers log files matching `pattern` below `root`.
///
/// `root` is matched literally; only `pattern` is interpreted as a glob.
/// Paths are returned sorted. Entries that cannot be read while walking are
/// skipped.
///
/// # Errors
///
/// Returns [`LogError::Glob`] if the pattern is malformed.
pub fn discover_logs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LogError> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped_root)
        .join(pattern)
        .to_string_lossy()
        .into_owned();
    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|source| LogError::Glob {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    tracing::debug!(root = %root.display(), count = paths.len(), "discovered logs");
    Ok(paths)
}
