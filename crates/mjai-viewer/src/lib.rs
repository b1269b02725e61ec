//! Builds self-contained HTML viewers from compressed mjai logs.
//!
//! The viewer template embeds the game log as a JavaScript template literal
//! assigned to `allActions`. Generating a viewer replaces the literal's body
//! with the decompressed log text and writes the result as a standalone page.

#![deny(missing_docs)]

/// Error types for viewer generation.
pub mod error;
/// Template splicing.
pub mod template;

pub use error::ViewerError;
pub use template::{splice, END_MARKER, START_MARKER};

use std::fs;
use std::path::{Path, PathBuf};

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "log-viewer/index.example.html";
/// Directory receiving viewers when no output path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "log-viewer";
/// Extension stripped from the log name to form the viewer name.
pub const LOG_EXTENSION: &str = ".json.gz";

/// Derives the viewer path for a log: `log-viewer/<name>.html`.
///
/// Every occurrence of `.json.gz` in the file name is removed.
pub fn default_output_path<P: AsRef<Path>>(log_path: P) -> PathBuf {
    let file_name = log_path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base_name = file_name.replace(LOG_EXTENSION, "");
    Path::new(DEFAULT_OUTPUT_DIR).join(format!("{}.html", base_name))
}

/// Generates a viewer for `log_path` using `template_path`, writing it to
/// `output_path`.
///
/// Nothing is written unless the log and template were both read and the
/// template markers were found. Missing parent directories of the output are
/// created.
///
/// # Errors
///
/// Returns [`ViewerError`] if the log or template cannot be read, the markers
/// are missing, or the output cannot be written.
pub fn create_viewer(
    log_path: &Path,
    template_path: &Path,
    output_path: &Path,
) -> Result<PathBuf, ViewerError> {
    let log_text = mjai_log::read_to_string(log_path)?;
    let template =
        fs::read_to_string(template_path).map_err(|e| ViewerError::template(template_path, e))?;

    let html = splice(&template, &log_text)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ViewerError::write(output_path, e))?;
    }
    fs::write(output_path, html).map_err(|e| ViewerError::write(output_path, e))?;

    tracing::debug!(
        log = %log_path.display(),
        output = %output_path.display(),
        "viewer written"
    );
    Ok(output_path.to_path_buf())
}
