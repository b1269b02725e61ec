//! Viewer command implementation.

use mjai_viewer::{create_viewer, default_output_path, ViewerError};
use std::path::{Path, PathBuf};

pub fn run(
    log: String,
    output: Option<String>,
    template: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = Path::new(&log);
    if !log_path.exists() {
        return Err(format!("Log file not found: {}", log).into());
    }

    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(log_path));

    // Missing markers are reported without failing the process.
    match create_viewer(log_path, Path::new(&template), &output_path) {
        Ok(written) => {
            println!("Created viewer: {}", written.display());
            println!("Open this file in a web browser to view the game log");
            Ok(())
        }
        Err(e @ (ViewerError::MarkerNotFound { .. } | ViewerError::MarkersOutOfOrder)) => {
            eprintln!("Error: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
