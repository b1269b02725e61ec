//! Check command implementation.

use mjai_log::{discover_logs, validate_file, ValidationReport};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory checked when no root is given.
pub const DEFAULT_ROOT: &str = "data/training";

#[derive(Serialize)]
struct FileResult {
    file: PathBuf,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(
    root: String,
    pattern: String,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = Path::new(&root);
    if !root.is_dir() {
        return Err(format!("Log directory not found: {}", root.display()).into());
    }

    let files = discover_logs(root, &pattern)?;
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        if !json_output {
            println!("Checking: {}", file.display());
        }

        let _span = tracing::warn_span!("check", file = %file.display()).entered();
        let result = match validate_file(&file) {
            Ok(report) => {
                if !report.valid && !json_output {
                    let reason = report.reason().unwrap_or_default();
                    println!("Invalid file: {} ({})", file.display(), reason);
                }
                FileResult {
                    file,
                    valid: report.valid,
                    report: Some(report),
                    error: None,
                }
            }
            Err(e) => {
                if !json_output {
                    println!("Invalid file: {} ({})", file.display(), e);
                }
                FileResult {
                    file,
                    valid: false,
                    report: None,
                    error: Some(e.to_string()),
                }
            }
        };
        results.push(result);
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    let warnings: usize = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .map(|r| r.warnings.len())
        .sum();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!(
            "Checked {} file(s): {} invalid, {} warning(s)",
            results.len(),
            invalid,
            warnings
        );
    }

    if strict && invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}
