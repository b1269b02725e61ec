use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Validation warnings from the libraries reach the user through this
/// subscriber; stdout stays reserved for command output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
