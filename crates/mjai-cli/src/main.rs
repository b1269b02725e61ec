//! mjai CLI - checks training logs, builds log viewers and inspects config.

use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{check, config, list, viewer};

#[derive(Parser)]
#[command(name = "mjai")]
#[command(about = "Tools for mjai game logs and Mortal configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every compressed log under a directory for unterminated games
    Check {
        /// Directory searched recursively
        #[arg(default_value = check::DEFAULT_ROOT)]
        root: String,
        /// Glob pattern relative to ROOT
        #[arg(long, default_value = mjai_log::DEFAULT_PATTERN)]
        pattern: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any log is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Build a self-contained HTML viewer for a compressed log
    #[command(after_help = "Example: mjai viewer logs/test_play/10000_8192_a.json.gz")]
    Viewer {
        /// Compressed log (.json.gz)
        log: String,
        /// Output HTML (default: log-viewer/<name>.html)
        output: Option<String>,
        /// HTML template containing the allActions literal
        #[arg(long, default_value = mjai_viewer::DEFAULT_TEMPLATE)]
        template: String,
    },
    /// List events in a compressed log
    List {
        /// Compressed log (.json.gz)
        log: String,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
        /// Stop after reading N events (default: unlimited)
        #[arg(long)]
        max_events: Option<u64>,
    },
    /// Load the configuration named by MORTAL_CFG and print it
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logging::init();

    let result = match cli.command {
        Commands::Check {
            root,
            pattern,
            json,
            strict,
        } => check::run(root, pattern, json, strict),
        Commands::Viewer {
            log,
            output,
            template,
        } => viewer::run(log, output, template),
        Commands::List {
            log,
            json,
            max_events,
        } => list::run(log, json, max_events),
        Commands::Config { json } => config::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
