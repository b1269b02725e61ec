//! List command implementation.

use crate::output;
use mjai_log::LogReader;

pub fn run(log: String, json: bool, max_events: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader =
        LogReader::open(&log).map_err(|e| format!("Failed to open log file: {}", e))?;

    if !json {
        output::print_table_header();
    }

    let mut event_count: u64 = 0;
    while let Some(event) = reader.read_event()? {
        if let Some(max) = max_events {
            if event_count >= max {
                break;
            }
        }

        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            println!("{}", output::format_table_row(reader.line(), &event));
        }
        event_count += 1;
    }

    Ok(())
}
