//! Output formatting utilities.

use mjai_log::{EventJson, EventKind};
use serde_json::Value;

/// Formats an event as a simple table row.
pub fn format_table_row(line: u64, event: &EventJson) -> String {
    let actor = event
        .get("actor")
        .and_then(Value::as_u64)
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<6} {:<12} {:<6} {}",
        line,
        EventKind::of(event).as_str(),
        actor,
        truncate(&detail(event), 60)
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<6} {:<12} {:<6} {}", "LINE", "TYPE", "ACTOR", "DETAIL");
    println!("{}", "-".repeat(80));
}

fn detail(event: &EventJson) -> String {
    if let Some(deltas) = event.get("deltas") {
        return format!("deltas={}", deltas);
    }
    if let Some(pai) = event.get("pai").and_then(Value::as_str) {
        return format!("pai={}", pai);
    }
    match (
        event.get("bakaze").and_then(Value::as_str),
        event.get("kyoku").and_then(Value::as_u64),
    ) {
        (Some(bakaze), Some(kyoku)) => format!("{}{}", bakaze, kyoku),
        _ => String::new(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_shows_type_actor_and_pai() {
        let row = format_table_row(3, &json!({"type": "dahai", "actor": 2, "pai": "7p"}));
        assert!(row.starts_with("3      dahai        2      pai=7p"));
    }

    #[test]
    fn row_shows_deltas() {
        let row = format_table_row(9, &json!({"type": "ryukyoku", "deltas": [1000, -1000, 0, 0]}));
        assert!(row.ends_with("deltas=[1000,-1000,0,0]"));
        assert!(row.contains(" -      "));
    }

    #[test]
    fn row_shows_round() {
        let row = format_table_row(2, &json!({"type": "start_kyoku", "bakaze": "S", "kyoku": 3}));
        assert!(row.ends_with("S3"));
    }

    #[test]
    fn long_detail_truncated() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }
}
