use crate::errors::ParseError;
use serde_json::Value;
use std::fmt;

/// Event JSON payload type.
///
/// One decoded line of an mjai log. Fields beyond `type` are left untyped
/// until [`parse_event`] inspects them.
pub type EventJson = Value;

/// The `type` tag of an event record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `start_game`
    StartGame,
    /// `start_kyoku`
    StartKyoku,
    /// `end_kyoku`
    EndKyoku,
    /// `end_game`
    EndGame,
    /// `hora`
    Hora,
    /// `ryukyoku`
    Ryukyoku,
    /// Any tag this crate does not interpret (`dahai`, `tsumo`, ...).
    Other(String),
    /// No string `type` field.
    Missing,
}

impl EventKind {
    /// Reads the `type` tag of a decoded record.
    pub fn of(event: &EventJson) -> Self {
        match event.get("type").and_then(Value::as_str) {
            Some(tag) => Self::from_tag(tag),
            None => Self::Missing,
        }
    }

    /// Maps a tag string to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "start_game" => Self::StartGame,
            "start_kyoku" => Self::StartKyoku,
            "end_kyoku" => Self::EndKyoku,
            "end_game" => Self::EndGame,
            "hora" => Self::Hora,
            "ryukyoku" => Self::Ryukyoku,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire tag, or `"?"` for a missing one.
    pub fn as_str(&self) -> &str {
        match self {
            Self::StartGame => "start_game",
            Self::StartKyoku => "start_kyoku",
            Self::EndKyoku => "end_kyoku",
            Self::EndGame => "end_game",
            Self::Hora => "hora",
            Self::Ryukyoku => "ryukyoku",
            Self::Other(tag) => tag,
            Self::Missing => "?",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement data carried by a round-ending event (`hora`, `ryukyoku`).
///
/// The record is kept as decoded. Field shapes are not checked here; the
/// validator only asks whether a `deltas` key exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terminal {
    /// The full record.
    pub raw: EventJson,
}

impl Terminal {
    /// Wraps a decoded round-ending record.
    pub fn from_json(json: &EventJson) -> Self {
        Self { raw: json.clone() }
    }

    /// Whether the record carried a `deltas` key at all, even as `null`.
    pub fn has_deltas(&self) -> bool {
        self.raw.get("deltas").is_some()
    }

    /// The score changes, when present and non-null.
    pub fn deltas(&self) -> Option<&Value> {
        self.raw.get("deltas").filter(|d| !d.is_null())
    }

    /// Winning seat, when it is a non-negative integer.
    pub fn actor(&self) -> Option<u64> {
        self.raw.get("actor").and_then(Value::as_u64)
    }

    /// Seat that dealt in, when it is a non-negative integer.
    pub fn target(&self) -> Option<u64> {
        self.raw.get("target").and_then(Value::as_u64)
    }
}

/// Typed representation of an event record.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedEvent {
    /// A game begins.
    StartGame,
    /// A round begins.
    StartKyoku,
    /// A round ends.
    EndKyoku,
    /// A game ends.
    EndGame,
    /// A round won by a player.
    Hora(Terminal),
    /// A round ended in a draw.
    Ryukyoku(Terminal),
    /// Event kind not interpreted here, kept verbatim.
    Unknown(EventJson),
}

impl TypedEvent {
    /// Returns the `type` tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::StartGame => EventKind::StartGame,
            Self::StartKyoku => EventKind::StartKyoku,
            Self::EndKyoku => EventKind::EndKyoku,
            Self::EndGame => EventKind::EndGame,
            Self::Hora(_) => EventKind::Hora,
            Self::Ryukyoku(_) => EventKind::Ryukyoku,
            Self::Unknown(json) => EventKind::of(json),
        }
    }

    /// Settlement data for round-ending events.
    pub fn terminal(&self) -> Option<&Terminal> {
        match self {
            Self::Hora(t) | Self::Ryukyoku(t) => Some(t),
            _ => None,
        }
    }

    /// Whether this event ends a round with a settlement.
    pub fn is_terminal(&self) -> bool {
        self.terminal().is_some()
    }
}

/// Parses a JSON record into a typed event.
///
/// Inspects the `type` field to pick the variant. Records with an
/// unrecognized or missing `type` become [`TypedEvent::Unknown`]. Fields
/// other than `type` are never checked, so only a record that is not a JSON
/// object is rejected.
pub fn parse_event(json: &EventJson) -> Result<TypedEvent, ParseError> {
    if !json.is_object() {
        return Err(ParseError::NotAnObject);
    }

    match EventKind::of(json) {
        EventKind::StartGame => Ok(TypedEvent::StartGame),
        EventKind::StartKyoku => Ok(TypedEvent::StartKyoku),
        EventKind::EndKyoku => Ok(TypedEvent::EndKyoku),
        EventKind::EndGame => Ok(TypedEvent::EndGame),
        EventKind::Hora => Ok(TypedEvent::Hora(Terminal::from_json(json))),
        EventKind::Ryukyoku => Ok(TypedEvent::Ryukyoku(Terminal::from_json(json))),
        EventKind::Other(_) | EventKind::Missing => Ok(TypedEvent::Unknown(json.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lifecycle_tags_map_to_variants() {
        assert_eq!(parse_event(&json!({"type": "start_game", "names": ["a", "b", "c", "d"]})).unwrap(), TypedEvent::StartGame);
        assert_eq!(parse_event(&json!({"type": "start_kyoku"})).unwrap(), TypedEvent::StartKyoku);
        assert_eq!(parse_event(&json!({"type": "end_kyoku"})).unwrap(), TypedEvent::EndKyoku);
        assert_eq!(parse_event(&json!({"type": "end_game"})).unwrap(), TypedEvent::EndGame);
    }

    #[test]
    fn hora_keeps_settlement() {
        let event = parse_event(&json!({
            "type": "hora",
            "actor": 1,
            "target": 3,
            "deltas": [0, 8000, 0, -8000],
            "ura_markers": []
        }))
        .unwrap();

        let terminal = event.terminal().unwrap();
        assert_eq!(terminal.actor(), Some(1));
        assert_eq!(terminal.target(), Some(3));
        assert_eq!(terminal.deltas(), Some(&json!([0, 8000, 0, -8000])));
        assert_eq!(event.kind(), EventKind::Hora);
    }

    #[test]
    fn missing_and_null_deltas_differ() {
        let missing = parse_event(&json!({"type": "ryukyoku"})).unwrap();
        let null = parse_event(&json!({"type": "ryukyoku", "deltas": null})).unwrap();

        assert!(!missing.terminal().unwrap().has_deltas());
        assert!(null.terminal().unwrap().has_deltas());
        assert_eq!(null.terminal().unwrap().deltas(), None);
    }

    #[test]
    fn odd_field_shapes_accepted() {
        let event = parse_event(&json!({
            "type": "hora",
            "actor": "0",
            "target": 7000,
            "deltas": [1000.0, -1000.0, 0, 0]
        }))
        .unwrap();

        let terminal = event.terminal().unwrap();
        assert!(terminal.has_deltas());
        assert_eq!(terminal.actor(), None);
        assert_eq!(terminal.target(), Some(7000));

        let odd = parse_event(&json!({"type": "ryukyoku", "deltas": "lots"})).unwrap();
        assert!(odd.terminal().unwrap().has_deltas());
    }

    #[test]
    fn unknown_types_preserved() {
        let raw = json!({"type": "dahai", "actor": 0, "pai": "5mr", "tsumogiri": false});
        match parse_event(&raw).unwrap() {
            TypedEvent::Unknown(json) => assert_eq!(json, raw),
            other => panic!("expected Unknown, got {:?}", other),
        }

        let untyped = parse_event(&json!({"actor": 0})).unwrap();
        assert_eq!(untyped.kind(), EventKind::Missing);
    }

    #[test]
    fn non_object_rejected() {
        assert!(matches!(parse_event(&json!([1, 2])), Err(ParseError::NotAnObject)));
        assert!(matches!(parse_event(&json!("start_game")), Err(ParseError::NotAnObject)));
    }
}
