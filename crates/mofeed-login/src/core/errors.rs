//! Server error extraction and classification.
//!
//! # Design
//! - Classification is substring based on the host's English error text; the
//!   matched phrases are kept verbatim for compatibility with existing servers.
//! - Anything unrecognised is surfaced unmodified rather than as a generic message.

use crate::i18n::{Language, MessageKey, localize};
use serde_json::Value;

/// Fallback text when an error body carries neither `message` nor `_server_messages`.
pub const DEFAULT_FAILURE_TEXT: &str = "Login failed";

const INVALID_CREDENTIAL_MARKERS: [&str; 2] = ["Incorrect password", "Invalid login"];
const USER_DISABLED_MARKERS: [&str; 2] = ["User disabled", "not allowed"];

/// Raw error text from a non-success response body.
///
/// Prefers `message`, then `_server_messages`, then [`DEFAULT_FAILURE_TEXT`].
/// A body that is not JSON yields the decoder error text.
#[must_use]
pub fn extract_server_error(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => ["message", "_server_messages"]
            .into_iter()
            .find_map(|field| value.get(field).and_then(truthy_text))
            .unwrap_or_else(|| DEFAULT_FAILURE_TEXT.to_string()),
        Err(err) => err.to_string(),
    }
}

/// Turn raw server text into the message shown to the user.
///
/// A `_server_messages` style payload yields its first entry's `message`, or the raw
/// text when that entry has none. Only text that is not such a payload is matched
/// against the known failure phrases.
#[must_use]
pub fn parse_error(raw: &str, language: Language) -> String {
    if let Some(entry) = server_entry(raw) {
        return entry
            .get("message")
            .and_then(truthy_text)
            .unwrap_or_else(|| raw.to_string());
    }
    match classify(raw) {
        Some(key) => localize(key, language),
        None => raw.to_string(),
    }
}

/// Known failure category for `text`, if any.
#[must_use]
pub fn classify(text: &str) -> Option<MessageKey> {
    if INVALID_CREDENTIAL_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
    {
        Some(MessageKey::InvalidCredentials)
    } else if USER_DISABLED_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
    {
        Some(MessageKey::UserDisabled)
    } else {
        None
    }
}

/// First entry of a `_server_messages` style payload: a JSON array whose
/// elements are themselves JSON-encoded text.
///
/// `None` when `raw` is not such a payload, including when the first element is
/// not a string or does not decode to a value that can carry a `message`.
fn server_entry(raw: &str) -> Option<Value> {
    if !raw.starts_with('[') {
        return None;
    }
    let entries: Vec<Value> = serde_json::from_str(raw).ok()?;
    match entries.into_iter().next()? {
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded).ok()? {
            Value::Null => None,
            entry => Some(entry),
        },
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON) => None,
        other => Some(other.to_string()),
    }
}
