//! JSON payloads returned by the Q&A API.
//!
//! `/menu` and `/questions/{subject}` return a list of labels, `/answer`
//! returns `{"question": ..., "answer": ...}`. Any endpoint may instead return
//! an application error, either `{"error": "..."}` or the `(payload, status)`
//! tuple form `[{"error": "..."}, 500]`.

use serde::Deserialize;
use serde_json::Value;

/// Server → client: answer to one question. The echoed `question` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerMessage {
    pub answer: Value,
}

/// A well-formed reply: either the expected data or the server's error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Data(T),
    Error(String),
}

/// Decode a list endpoint body (`/menu`, `/questions/{subject}`).
pub fn labels_from_json(value: &Value) -> Result<Reply<Vec<String>>, String> {
    if let Some(message) = error_text(value) {
        return Ok(Reply::Error(message));
    }
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected a list, got {}", kind_of(value)))?;
    let labels = items
        .iter()
        .map(|item| scalar_text(item).ok_or_else(|| format!("unexpected list item: {}", item)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Reply::Data(labels))
}

/// Decode an `/answer` body.
pub fn answer_from_json(value: &Value) -> Result<Reply<String>, String> {
    if let Some(message) = error_text(value) {
        return Ok(Reply::Error(message));
    }
    if !value.is_object() {
        return Err(format!("expected an object, got {}", kind_of(value)));
    }
    let m: AnswerMessage = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
    let answer = scalar_text(&m.answer).ok_or_else(|| format!("unexpected answer: {}", m.answer))?;
    Ok(Reply::Data(answer))
}

/// Application error text, if `value` is an error payload.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map.get("error").filter(|e| is_truthy(e)).map(|e| {
            e.as_str()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string())
        }),
        Value::Array(items) if items.len() == 2 && items[0].is_object() => error_text(&items[0]),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
