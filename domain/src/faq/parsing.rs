//! FAQ parsing from generator output.
//!
//! Validates the structured value a backend returns against the FAQ list
//! shape. Validation is all-or-nothing: a single bad entry discards the
//! whole response, so callers never see a partial list.

use crate::faq::entities::{FaqItem, FaqResult};
use serde_json::Value;

/// Extract a JSON value from raw model text.
///
/// Supports two formats:
/// 1. ` ```json` (or bare ` ``` `) fenced code blocks
/// 2. Raw JSON (the entire text is valid JSON)
///
/// Returns `None` for blank or unparseable text.
pub fn extract_json_payload(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    // Look for ```json ... ``` blocks
    let mut in_block = false;
    let mut current_block = String::new();

    for line in trimmed.lines() {
        let marker = line.trim();
        if !in_block && (marker == "```json" || marker == "```") {
            in_block = true;
            current_block.clear();
        } else if in_block && marker == "```" {
            in_block = false;
            if let Ok(value) = serde_json::from_str::<Value>(&current_block) {
                return Some(value);
            }
        } else if in_block {
            current_block.push_str(line);
            current_block.push('\n');
        }
    }

    None
}

/// Parse a [`FaqResult`] from a structured value.
///
/// Expected schema:
/// ```json
/// { "faqs": [ { "question": "string", "answer": "string" } ] }
/// ```
///
/// A bare array of entries is accepted as well. Returns `None` when the
/// shape does not match or any entry has a missing or blank field.
pub fn parse_faq_output(value: &Value) -> Option<FaqResult> {
    let entries = match value {
        Value::Object(map) => map.get("faqs")?.as_array()?,
        Value::Array(entries) => entries,
        _ => return None,
    };

    let mut faqs = Vec::with_capacity(entries.len());
    for entry in entries {
        let question = entry.get("question")?.as_str()?;
        let answer = entry.get("answer")?.as_str()?;
        faqs.push(FaqItem::try_new(question, answer).ok()?);
    }

    Some(FaqResult::new(faqs))
}
