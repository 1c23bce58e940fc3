//! Lenient score input parsing
//!
//! Accepts the assessment's dimension array:
//!
//! ```json
//! [{ "code": "R", "score": 80 }, { "code": "I", "score": 10 }]
//! ```
//!
//! Parsing never fails hard. `None` means the input is not computable
//! (not an array, or an empty array); callers map that to the unavailable
//! report. Inside a valid array, entries without a recognizable code are
//! skipped and missing or non-numeric scores count as 0.

use pathways_common::{RiasecCode, RiasecScore};
use serde_json::Value;
use tracing::{debug, warn};

/// Extract scores from a JSON value
pub fn scores_from_value(value: &Value) -> Option<Vec<RiasecScore>> {
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => {
            warn!("Score input is not an array ({})", kind_of(value));
            return None;
        }
    };

    if entries.is_empty() {
        warn!("Score input is an empty array");
        return None;
    }

    let scores: Vec<RiasecScore> = entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let code = entry
                .get("code")
                .and_then(Value::as_str)
                .and_then(RiasecCode::from_str);
            match code {
                Some(code) => {
                    let raw_score = entry.get("score").and_then(Value::as_f64).unwrap_or(0.0);
                    Some(RiasecScore::new(code, raw_score))
                }
                None => {
                    debug!("Skipping entry {} without a RIASEC code: {}", idx, entry);
                    None
                }
            }
        })
        .collect();

    Some(scores)
}

/// Extract scores from JSON text
///
/// Unparseable text is treated like any other malformed input.
pub fn scores_from_json_str(text: &str) -> Option<Vec<RiasecScore>> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => scores_from_value(&value),
        Err(e) => {
            warn!("Score input is not valid JSON: {}", e);
            None
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
