//! Pull the assessment object out of the model's free-form reply.
//!
//! Models tend to wrap JSON in markdown fences, sometimes tagged `json`,
//! sometimes not. The rules, in order:
//!
//! 1. text after the first "```json" up to the next "```";
//! 2. otherwise text between the first two "```";
//! 3. otherwise the whole reply.
//!
//! The candidate is trimmed and parsed. Text that is not JSON at all becomes
//! [`Assessment::fallback`]; JSON of any shape other than an object is an
//! [`ExtractError`]. A missing `disclaimer` is always filled.

use crate::models::Assessment;
use crate::services::metrics;
use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("expected a JSON object in the model reply, got {0}")]
    NotAnObject(&'static str),
}

/// Select the text that should hold the JSON payload.
pub fn candidate_json(raw: &str) -> &str {
    if let Some(start) = raw.find(JSON_FENCE) {
        let rest = &raw[start + JSON_FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return rest[..end].trim();
    }

    if let Some(start) = raw.find(FENCE) {
        let rest = &raw[start + FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return rest[..end].trim();
    }

    raw.trim()
}

/// Parse the model reply into an assessment.
///
/// Unparseable text is not an error; a reply that parses to something other
/// than an object is.
pub fn extract_assessment(raw: &str) -> Result<Assessment, ExtractError> {
    let mut assessment = match serde_json::from_str::<Value>(candidate_json(raw)) {
        Ok(Value::Object(fields)) => Assessment::from_map(fields),
        Ok(other) => {
            let kind = json_kind(&other);
            tracing::warn!(kind, "Model reply is JSON but not an object");
            return Err(ExtractError::NotAnObject(kind));
        }
        Err(e) => {
            tracing::debug!(error = %e, "Model reply is not valid JSON, using fallback assessment");
            metrics::record_parse_fallback();
            Assessment::fallback()
        }
    };

    assessment.ensure_disclaimer();
    Ok(assessment)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
