//! The structured reply returned to callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const STANDARD_DISCLAIMER: &str =
    "This is not medical advice. Please consult a healthcare professional for proper diagnosis.";

pub const POSSIBLE_CONDITIONS: &str = "possible_conditions";
pub const SEVERITY: &str = "severity";
pub const NEXT_STEPS: &str = "next_steps";
pub const CARE_SUGGESTIONS: &str = "care_suggestions";
pub const DISCLAIMER: &str = "disclaimer";
pub const ORIGINAL_INPUT: &str = "original_input";

/// Assessment produced for one request.
///
/// Backed by the JSON object the model returned so that keys outside the
/// requested schema survive to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assessment(Map<String, Value>);

impl Assessment {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Placeholder used when the model reply holds no usable JSON object.
    pub fn fallback() -> Self {
        let mut fields = Map::new();
        fields.insert(
            POSSIBLE_CONDITIONS.to_string(),
            Value::from(vec!["Unable to parse AI response properly"]),
        );
        fields.insert(SEVERITY.to_string(), Value::from("Unknown"));
        fields.insert(
            NEXT_STEPS.to_string(),
            Value::from("Please consult a healthcare professional for proper assessment."),
        );
        fields.insert(
            CARE_SUGGESTIONS.to_string(),
            Value::from(vec!["Seek professional medical advice"]),
        );
        fields.insert(DISCLAIMER.to_string(), Value::from(STANDARD_DISCLAIMER));
        Self(fields)
    }

    /// Insert the standard disclaimer unless the key is already present.
    pub fn ensure_disclaimer(&mut self) {
        self.0
            .entry(DISCLAIMER)
            .or_insert_with(|| Value::from(STANDARD_DISCLAIMER));
    }

    pub fn set_original_input(&mut self, symptoms: impl Into<String>) {
        self.0
            .insert(ORIGINAL_INPUT.to_string(), Value::String(symptoms.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Typed view over the `severity` field.
    pub fn severity(&self) -> Severity {
        self.0
            .get(SEVERITY)
            .and_then(Value::as_str)
            .map(Severity::parse)
            .unwrap_or(Severity::Unknown)
    }
}

/// Severity levels the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Unknown,
}

impl Severity {
    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallback_has_the_fixed_fields() {
        let fallback = Value::Object(Assessment::fallback().into_inner());
        assert_eq!(
            fallback,
            json!({
                "possible_conditions": ["Unable to parse AI response properly"],
                "severity": "Unknown",
                "next_steps": "Please consult a healthcare professional for proper assessment.",
                "care_suggestions": ["Seek professional medical advice"],
                "disclaimer": STANDARD_DISCLAIMER,
            })
        );
    }

    #[test]
    fn ensure_disclaimer_keeps_existing_value() {
        let mut assessment = Assessment::from_map(
            json!({"disclaimer": "See a doctor"}).as_object().unwrap().clone(),
        );
        assessment.ensure_disclaimer();
        assert_eq!(assessment.get(DISCLAIMER), Some(&json!("See a doctor")));
    }

    #[test]
    fn ensure_disclaimer_fills_missing_value() {
        let mut assessment = Assessment::default();
        assessment.ensure_disclaimer();
        assert_eq!(assessment.get(DISCLAIMER), Some(&json!(STANDARD_DISCLAIMER)));
    }

    #[test]
    fn severity_parsing_is_lenient() {
        assert_eq!(Severity::parse("Low"), Severity::Low);
        assert_eq!(Severity::parse(" MEDIUM "), Severity::Medium);
        assert_eq!(Severity::parse("high"), Severity::High);
        assert_eq!(Severity::parse("Moderate"), Severity::Unknown);
    }

    #[test]
    fn severity_of_non_string_field_is_unknown() {
        let assessment =
            Assessment::from_map(json!({"severity": 3}).as_object().unwrap().clone());
        assert_eq!(assessment.severity(), Severity::Unknown);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut assessment = Assessment::fallback();
        assessment.set_original_input("fever");
        let body = serde_json::to_value(&assessment).unwrap();
        assert_eq!(body["original_input"], "fever");
        assert_eq!(body["severity"], "Unknown");
    }
}
