use super::language::ENGLISH;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /check_symptoms`. Every field is optional on the wire.
///
/// Form clients often send `"age": 30` rather than `"30"`, so scalar values
/// are accepted and rendered as text. `null` counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymptomRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub symptoms: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: String,
    #[serde(default = "default_language", deserialize_with = "lenient_language")]
    pub language: String,
}

fn default_language() -> String {
    ENGLISH.to_string()
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) => Err(de::Error::custom("expected text, found an array")),
        Value::Object(_) => Err(de::Error::custom("expected text, found an object")),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

fn lenient_language<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.unwrap_or_else(default_language))
}

impl Default for SymptomRequest {
    fn default() -> Self {
        Self {
            symptoms: String::new(),
            age: String::new(),
            gender: String::new(),
            language: default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_defaults() {
        let request: SymptomRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, SymptomRequest::default());
        assert_eq!(request.language, "en");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let request: SymptomRequest =
            serde_json::from_str(r#"{"symptoms":"cough","language":"ta","extra":1}"#).unwrap();
        assert_eq!(request.symptoms, "cough");
        assert_eq!(request.language, "ta");
        assert_eq!(request.age, "");
    }

    #[test]
    fn scalar_fields_are_rendered_as_text() {
        let request: SymptomRequest =
            serde_json::from_str(r#"{"symptoms":"cough","age":30,"gender":true}"#).unwrap();
        assert_eq!(request.age, "30");
        assert_eq!(request.gender, "true");

        let request: SymptomRequest = serde_json::from_str(r#"{"age":4.5}"#).unwrap();
        assert_eq!(request.age, "4.5");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let request: SymptomRequest =
            serde_json::from_str(r#"{"symptoms":null,"age":null,"language":null}"#).unwrap();
        assert_eq!(request, SymptomRequest::default());
    }

    #[test]
    fn structured_values_are_rejected() {
        assert!(serde_json::from_str::<SymptomRequest>(r#"{"symptoms":["cough"]}"#).is_err());
        assert!(serde_json::from_str::<SymptomRequest>(r#"{"age":{"years":3}}"#).is_err());
    }
}
