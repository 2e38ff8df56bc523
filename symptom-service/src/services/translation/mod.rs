//! Text translation between the caller's language and English.
//!
//! Inbound requests translate the free-text symptoms once; outbound replies
//! translate every string in the assessment, one backend call per string.

pub mod google;
pub mod mock;

use crate::models::Assessment;
use crate::services::metrics;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Longest text (in characters, exclusive) the backend accepts in one call.
pub const MAX_TEXT_CHARS: usize = 5000;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Text length need to be between 0 and {max} characters")]
    InvalidLength { max: usize },

    #[error("Request to translation service failed: {0}")]
    Request(String),

    #[error("Translation service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected translation response: {0}")]
    UnexpectedResponse(String),
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target` language codes.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

/// Outcome of [`prepare_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreparedText<'a> {
    /// Send this (trimmed) text to the backend.
    Translate(&'a str),
    /// Nothing to translate; hand this back as the result.
    Unchanged(&'a str),
}

/// Input rules shared by the backends: over-long text is rejected and
/// surrounding whitespace is dropped. Blank text and same-language pairs
/// never reach the network.
pub fn prepare_input<'a>(
    text: &'a str,
    source: &str,
    target: &str,
) -> Result<PreparedText<'a>, TranslationError> {
    if text.chars().count() >= MAX_TEXT_CHARS {
        return Err(TranslationError::InvalidLength { max: MAX_TEXT_CHARS });
    }

    let trimmed = text.trim();
    if trimmed.is_empty() || source == target {
        Ok(PreparedText::Unchanged(trimmed))
    } else {
        Ok(PreparedText::Translate(trimmed))
    }
}

/// Translate every string field and every string element of array fields
/// into `target`. Other values pass through untouched. The first failure
/// aborts the whole assessment.
pub async fn translate_assessment(
    translator: &dyn Translator,
    mut assessment: Assessment,
    target: &str,
) -> Result<Assessment, TranslationError> {
    for value in assessment.fields_mut().values_mut() {
        match value {
            Value::String(text) => {
                *text = translate_outbound(translator, text, target).await?;
            }
            Value::Array(items) => {
                for item in items.iter_mut() {
                    if let Value::String(text) = item {
                        *text = translate_outbound(translator, text, target).await?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(assessment)
}

async fn translate_outbound(
    translator: &dyn Translator,
    text: &str,
    target: &str,
) -> Result<String, TranslationError> {
    let result = translator
        .translate(text, crate::models::language::ENGLISH, target)
        .await;
    metrics::record_translation("outbound", result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::mock::MockTranslator;
    use super::*;
    use serde_json::json;

    fn assessment(value: Value) -> Assessment {
        Assessment::from_map(value.as_object().unwrap().clone())
    }

    #[test]
    fn over_long_text_is_rejected() {
        let text = "a".repeat(MAX_TEXT_CHARS);
        let err = prepare_input(&text, "hi", "en").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Text length need to be between 0 and 5000 characters"
        );
    }

    #[test]
    fn blank_or_same_language_text_is_returned_trimmed() {
        assert_eq!(
            prepare_input("   ", "hi", "en").unwrap(),
            PreparedText::Unchanged("")
        );
        assert_eq!(
            prepare_input(" fever ", "en", "en").unwrap(),
            PreparedText::Unchanged("fever")
        );
        assert_eq!(
            prepare_input(" fever ", "en", "hi").unwrap(),
            PreparedText::Translate("fever")
        );
    }

    #[tokio::test]
    async fn translates_strings_and_string_list_elements() {
        let translator = MockTranslator::tagging();
        let input = assessment(json!({
            "possible_conditions": ["flu", 3, "cold"],
            "severity": "Low",
            "next_steps": "rest",
            "care_suggestions": ["hydrate"],
            "disclaimer": "not advice",
            "confidence": 0.7,
            "details": {"note": "kept"}
        }));

        let output = translate_assessment(&translator, input, "hi").await.unwrap();

        assert_eq!(
            Value::Object(output.into_inner()),
            json!({
                "possible_conditions": ["[en>hi] flu", 3, "[en>hi] cold"],
                "severity": "[en>hi] Low",
                "next_steps": "[en>hi] rest",
                "care_suggestions": ["[en>hi] hydrate"],
                "disclaimer": "[en>hi] not advice",
                "confidence": 0.7,
                "details": {"note": "kept"}
            })
        );
        assert_eq!(translator.call_count(), 6);
    }

    #[tokio::test]
    async fn any_failure_voids_the_result() {
        let translator = MockTranslator::failing_on("rest", "quota exceeded");
        let input = assessment(json!({
            "next_steps": "rest",
            "severity": "Low"
        }));

        let err = translate_assessment(&translator, input, "ta")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}
