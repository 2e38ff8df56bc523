//! Google web translation backend.
//!
//! Uses the keyless `translate_a/single` endpoint. The reply is a nested
//! array whose first element lists `[translated, original, ...]` segments.

use super::{prepare_input, PreparedText, TranslationError, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const GOOGLE_TRANSLATE_BASE: &str = "https://translate.googleapis.com";

#[derive(Debug, Clone)]
pub struct GoogleTranslateConfig {
    pub base_url: String,
    pub timeout: Duration,
}

pub struct GoogleTranslator {
    config: GoogleTranslateConfig,
    client: Client,
}

impl GoogleTranslator {
    pub fn new(config: GoogleTranslateConfig) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::Request(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

/// Join the translated segments of a `translate_a/single` reply.
fn parse_segments(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::UnexpectedResponse("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::UnexpectedResponse(
            "no translated text in response".to_string(),
        ));
    }

    Ok(translated)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let text = match prepare_input(text, source, target)? {
            PreparedText::Translate(text) => text,
            PreparedText::Unchanged(text) => return Ok(text.to_string()),
        };

        tracing::debug!(
            source = %source,
            target = %target,
            text_len = text.len(),
            "Sending request to translation service"
        );

        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::Request(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Api { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::UnexpectedResponse(e.to_string()))?;

        parse_segments(&body)
    }
}
