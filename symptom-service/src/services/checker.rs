//! The symptom check pipeline.
//!
//! translate in (non-English only) -> prompt -> generate -> extract ->
//! translate out (non-English only) -> attach the caller's original text.
//! Each stage runs once, in order; the first failure ends the request.

use crate::models::language::{requires_translation, ENGLISH};
use crate::models::{Assessment, SymptomRequest};
use crate::services::extractor::{extract_assessment, ExtractError};
use crate::services::metrics;
use crate::services::prompt::build_prompt;
use crate::services::providers::{ProviderError, TextProvider};
use crate::services::translation::{translate_assessment, TranslationError, Translator};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Failures reported to the caller in place of an assessment.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    #[error("Error processing request: {0}")]
    Generation(#[from] ProviderError),

    #[error("Error processing request: {0}")]
    Extraction(#[from] ExtractError),
}

impl CheckError {
    /// `{"error": "<message>"}` body returned to the caller.
    pub fn to_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }

    fn outcome(&self) -> &'static str {
        match self {
            CheckError::Translation(_) => "translation_error",
            CheckError::Generation(_) => "generation_error",
            CheckError::Extraction(_) => "extraction_error",
        }
    }
}

#[derive(Clone)]
pub struct SymptomChecker {
    text_provider: Arc<dyn TextProvider>,
    translator: Arc<dyn Translator>,
}

impl SymptomChecker {
    pub fn new(text_provider: Arc<dyn TextProvider>, translator: Arc<dyn Translator>) -> Self {
        Self {
            text_provider,
            translator,
        }
    }

    pub fn text_provider(&self) -> &Arc<dyn TextProvider> {
        &self.text_provider
    }

    #[tracing::instrument(skip(self, request), fields(language = %request.language))]
    pub async fn check(&self, request: SymptomRequest) -> Result<Assessment, CheckError> {
        let result = self.run(request.clone()).await;

        match &result {
            Ok(assessment) => {
                let severity = assessment.severity();
                metrics::record_check(&request.language, "ok");
                metrics::record_assessment(severity.as_str());
                tracing::info!(severity = %severity, "Symptom check completed");
            }
            Err(e) => {
                metrics::record_check(&request.language, e.outcome());
                tracing::warn!(error = %e, "Symptom check failed");
            }
        }

        result
    }

    async fn run(&self, request: SymptomRequest) -> Result<Assessment, CheckError> {
        let SymptomRequest {
            symptoms: original_symptoms,
            age,
            gender,
            language,
        } = request;
        let translate = requires_translation(&language);

        let symptoms = if translate {
            let translated = self
                .translator
                .translate(&original_symptoms, &language, ENGLISH)
                .await;
            metrics::record_translation("inbound", translated.is_ok());
            translated?
        } else {
            original_symptoms.clone()
        };

        let prompt = build_prompt(&age, &gender, &symptoms);

        let started = Instant::now();
        let response = match self.text_provider.generate(&prompt).await {
            Ok(response) => {
                metrics::record_generation(started.elapsed(), response.finish_reason.as_str());
                response
            }
            Err(e) => {
                metrics::record_generation(started.elapsed(), "error");
                tracing::error!(error = %e, "Generation failed");
                return Err(e.into());
            }
        };

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Generation finished"
        );

        let mut assessment = extract_assessment(&response.text)?;

        if translate {
            assessment = translate_assessment(self.translator.as_ref(), assessment, &language)
                .await?;
        }

        assessment.set_original_input(original_symptoms);
        Ok(assessment)
    }
}
