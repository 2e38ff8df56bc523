//! Mock translator for testing.

use super::{TranslationError, Translator};
use async_trait::async_trait;
use std::sync::Mutex;

/// A recorded `translate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCall {
    pub text: String,
    pub source: String,
    pub target: String,
}

enum Behaviour {
    Tag,
    FailAlways(String),
    FailOn { text: String, message: String },
}

/// Translator that prefixes text with `[source>target] ` instead of
/// translating it, and can be told to fail.
pub struct MockTranslator {
    behaviour: Behaviour,
    calls: Mutex<Vec<TranslationCall>>,
}

impl MockTranslator {
    pub fn tagging() -> Self {
        Self::with(Behaviour::Tag)
    }

    /// Fail every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with(Behaviour::FailAlways(message.into()))
    }

    /// Tag everything except `text`, which fails with `message`.
    pub fn failing_on(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(Behaviour::FailOn {
            text: text.into(),
            message: message.into(),
        })
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<TranslationCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(TranslationCall {
                text: text.to_string(),
                source: source.to_string(),
                target: target.to_string(),
            });
        }

        match &self.behaviour {
            Behaviour::FailAlways(message) => Err(TranslationError::Request(message.clone())),
            Behaviour::FailOn {
                text: failing,
                message,
            } if failing == text => Err(TranslationError::Request(message.clone())),
            _ => Ok(format!("[{}>{}] {}", source, target, text)),
        }
    }
}
