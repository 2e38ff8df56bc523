use crate::services::providers::gemini::{GeminiConfig, DEFAULT_MODEL, GEMINI_API_BASE};
use crate::services::translation::google::{GoogleTranslateConfig, GOOGLE_TRANSLATE_BASE};
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;
const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SymptomConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub translation: TranslationSettings,
    /// OTLP collector for span export; logs only when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Not validated at startup; an empty key fails on the first generation.
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl SymptomConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build from `lookup` instead of the process environment.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_prod = lookup("ENVIRONMENT").unwrap_or_else(|| "dev".to_string()) == "prod";
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default, is_prod);

        Ok(SymptomConfig {
            common,
            gemini: GeminiSettings {
                api_key: Secret::new(get("GEMINI_API_KEY", Some(""))?),
                model: get("GEMINI_MODEL", Some(DEFAULT_MODEL))?,
                base_url: get("GEMINI_API_BASE", Some(GEMINI_API_BASE))?,
                timeout_secs: parse_secs(
                    &get("GEMINI_TIMEOUT_SECS", Some(""))?,
                    DEFAULT_GEMINI_TIMEOUT_SECS,
                ),
            },
            translation: TranslationSettings {
                base_url: get("TRANSLATE_API_BASE", Some(GOOGLE_TRANSLATE_BASE))?,
                timeout_secs: parse_secs(
                    &get("TRANSLATE_TIMEOUT_SECS", Some(""))?,
                    DEFAULT_TRANSLATE_TIMEOUT_SECS,
                ),
            },
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        })
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            model: self.gemini.model.clone(),
            base_url: self.gemini.base_url.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }

    pub fn translate_config(&self) -> GoogleTranslateConfig {
        GoogleTranslateConfig {
            base_url: self.translation.base_url.clone(),
            timeout: Duration::from_secs(self.translation.timeout_secs),
        }
    }
}

fn parse_secs(raw: &str, default: u64) -> u64 {
    raw.trim().parse().ok().filter(|secs| *secs > 0).unwrap_or(default)
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod && default.is_none() {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
