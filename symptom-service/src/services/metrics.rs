//! Prometheus metrics for symptom-service.
//!
//! Counters and histograms go through the `metrics` facade; the Prometheus
//! recorder installed by [`init_metrics`] renders them for `/metrics`.
//! Recording before initialisation is a no-op.

use crate::models::Language;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Must be called once at startup.
pub fn init_metrics() -> Result<(), String> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            metrics_exporter_prometheus::Matcher::Full(
                "symptom_generation_duration_seconds".to_string(),
            ),
            &[0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0, 120.0],
        )
        .map_err(|e| format!("invalid histogram buckets: {}", e))?
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| "metrics already initialized".to_string())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Label for a requested language. Codes outside the registry share `other`
/// so callers cannot mint new series.
pub fn language_label(code: &str) -> &'static str {
    Language::find(code).map(|lang| lang.code).unwrap_or("other")
}

/// Outcome of a whole check: `ok`, `translation_error`, `generation_error`
/// or `extraction_error`.
pub fn record_check(language: &str, outcome: &'static str) {
    counter!(
        "symptom_checks_total",
        "language" => language_label(language),
        "outcome" => outcome
    )
    .increment(1);
}

/// One call to the translation backend.
pub fn record_translation(direction: &'static str, success: bool) {
    let status = if success { "ok" } else { "error" };
    counter!(
        "symptom_translation_calls_total",
        "direction" => direction,
        "status" => status
    )
    .increment(1);
}

pub fn record_generation(duration: Duration, finish_reason: &'static str) {
    histogram!(
        "symptom_generation_duration_seconds",
        "finish_reason" => finish_reason
    )
    .record(duration.as_secs_f64());
}

pub fn record_parse_fallback() {
    counter!("symptom_parse_fallbacks_total").increment(1);
}

pub fn record_assessment(severity: &'static str) {
    counter!("symptom_assessments_total", "severity" => severity).increment(1);
}
