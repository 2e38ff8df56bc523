//! HTTP handlers for symptom-service.

pub mod health;
pub mod index;
pub mod languages;
pub mod metrics;
pub mod symptoms;

pub use health::{health_check, not_found, readiness_check};
pub use index::index;
pub use languages::list_languages;
pub use metrics::metrics_endpoint;
pub use symptoms::check_symptoms;
