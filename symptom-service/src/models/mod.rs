//! Domain models for the symptom service.

pub mod assessment;
pub mod language;
pub mod request;

pub use assessment::{Assessment, Severity, STANDARD_DISCLAIMER};
pub use language::Language;
pub use request::SymptomRequest;
