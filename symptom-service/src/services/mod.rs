pub mod checker;
pub mod extractor;
pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod translation;

pub use checker::{CheckError, SymptomChecker};
pub use metrics::{get_metrics, init_metrics};
pub use providers::{ProviderError, TextProvider};
pub use translation::{TranslationError, Translator};
