//! Supported interface languages.
//!
//! The registry drives the language picker on the form and decides whether a
//! request needs translating. Codes outside the registry are still accepted;
//! the translation backend is the one that rejects them.

use serde::Serialize;

/// Code of the language the generator is prompted in.
pub const ENGLISH: &str = "en";

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const LANGUAGES: [Language; 12] = [
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "te", name: "Telugu" },
    Language { code: "ta", name: "Tamil" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "kn", name: "Kannada" },
    Language { code: "ml", name: "Malayalam" },
    Language { code: "pa", name: "Punjabi" },
    Language { code: "or", name: "Odia" },
    Language { code: "as", name: "Assamese" },
    Language { code: ENGLISH, name: "English" },
];

impl Language {
    /// All supported languages, in display order.
    pub fn all() -> &'static [Language] {
        &LANGUAGES
    }

    /// Look up a registry entry by code.
    pub fn find(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.code == code)
    }

    pub fn is_default(&self) -> bool {
        self.code == ENGLISH
    }
}

/// Human-readable name for a language code.
pub fn display_name(code: &str) -> Option<&'static str> {
    Language::find(code).map(|lang| lang.name)
}

/// Anything that isn't English goes through the translator, including codes
/// the registry doesn't know about.
pub fn requires_translation(code: &str) -> bool {
    code != ENGLISH
}
