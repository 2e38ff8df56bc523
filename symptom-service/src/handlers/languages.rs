use crate::models::Language;
use axum::{response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub default: bool,
}

/// Registry in display order, for clients that build their own picker.
pub async fn list_languages() -> impl IntoResponse {
    let entries: Vec<LanguageEntry> = Language::all()
        .iter()
        .map(|lang| LanguageEntry {
            code: lang.code,
            name: lang.name,
            default: lang.is_default(),
        })
        .collect();

    Json(entries)
}
