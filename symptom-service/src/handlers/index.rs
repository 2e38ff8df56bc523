use crate::models::Language;
use askama::Template;
use axum::response::IntoResponse;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub languages: &'static [Language],
}

/// Symptom form with the language picker.
pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        languages: Language::all(),
    }
}
