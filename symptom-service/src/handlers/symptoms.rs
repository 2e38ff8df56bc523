use crate::models::SymptomRequest;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

/// `POST /check_symptoms`.
///
/// Pipeline failures come back as `200 {"error": ...}`; only a body that
/// isn't JSON is rejected with an error status.
#[tracing::instrument(skip(state, payload))]
pub async fn check_symptoms(
    State(state): State<AppState>,
    payload: Result<Json<SymptomRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    let response = match state.checker.check(request).await {
        Ok(assessment) => Json(assessment).into_response(),
        Err(e) => Json(e.to_body()).into_response(),
    };

    Ok(response)
}
