//! End-to-end tests for `POST /check_symptoms` against mock backends.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TestApp, FLU_REPLY};
use serde_json::json;
use symptom_service::models::{Language, STANDARD_DISCLAIMER};
use symptom_service::services::providers::mock::MockTextProvider;
use symptom_service::services::translation::mock::MockTranslator;

#[tokio::test]
async fn english_request_returns_assessment_with_disclaimer_and_original_input() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::tagging(),
    );

    let (status, body) = app
        .post_json(
            "/check_symptoms",
            &json!({
                "symptoms": "fever and headache",
                "age": "30",
                "gender": "male",
                "language": "en"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "possible_conditions": ["flu"],
            "severity": "Low",
            "next_steps": "rest",
            "care_suggestions": ["hydrate"],
            "disclaimer": "This is not medical advice. Please consult a healthcare professional for proper diagnosis.",
            "original_input": "fever and headache"
        })
    );
    assert_eq!(app.translator.call_count(), 0);
}

#[tokio::test]
async fn inbound_translation_failure_returns_only_the_error() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::failing("connection refused"),
    );

    let (status, body) = app
        .post_json(
            "/check_symptoms",
            &json!({"symptoms": "बुखार", "age": "30", "gender": "male", "language": "hi"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"error": "Translation error: Request to translation service failed: connection refused"})
    );
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn unparseable_reply_returns_fallback_plus_original_input() {
    let app = TestApp::new(
        MockTextProvider::replying("You probably have a cold. Rest and drink fluids."),
        MockTranslator::tagging(),
    );

    let (status, body) = app
        .post_json("/check_symptoms", &json!({"symptoms": "runny nose"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "possible_conditions": ["Unable to parse AI response properly"],
            "severity": "Unknown",
            "next_steps": "Please consult a healthcare professional for proper assessment.",
            "care_suggestions": ["Seek professional medical advice"],
            "disclaimer": STANDARD_DISCLAIMER,
            "original_input": "runny nose"
        })
    );
}

#[tokio::test]
async fn generation_failure_is_a_200_error_body() {
    let app = TestApp::new(
        MockTextProvider::failing("Gemini API error 403: key invalid"),
        MockTranslator::tagging(),
    );

    let (status, body) = app
        .post_json("/check_symptoms", &json!({"symptoms": "cough"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"error": "Error processing request: API error: Gemini API error 403: key invalid"})
    );
}

#[tokio::test]
async fn every_non_english_language_translates_before_prompting() {
    for lang in Language::all().iter().filter(|l| !l.is_default()) {
        let app = TestApp::new(
            MockTextProvider::replying(FLU_REPLY),
            MockTranslator::tagging(),
        );

        let (_, body) = app
            .post_json(
                "/check_symptoms",
                &json!({"symptoms": "pain", "language": lang.code}),
            )
            .await;

        let calls = app.translator.calls();
        assert_eq!(calls[0].source, lang.code);
        assert_eq!(calls[0].target, "en");

        let expected = format!("- Symptoms: [{}>en] pain\n", lang.code);
        assert!(app.provider.prompts()[0].contains(&expected), "{}", lang.code);

        assert_eq!(body["original_input"], "pain");
        assert_eq!(body["severity"], format!("[en>{}] Low", lang.code));
    }
}

#[tokio::test]
async fn outbound_translation_failure_discards_result() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::failing_on("hydrate", "rate limited"),
    );

    let (status, body) = app
        .post_json(
            "/check_symptoms",
            &json!({"symptoms": "জ্বর", "language": "bn"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Translation error: "));
}

#[tokio::test]
async fn missing_fields_default_to_empty_english_request() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::tagging(),
    );

    let (status, body) = app.post_json("/check_symptoms", &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_input"], "");
    assert_eq!(app.translator.call_count(), 0);
    assert!(app.provider.prompts()[0].contains("- Age: \n"));
}

#[tokio::test]
async fn non_json_body_is_rejected_before_the_pipeline() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::tagging(),
    );

    let request = Request::builder()
        .method("POST")
        .uri("/check_symptoms")
        .header("content-type", "application/json")
        .body(Body::from("symptoms=fever"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn json_array_reply_is_a_processing_error() {
    let app = TestApp::new(
        MockTextProvider::replying("```json\n[\"flu\", \"cold\"]\n```"),
        MockTranslator::tagging(),
    );

    let (status, body) = app
        .post_json("/check_symptoms", &json!({"symptoms": "fever"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"error": "Error processing request: expected a JSON object in the model reply, got array"})
    );
}

#[tokio::test]
async fn numeric_age_reaches_the_prompt() {
    let app = TestApp::new(
        MockTextProvider::replying(FLU_REPLY),
        MockTranslator::tagging(),
    );

    let (status, body) = app
        .post_json(
            "/check_symptoms",
            &json!({"symptoms": "cough", "age": 30, "gender": null}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["severity"], "Low");
    let prompt = &app.provider.prompts()[0];
    assert!(prompt.contains("- Age: 30\n"));
    assert!(prompt.contains("- Gender: \n"));
}
