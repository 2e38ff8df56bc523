#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use symptom_service::config::SymptomConfig;
use symptom_service::services::providers::mock::MockTextProvider;
use symptom_service::services::translation::mock::MockTranslator;
use symptom_service::services::SymptomChecker;
use symptom_service::startup::{build_router, AppState};
use tower::util::ServiceExt;

pub const FLU_REPLY: &str = "Here is my assessment:\n```json\n{\"possible_conditions\":[\"flu\"],\"severity\":\"Low\",\"next_steps\":\"rest\",\"care_suggestions\":[\"hydrate\"]}\n```";

pub fn test_config() -> SymptomConfig {
    let common = CoreConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        log_level: "debug".to_string(),
    };
    SymptomConfig::from_lookup(common, |_| None).expect("Failed to build test config")
}

/// Router wired to mocks, with handles to inspect them.
pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockTextProvider>,
    pub translator: Arc<MockTranslator>,
}

impl TestApp {
    pub fn new(provider: MockTextProvider, translator: MockTranslator) -> Self {
        let provider = Arc::new(provider);
        let translator = Arc::new(translator);
        let state = AppState {
            checker: SymptomChecker::new(provider.clone(), translator.clone()),
        };

        Self {
            router: build_router(state),
            provider,
            translator,
        }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}
