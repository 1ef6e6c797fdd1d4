// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 메모리 저장소 기반 AppState/AuthService 셋업 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let ctx = setup_test();
//     // 테스트 코드...
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use chirpy::domains::auth::services::AuthService;
use chirpy::routes::build_app;
use chirpy::shared::config::Config;
use chirpy::shared::database::MemoryStore;
use chirpy::shared::services::{AppState, Stores};

// 테스트용 상수
pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";
pub const TEST_PASSWORD: &str = "04234";

pub fn test_config(platform: &str) -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        platform: platform.to_string(),
        polka_key: TEST_POLKA_KEY.to_string(),
        access_token_ttl: Duration::from_secs(60 * 60),
        refresh_token_ttl: Duration::from_secs(60 * 60 * 24),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

pub struct TestContext {
    pub store: MemoryStore,
    pub state: AppState,
}

impl TestContext {
    pub fn auth(&self) -> &AuthService {
        &self.state.auth_state.auth_service
    }

    pub fn app(&self) -> Router {
        build_app(self.state.clone())
    }
}

/// 테스트 전 초기화 (PLATFORM=dev)
pub fn setup_test() -> TestContext {
    setup_test_with_platform("dev")
}

pub fn setup_test_with_platform(platform: &str) -> TestContext {
    let store = MemoryStore::new();
    let state = AppState::new(&test_config(platform), Stores::memory(store.clone()))
        .expect("Failed to build AppState");
    TestContext { store, state }
}

/// 요청 한 건을 라우터에 보내고 (상태 코드, JSON 본문) 반환
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    dispatch(app, request).await
}

/// 본문을 그대로 (JSON 직렬화 없이) 보내는 요청
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }
    let request = builder.body(Body::from(body)).expect("Failed to build request");

    dispatch(app, request).await
}

async fn dispatch(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}
