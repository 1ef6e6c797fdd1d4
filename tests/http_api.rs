// =====================================================
// HTTP API 통합 테스트 (라우터 + 추출기 + 에러 매핑)
// =====================================================

mod common;
use common::*;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use chirpy::domains::auth::services::issue_access_token;
use serde_json::{json, Value};
use uuid::Uuid;

async fn register_and_login(ctx: &TestContext, email: &str) -> (String, String, String) {
    let (status, user) = send(
        ctx.app(),
        Method::POST,
        "/api/users",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("hashed_password").is_none());

    let (status, login) = send(
        ctx.app(),
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": email, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    (
        login["id"].as_str().unwrap().to_string(),
        login["token"].as_str().unwrap().to_string(),
        login["refresh_token"].as_str().unwrap().to_string(),
    )
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[tokio::test]
async fn test_healthz() {
    let ctx = setup_test();
    let (status, body) = send(ctx.app(), Method::GET, "/api/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn test_login_response_shape() {
    let ctx = setup_test();
    let (id, token, refresh_token) = register_and_login(&ctx, "walt@breakingbad.com").await;

    let (status, me) = send(ctx.app(), Method::GET, "/api/users/me", Some(&bearer(&token)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], id);
    assert_eq!(me["email"], "walt@breakingbad.com");
    assert_eq!(me["is_chirpy_red"], false);
    assert_eq!(refresh_token.len(), 64);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let ctx = setup_test();
    register_and_login(&ctx, "walt@breakingbad.com").await;

    let (status, body) = send(
        ctx.app(),
        Method::POST,
        "/api/login",
        None,
        Some(json!({ "email": "walt@breakingbad.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "incorrect email or password");
}

#[tokio::test]
async fn test_refresh_and_revoke_over_http() {
    let ctx = setup_test();
    let (_, _, refresh_token) = register_and_login(&ctx, "walt@breakingbad.com").await;

    let (status, body) = send(ctx.app(), Method::POST, "/api/refresh", Some(&bearer(&refresh_token)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());

    let (status, _) = send(ctx.app(), Method::POST, "/api/revoke", Some(&bearer(&refresh_token)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // 두 번째 무효화도 성공
    let (status, _) = send(ctx.app(), Method::POST, "/api/revoke", Some(&bearer(&refresh_token)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(ctx.app(), Method::POST, "/api/refresh", Some(&bearer(&refresh_token)), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_authorization_headers() {
    let ctx = setup_test();
    for header in [None, Some("Bearer"), Some("Bearer  x"), Some("Token abc"), Some("Bearer garbage")] {
        let (status, body) = send(ctx.app(), Method::GET, "/api/users/me", header, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{header:?}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_rejected_access_tokens_share_one_body() {
    let ctx = setup_test();
    let (id, _, _) = register_and_login(&ctx, "walt@breakingbad.com").await;
    let user_id = Uuid::parse_str(&id).unwrap();

    let forged = issue_access_token(user_id, "some-other-secret", Duration::from_secs(3600)).unwrap();
    let expired = issue_access_token(user_id, TEST_JWT_SECRET, Duration::from_nanos(1)).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    for token in [forged.as_str(), expired.as_str(), "garbage"] {
        let (status, body) = send(ctx.app(), Method::GET, "/api/users/me", Some(&bearer(token)), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{token}");
        assert_eq!(body, json!({ "error": "invalid token" }), "{token}");
    }
}

#[tokio::test]
async fn test_rejected_refresh_tokens_share_one_body() {
    let ctx = setup_test();
    let (_, _, refresh_token) = register_and_login(&ctx, "walt@breakingbad.com").await;
    let (status, _) = send(ctx.app(), Method::POST, "/api/revoke", Some(&bearer(&refresh_token)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let unknown = "0".repeat(64);
    for token in [refresh_token.as_str(), unknown.as_str()] {
        let (status, body) = send(ctx.app(), Method::POST, "/api/refresh", Some(&bearer(token)), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "invalid refresh token" }));
    }
}

#[tokio::test]
async fn test_malformed_json_body_is_json_error() {
    let ctx = setup_test();

    let (status, body) = send_raw(ctx.app(), Method::POST, "/api/login", Some("application/json"), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));

    // 필드 타입 불일치도 같은 메시지
    let (status, body) = send_raw(ctx.app(), Method::POST, "/api/users", Some("application/json"), r#"{"email": 42}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "Invalid request body" }));

    let (status, body) = send_raw(ctx.app(), Method::POST, "/api/login", None, "{}").await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "Expected Content-Type: application/json");
}

#[tokio::test]
async fn test_bad_query_string_is_json_error() {
    let ctx = setup_test();
    let (status, body) = send(ctx.app(), Method::GET, "/api/chirps?sort=sideways", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid query parameters" }));
}

#[tokio::test]
async fn test_chirp_lifecycle_and_ownership() {
    let ctx = setup_test();
    let (walt_id, walt_token, _) = register_and_login(&ctx, "walt@breakingbad.com").await;
    let (_, saul_token, _) = register_and_login(&ctx, "saul@bettercall.com").await;

    let (status, chirp) = send(
        ctx.app(),
        Method::POST,
        "/api/chirps",
        Some(&bearer(&walt_token)),
        Some(json!({ "body": "I'm the one who knocks!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(chirp["user_id"], walt_id);
    let chirp_uri = format!("/api/chirps/{}", chirp["id"].as_str().unwrap());

    let (status, _) = send(ctx.app(), Method::GET, &chirp_uri, None, None).await;
    assert_eq!(status, StatusCode::OK);

    // 다른 사용자 → 403
    let (status, _) = send(ctx.app(), Method::DELETE, &chirp_uri, Some(&bearer(&saul_token)), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 작성자 → 204
    let (status, _) = send(ctx.app(), Method::DELETE, &chirp_uri, Some(&bearer(&walt_token)), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // 삭제 후 → 404
    let (status, _) = send(ctx.app(), Method::DELETE, &chirp_uri, Some(&bearer(&walt_token)), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chirp_validation() {
    let ctx = setup_test();
    let (_, token, _) = register_and_login(&ctx, "walt@breakingbad.com").await;

    let (status, body) = send(
        ctx.app(),
        Method::POST,
        "/api/chirps",
        Some(&bearer(&token)),
        Some(json!({ "body": "a".repeat(141) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Chirp is too long");

    let (status, _) = send(
        ctx.app(),
        Method::POST,
        "/api/chirps",
        None,
        Some(json!({ "body": "no token" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_chirps_sorted_desc() {
    let ctx = setup_test();
    let (walt_id, token, _) = register_and_login(&ctx, "walt@breakingbad.com").await;
    for body in ["one", "two", "three"] {
        send(ctx.app(), Method::POST, "/api/chirps", Some(&bearer(&token)), Some(json!({ "body": body }))).await;
    }

    let uri = format!("/api/chirps?author_id={walt_id}&sort=desc");
    let (status, list) = send(ctx.app(), Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    let bodies: Vec<&str> = list.as_array().unwrap().iter().map(|c| c["body"].as_str().unwrap()).collect();
    assert_eq!(bodies, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn test_admin_reset_is_gated() {
    let prod = setup_test_with_platform("prod");
    register_and_login(&prod, "walt@breakingbad.com").await;
    let (status, _) = send(prod.app(), Method::POST, "/admin/reset", None, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let dev = setup_test();
    register_and_login(&dev, "walt@breakingbad.com").await;
    let (status, body) = send(dev.app(), Method::POST, "/admin/reset", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "All 1 users deleted");
}

#[tokio::test]
async fn test_polka_webhook() {
    let ctx = setup_test();
    let (id, token, _) = register_and_login(&ctx, "walt@breakingbad.com").await;
    let upgrade = json!({ "event": "user.upgraded", "data": { "user_id": id } });

    let (status, _) = send(ctx.app(), Method::POST, "/api/polka/webhooks", None, Some(upgrade.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        ctx.app(),
        Method::POST,
        "/api/polka/webhooks",
        Some("ApiKey wrong-key"),
        Some(upgrade.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let api_key = format!("ApiKey {TEST_POLKA_KEY}");
    let (status, _) = send(
        ctx.app(),
        Method::POST,
        "/api/polka/webhooks",
        Some(&api_key),
        Some(json!({ "event": "user.payment_failed", "data": { "user_id": id } })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(ctx.app(), Method::POST, "/api/polka/webhooks", Some(&api_key), Some(upgrade)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, me) = send(ctx.app(), Method::GET, "/api/users/me", Some(&bearer(&token)), None).await;
    assert_eq!(me["is_chirpy_red"], true);

    let (status, _) = send(
        ctx.app(),
        Method::POST,
        "/api/polka/webhooks",
        Some(&api_key),
        Some(json!({ "event": "user.upgraded", "data": { "user_id": "3311741c-680c-4546-99f3-fc9efac2036c" } })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
