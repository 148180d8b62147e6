//! HTTP-level integration tests for login, logout, and auth status.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, cookie_pair, get, get_with_cookie, login_cookie, post_json,
    post_empty_with_cookie, post_json_with_cookie, set_cookie, word_body, ADMIN_PASSWORD,
    ADMIN_USERNAME,
};

fn credentials(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_sets_http_only_cookie() {
    let app = build_test_app();
    let response = post_json(app, "/api/login", credentials(ADMIN_USERNAME, ADMIN_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("kansai_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "success": true, "username": "admin" }));
}

#[tokio::test]
async fn login_wrong_password_returns_401() {
    let app = build_test_app();
    let response = post_json(app.clone(), "/api/login", credentials(ADMIN_USERNAME, "wrong")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get("set-cookie").is_none());

    let status = body_json(get(app, "/api/auth/status").await).await;
    assert_eq!(status["isAuthenticated"], false);
}

#[tokio::test]
async fn login_unknown_user_returns_401() {
    let app = build_test_app();
    let response = post_json(app, "/api/login", credentials("ghost", ADMIN_PASSWORD)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid username or password");
}

#[tokio::test]
async fn login_missing_fields_returns_400() {
    let app = build_test_app();

    let response = post_json(app.clone(), "/api/login", serde_json::json!({ "username": "admin" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/api/login", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_is_anonymous_without_cookie() {
    let app = build_test_app();
    let response = get(app, "/api/auth/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "isAuthenticated": false, "username": null })
    );
}

#[tokio::test]
async fn status_reflects_login() {
    let app = build_test_app();
    let cookie = login_cookie(app.clone()).await;

    let response = get_with_cookie(app, "/api/auth/status", &cookie).await;
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "isAuthenticated": true, "username": "admin" })
    );
}

#[tokio::test]
async fn forged_cookie_is_anonymous() {
    let app = build_test_app();
    let response = get_with_cookie(app.clone(), "/api/auth/status", "kansai_session=forged").await;
    assert_eq!(body_json(response).await["isAuthenticated"], false);

    let response =
        post_json_with_cookie(app, "/api/words", "kansai_session=forged", word_body("テスト")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_ends_session_and_clears_cookie() {
    let app = build_test_app();
    let cookie = login_cookie(app.clone()).await;

    let response = post_empty_with_cookie(app.clone(), "/api/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookie(&response).contains("Max-Age=0"));
    assert_eq!(body_json(response).await, serde_json::json!({ "success": true }));

    let status = body_json(get_with_cookie(app.clone(), "/api/auth/status", &cookie).await).await;
    assert_eq!(status["isAuthenticated"], false);

    let response = post_json_with_cookie(app, "/api/words", &cookie, word_body("テスト")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_when_anonymous_is_200() {
    let app = build_test_app();

    let response = post_empty_with_cookie(app.clone(), "/api/logout", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_empty_with_cookie(app, "/api/logout", Some("kansai_session=stale")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn second_login_replaces_first_session() {
    let app = build_test_app();
    let first = login_cookie(app.clone()).await;

    let response = post_json_with_cookie(
        app.clone(),
        "/api/login",
        &first,
        credentials(ADMIN_USERNAME, ADMIN_PASSWORD),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = cookie_pair(&set_cookie(&response));
    assert_ne!(first, second);

    let status = body_json(get_with_cookie(app.clone(), "/api/auth/status", &first).await).await;
    assert_eq!(status["isAuthenticated"], false);

    let status = body_json(get_with_cookie(app, "/api/auth/status", &second).await).await;
    assert_eq!(status["isAuthenticated"], true);
}
