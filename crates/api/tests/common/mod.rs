#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use kansai_api::auth::password::hash_password;
use kansai_api::config::{AdminConfig, ServerConfig, SessionConfig};
use kansai_api::router::build_app_router;
use kansai_api::state::AppState;
use kansai_db::store::{MemorySessionStore, MemoryWordStore};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";

/// Argon2 is slow in debug builds; hash the test password once per binary.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
        .clone()
}

/// Build a test `ServerConfig` with safe defaults and an in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_path: None,
        admin: AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password_hash: admin_password_hash(),
        },
        session: SessionConfig::default(),
    }
}

/// Build the full application router over empty in-memory stores.
///
/// Clone the returned router to send several requests against the same
/// state.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::new(
        config.clone(),
        Arc::new(MemoryWordStore::new()),
        Arc::new(MemorySessionStore::new()),
    );
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn request(
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, request(Method::GET, uri, Some(cookie), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    send(app, request(Method::POST, uri, Some(cookie), Some(body))).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    send(app, request(Method::POST, uri, cookie, None)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::PUT, uri, None, Some(body))).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response {
    send(app, request(Method::PUT, uri, Some(cookie), Some(body))).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, request(Method::DELETE, uri, None, None)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, request(Method::DELETE, uri, Some(cookie), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The raw `Set-Cookie` header of a response.
pub fn set_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response must set a cookie")
        .to_str()
        .unwrap()
        .to_string()
}

/// The `name=value` pair of a `Set-Cookie` header, ready to send back.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap().trim().to_string()
}

/// Log in as the test admin and return the `Cookie` header value.
pub async fn login_cookie(app: Router) -> String {
    let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    cookie_pair(&set_cookie(&response))
}

/// A complete word payload.
pub fn word_body(word: &str) -> serde_json::Value {
    serde_json::json!({
        "word": word,
        "accent": "て↗す↘と",
        "pronunciation": "テ↗ス↘ト",
        "example": "「テストやで」",
    })
}

/// `/api/words/{word}` with the headword percent-encoded.
pub fn word_uri(word: &str) -> String {
    let mut uri = String::from("/api/words/");
    for byte in word.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            uri.push(byte as char);
        } else {
            uri.push_str(&format!("%{byte:02X}"));
        }
    }
    uri
}
