//! How each `AppError` renders on the wire, checked through `IntoResponse`
//! without a router.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use kansai_api::error::AppError;
use kansai_core::error::CoreError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn client_errors_keep_their_message() {
    let cases = [
        (
            AppError::Core(CoreError::not_found("Word", "めっちゃ")),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Word 'めっちゃ' not found",
        ),
        (
            AppError::Core(CoreError::Validation("All fields are required".into())),
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "All fields are required",
        ),
        (
            AppError::BadRequest("Invalid word id 'abc'".into()),
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            "Invalid word id 'abc'",
        ),
        (
            AppError::Core(CoreError::Conflict("Word 'あかん' already exists".into())),
            StatusCode::CONFLICT,
            "CONFLICT",
            "Word 'あかん' already exists",
        ),
        (
            AppError::Core(CoreError::Unauthorized("Authentication required".into())),
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Authentication required",
        ),
    ];

    for (err, expected_status, expected_code, expected_message) in cases {
        let (status, body) = render(err).await;
        assert_eq!(status, expected_status, "{expected_code}");
        assert_eq!(body["code"], expected_code);
        assert_eq!(body["error"], expected_message);
    }
}

#[tokio::test]
async fn server_errors_hide_their_detail() {
    for err in [
        AppError::InternalError("connection string leaked".into()),
        AppError::Core(CoreError::Internal("relation \"words\" does not exist".into())),
    ] {
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");
        assert!(!body.to_string().contains("words"));
    }
}
