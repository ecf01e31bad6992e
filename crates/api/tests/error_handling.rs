//! Tests for `AppError` to HTTP response mapping and request rejections.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use conference_api::error::AppError;
use conference_core::error::CoreError;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Location",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Location with id 42 not found");
}

#[tokio::test]
async fn invalid_reference_returns_400_with_reference_message() {
    let err = AppError::Core(CoreError::invalid_id("conference"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REFERENCE");
    assert_eq!(json["message"], "Invalid conference id");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "name must not be empty");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate abbreviation".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let err = AppError::InternalError("Attendee 3 references missing conference 9".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_json_body_returns_400() {
    let app = common::build_test_app();
    let response = common::post_raw(&app, "/api/v1/locations", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn missing_required_field_returns_400() {
    let app = common::build_test_app();
    let response = common::post_json(
        &app,
        "/api/v1/locations",
        serde_json::json!({"name": "Hall A", "state": "IL"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_path_id_returns_json_400() {
    let app = common::build_test_app();

    for uri in ["/api/v1/locations/abc", "/api/v1/conferences/abc/attendees"] {
        let response = common::get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = common::body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["message"].is_string());
    }

    let response = common::delete(&app, "/api/v1/presentations/1.5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_conference_filter_returns_json_400() {
    let app = common::build_test_app();

    for uri in [
        "/api/v1/attendees?conference=abc",
        "/api/v1/presentations?conference=abc",
    ] {
        let response = common::get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = common::body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["message"].is_string());
    }
}
