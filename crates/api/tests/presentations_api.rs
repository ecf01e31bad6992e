//! HTTP-level tests for presentations, both top-level and conference-scoped.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use conference_api::router::App;
use serde_json::{json, Value};

fn presentation_body(title: &str) -> Value {
    json!({
        "presenter_name": "Ferris",
        "presenter_email": "ferris@example.com",
        "company_name": "Crustacean Inc",
        "title": title,
        "synopsis": "Ownership in practice",
    })
}

async fn create_presentation(app: &App, conference: i64, title: &str) -> Value {
    let response = post_json(
        app,
        &format!("/api/v1/conferences/{conference}/presentations"),
        presentation_body(title),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_defaults_status_to_submitted() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;

    let json = create_presentation(&app, conference, "Borrowing").await;
    assert_eq!(json["presenter_name"], "Ferris");
    assert_eq!(json["presenter_email"], "ferris@example.com");
    assert_eq!(json["company_name"], "Crustacean Inc");
    assert_eq!(json["title"], "Borrowing");
    assert_eq!(json["synopsis"], "Ownership in practice");
    assert_eq!(json["status"], "SUBMITTED");
    assert_eq!(json["conference"]["id"], conference);
    assert_eq!(json["conference"]["name"], "RustConf");
    assert_eq!(json["href"], "/api/v1/presentations/1");
}

#[tokio::test]
async fn explicit_status_is_normalized() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let mut body = presentation_body("Lifetimes");
    body["status"] = json!("approved");
    body["conference"] = json!(conference);

    let response = post_json(&app, "/api/v1/presentations", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["status"], "APPROVED");
}

#[tokio::test]
async fn unknown_status_is_a_validation_error() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let mut body = presentation_body("Lifetimes");
    body["status"] = json!("maybe");

    let response = post_json(
        &app,
        &format!("/api/v1/conferences/{conference}/presentations"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_conference_is_invalid_reference() {
    let app = common::build_test_app();
    let mut body = presentation_body("Orphan");
    body["conference"] = json!(12);

    let response = post_json(&app, "/api/v1/presentations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid conference id");

    let listing = body_json(get(&app, "/api/v1/presentations").await).await;
    assert_eq!(listing, json!({"presentations": []}));
}

#[tokio::test]
async fn list_projection_includes_status() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    create_presentation(&app, conference, "Borrowing").await;

    let json = body_json(get(&app, &format!("/api/v1/conferences/{conference}/presentations")).await).await;
    assert_eq!(
        json,
        json!({
            "presentations": [
                {
                    "id": 1,
                    "title": "Borrowing",
                    "status": "SUBMITTED",
                    "href": "/api/v1/presentations/1",
                },
            ]
        })
    );
}

#[tokio::test]
async fn query_filter_scopes_top_level_listing() {
    let app = common::build_test_app();
    let first = common::create_conference(&app, "RustConf").await;
    let second = common::create_conference(&app, "EuroRust").await;
    create_presentation(&app, first, "Borrowing").await;
    create_presentation(&app, second, "Traits").await;

    let json = body_json(get(&app, &format!("/api/v1/presentations?conference={second}")).await).await;
    let presentations = json["presentations"].as_array().unwrap();
    assert_eq!(presentations.len(), 1);
    assert_eq!(presentations[0]["title"], "Traits");
}

#[tokio::test]
async fn status_can_be_changed_by_update() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let id = create_presentation(&app, conference, "Borrowing").await["id"]
        .as_i64()
        .unwrap();

    let response = put_json(
        &app,
        &format!("/api/v1/presentations/{id}"),
        json!({"status": "Rejected"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "REJECTED");
    assert_eq!(json["title"], "Borrowing");
    assert_eq!(json["conference"]["id"], conference);
}

#[tokio::test]
async fn update_null_company_name_clears_it() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let id = create_presentation(&app, conference, "Borrowing").await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/v1/presentations/{id}");

    let response = put_json(&app, &uri, json!({"company_name": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["company_name"].is_null());
    assert_eq!(json["presenter_name"], "Ferris");

    let response = put_json(&app, &uri, json!({"company_name": "Ferrous Systems"})).await;
    assert_eq!(body_json(response).await["company_name"], "Ferrous Systems");
}

#[tokio::test]
async fn update_with_unknown_conference_changes_nothing() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let id = create_presentation(&app, conference, "Borrowing").await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/v1/presentations/{id}");

    let response = put_json(&app, &uri, json!({"title": "Moved", "conference": 404})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");

    assert_eq!(body_json(get(&app, &uri).await).await["title"], "Borrowing");
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = common::build_test_app();
    let conference = common::create_conference(&app, "RustConf").await;
    let id = create_presentation(&app, conference, "Borrowing").await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/v1/presentations/{id}");

    assert_eq!(body_json(delete(&app, &uri).await).await, json!({"deleted": true}));
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(delete(&app, &uri).await).await, json!({"deleted": false}));
}
