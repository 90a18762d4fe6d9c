//! Integration tests for resource administration against PostgreSQL.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_creates_and_lists_resource() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let type_id = app.create_resource_type().await;

    let created = app
        .request(
            "POST",
            "/api/resources",
            Some(json!({ "description": "  Laptop cart  ", "resource_type_id": type_id.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert_eq!(created.body["data"]["description"], "Laptop cart");
    assert_eq!(created.body["data"]["status"], "available");
    assert_eq!(created.body["data"]["resource_type"]["id"], type_id.get());

    let id = created.body["data"]["id"].as_i64().expect("resource id");
    let listed = app.request("GET", "/api/resources", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let found = listed.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .any(|r| r["id"].as_i64() == Some(id));
    assert!(found);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_rejects_taken_status() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let type_id = app.create_resource_type().await;

    let response = app
        .request(
            "POST",
            "/api/resources",
            Some(json!({
                "description": "Projector",
                "resource_type_id": type_id.get(),
                "status": "taken",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_maintenance_round_trip() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let resource = app.create_resource("available").await;
    let path = format!("/api/resources/{}", resource.get());

    let down = app
        .request("PUT", &path, Some(json!({ "status": "maintenance" })), Some(&token))
        .await;
    assert_eq!(down.status, StatusCode::OK);
    assert_eq!(app.resource_status(resource).await, "maintenance");

    let up = app
        .request("PUT", &path, Some(json!({ "status": "available" })), Some(&token))
        .await;
    assert_eq!(up.status, StatusCode::OK);
    assert_eq!(app.resource_status(resource).await, "available");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_reserved_resource_status_is_locked() {
    let app = helpers::TestApp::new().await;
    let admin = app.token_for("admin").await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;

    let made = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": resource.get() })),
            Some(&admin),
        )
        .await;
    assert_eq!(made.status, StatusCode::CREATED);

    let path = format!("/api/resources/{}", resource.get());
    let update = app
        .request("PUT", &path, Some(json!({ "status": "maintenance" })), Some(&admin))
        .await;
    assert_eq!(update.status, StatusCode::CONFLICT);

    let delete = app.request("DELETE", &path, None, Some(&admin)).await;
    assert_eq!(delete.status, StatusCode::CONFLICT);
    assert_eq!(app.resource_status(resource).await, "taken");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_unreserved_resource() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let resource = app.create_resource("maintenance").await;
    let path = format!("/api/resources/{}", resource.get());

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_professor_cannot_manage_resources() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let resource = app.create_resource("available").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/resources/{}", resource.get()),
            Some(json!({ "status": "maintenance" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.resource_status(resource).await, "available");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_resource_type_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let name = format!("Speaker {}", uuid::Uuid::new_v4());

    let first = app
        .request("POST", "/api/resource-types", Some(json!({ "name": name })), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/resource-types", Some(json!({ "name": name })), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}
