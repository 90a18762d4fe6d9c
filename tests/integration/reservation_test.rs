//! Integration tests for the reservation workflow against PostgreSQL.

mod helpers;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use campus_core::error::ErrorKind;
use campus_core::types::id::UserId;
use campus_database::repositories::PgReservationStore;
use campus_entity::user::Role;
use campus_service::{MakeReservation, RequestContext, ReservationService};

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_make_reservation_takes_resource() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({
                "lesson_id": lesson.get(),
                "resource_id": resource.get(),
                "observation": "Room 101",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["observation"], "Room 101");
    assert_eq!(data["lesson"]["id"], lesson.get());
    assert_eq!(data["resource"]["id"], resource.get());
    assert_eq!(data["resource"]["status"], "taken");

    assert_eq!(app.resource_status(resource).await, "taken");
    assert_eq!(app.reservations_for(resource).await, 1);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_second_reservation_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;
    let body = json!({ "lesson_id": lesson.get(), "resource_id": resource.get() });

    let first = app
        .request("POST", "/api/reservations", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/reservations", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Resource is not available");
    assert_eq!(app.reservations_for(resource).await, 1);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_maintenance_resource_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("admin").await;
    let resource = app.create_resource("maintenance").await;
    let lesson = app.create_lesson().await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": resource.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.resource_status(resource).await, "maintenance");
    assert_eq!(app.reservations_for(resource).await, 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_lesson_is_not_found_and_leaves_resource_available() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let resource = app.create_resource("available").await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": i32::MAX, "resource_id": resource.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.resource_status(resource).await, "available");
    assert_eq!(app.reservations_for(resource).await, 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unknown_resource_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let lesson = app.create_lesson().await;

    let response = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": i32::MAX })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_cancel_frees_resource() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for("professor").await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;

    let made = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": resource.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(made.status, StatusCode::CREATED);
    let id = made.body["data"]["id"].as_i64().expect("reservation id");

    let cancelled = app
        .request("DELETE", &format!("/api/reservations/{id}"), None, Some(&token))
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(
        cancelled.body["data"]["message"],
        format!("Reservation {id} cancelled")
    );
    assert_eq!(app.resource_status(resource).await, "available");
    assert_eq!(app.reservations_for(resource).await, 0);

    let again = app
        .request("DELETE", &format!("/api/reservations/{id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let remade = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": resource.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(remade.status, StatusCode::CREATED);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_coordinator_can_view_but_not_cancel() {
    let app = helpers::TestApp::new().await;
    let professor = app.token_for("professor").await;
    let coordinator = app.token_for("coordenador").await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;

    let made = app
        .request(
            "POST",
            "/api/reservations",
            Some(json!({ "lesson_id": lesson.get(), "resource_id": resource.get() })),
            Some(&professor),
        )
        .await;
    let id = made.body["data"]["id"].as_i64().expect("reservation id");

    let viewed = app
        .request("GET", &format!("/api/reservations/{id}"), None, Some(&coordinator))
        .await;
    assert_eq!(viewed.status, StatusCode::OK);
    assert_eq!(viewed.body["data"]["resource"]["status"], "taken");

    let cancelled = app
        .request("DELETE", &format!("/api/reservations/{id}"), None, Some(&coordinator))
        .await;
    assert_eq!(cancelled.status, StatusCode::FORBIDDEN);
    assert_eq!(app.resource_status(resource).await, "taken");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_reservations_have_one_winner() {
    let app = helpers::TestApp::new().await;
    let resource = app.create_resource("available").await;
    let lesson = app.create_lesson().await;

    let store = Arc::new(PgReservationStore::new(app.pool().clone()));
    let service = ReservationService::new(store);
    let ctx = RequestContext::new(UserId::new(1), Role::Professor);

    let attempts = (0..10).map(|_| {
        let service = service.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move {
            service
                .make_reservation(
                    &ctx,
                    MakeReservation {
                        lesson_id: lesson,
                        resource_id: resource,
                        observation: None,
                    },
                )
                .await
        })
    });

    let results = futures::future::join_all(attempts).await;

    let mut won = 0;
    for result in results {
        match result.expect("task panicked") {
            Ok(_) => won += 1,
            Err(e) => assert_eq!(e.kind, ErrorKind::Conflict, "unexpected error: {e}"),
        }
    }

    assert_eq!(won, 1);
    assert_eq!(app.reservations_for(resource).await, 1);
    assert_eq!(app.resource_status(resource).await, "taken");
}
