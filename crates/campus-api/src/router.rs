//! Route definitions for the campus HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(reservation_routes())
        .merge(resource_routes())
        .merge(resource_type_routes())
        .merge(lesson_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::timeout::request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Reservation workflow
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(handlers::reservation::list_reservations)
                .post(handlers::reservation::make_reservation),
        )
        .route(
            "/reservations/{id}",
            get(handlers::reservation::get_reservation)
                .delete(handlers::reservation::cancel_reservation),
        )
}

/// Resource lookup and administration
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/resources",
            get(handlers::resource::list_resources).post(handlers::resource::create_resource),
        )
        .route(
            "/resources/{id}",
            get(handlers::resource::get_resource)
                .put(handlers::resource::update_resource)
                .delete(handlers::resource::delete_resource),
        )
}

fn resource_type_routes() -> Router<AppState> {
    Router::new().route(
        "/resource-types",
        get(handlers::resource_type::list_resource_types)
            .post(handlers::resource_type::create_resource_type),
    )
}

fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(handlers::lesson::list_lessons))
        .route("/lessons/{id}", get(handlers::lesson::get_lesson))
}

/// Liveness and database probes, no auth
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/db", get(handlers::health::health_db))
}
