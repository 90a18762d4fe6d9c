//! Reservation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_auth::rbac::Permission;
use campus_core::types::id::ReservationId;
use campus_entity::reservation::ReservationDetail;

use crate::dto::request::MakeReservationRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::middleware::rbac::require;
use crate::state::AppState;

/// POST /api/reservations
pub async fn make_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<MakeReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationDetail>>), ApiError> {
    require(&state, &auth, Permission::ReservationMake)?;

    let reservation = state
        .reservation_service
        .make_reservation(&auth, req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reservation))))
}

/// DELETE /api/reservations/{id}
pub async fn cancel_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ReservationId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require(&state, &auth, Permission::ReservationCancel)?;

    let message = state
        .reservation_service
        .cancel_reservation(&auth, id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse { message })))
}

/// GET /api/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ReservationDetail>>>, ApiError> {
    require(&state, &auth, Permission::ReservationView)?;
    let reservations = state.reservation_service.get_all_reservations().await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /api/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<ReservationId>,
) -> Result<Json<ApiResponse<ReservationDetail>>, ApiError> {
    require(&state, &auth, Permission::ReservationView)?;
    let reservation = state.reservation_service.get_reservation_by_id(id).await?;
    Ok(Json(ApiResponse::ok(reservation)))
}
