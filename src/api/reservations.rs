use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{delete, post},
    Extension, Router,
};
use uuid::Uuid;

use crate::auth::{jwt_auth_middleware, AuthService, MemberSession, MessageResponse};
use crate::models::ReservationRequest;
use crate::services::{GymError, GymService};

pub fn reservation_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", post(reserve_class))
        .route("/:class_id", delete(cancel_reservation))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(gym)
}

/// Reserve a spot in a class for the authenticated member
#[tracing::instrument(skip(gym, session, request))]
async fn reserve_class(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Json(request): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), GymError> {
    if !gym.reserve_class(session.member_id, request.class_id) {
        return Err(GymError::InvalidInput(
            "could not reserve: class unknown or full".to_string(),
        ));
    }
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Reservation confirmed".to_string(),
        }),
    ))
}

/// Cancel one of the authenticated member's reservations
#[tracing::instrument(skip(gym, session))]
async fn cancel_reservation(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Path(class_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, GymError> {
    if !gym.cancel_reservation(session.member_id, class_id) {
        return Err(GymError::NotFound("reservation"));
    }
    Ok(Json(MessageResponse {
        message: "Reservation cancelled".to_string(),
    }))
}
