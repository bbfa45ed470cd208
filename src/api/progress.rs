use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::auth::{jwt_auth_middleware, AuthService, MemberSession};
use crate::models::{ProgressRecord, RecordProgressRequest};
use crate::services::{GymError, GymService};

pub fn progress_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", get(my_progress).post(record_progress))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(gym)
}

/// Record a progress entry for the authenticated member
#[tracing::instrument(skip(gym, session, request))]
async fn record_progress(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Json(request): Json<RecordProgressRequest>,
) -> Result<(StatusCode, Json<ProgressRecord>), GymError> {
    let record = gym.record_progress(
        session.member_id,
        request.weight,
        request.repetitions,
        request.duration_seconds,
    )?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// The authenticated member's progress history, oldest first
async fn my_progress(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
) -> Json<Vec<ProgressRecord>> {
    Json(gym.list_progress(session.member_id))
}
