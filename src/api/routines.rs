use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use uuid::Uuid;

use crate::auth::{
    extract_member_session, jwt_auth_middleware, AuthError, AuthService, MemberSession,
    MessageResponse,
};
use crate::models::{AddExerciseRequest, CreateRoutineRequest, Routine};
use crate::services::{GymError, GymService};

/// Routine routes: the catalogue is public, "/me" and assignment act on the
/// authenticated member.
pub fn routine_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", get(list_routines).post(create_routine))
        .route("/:routine_id/exercises", post(add_exercise))
        .route(
            "/me",
            get(my_routines).route_layer(middleware::from_fn_with_state(
                auth_service.clone(),
                jwt_auth_middleware,
            )),
        )
        .route(
            "/:routine_id/assign",
            post(assign_routine).route_layer(middleware::from_fn_with_state(
                auth_service,
                jwt_auth_middleware,
            )),
        )
        .with_state(gym)
}

/// Create a new routine
#[tracing::instrument(skip(gym, request))]
async fn create_routine(
    State(gym): State<GymService>,
    Json(request): Json<CreateRoutineRequest>,
) -> Result<(StatusCode, Json<Routine>), GymError> {
    let routine = gym.create_routine(
        &request.name,
        request.duration_minutes,
        &request.difficulty,
    )?;
    Ok((StatusCode::CREATED, Json(routine)))
}

async fn list_routines(State(gym): State<GymService>) -> Json<Vec<Routine>> {
    Json(gym.list_routines())
}

/// Append an exercise to an existing routine
#[tracing::instrument(skip(gym, request))]
async fn add_exercise(
    State(gym): State<GymService>,
    Path(routine_id): Path<Uuid>,
    Json(request): Json<AddExerciseRequest>,
) -> Result<(StatusCode, Json<Routine>), GymError> {
    let routine = gym.add_exercise(
        routine_id,
        &request.name,
        request.repetitions,
        request.series,
    )?;
    Ok((StatusCode::CREATED, Json(routine)))
}

/// Routines assigned to the authenticated member
async fn my_routines(
    State(gym): State<GymService>,
    request: Request,
) -> Result<Json<Vec<Routine>>, AuthError> {
    let session = extract_member_session(&request)?;
    Ok(Json(gym.routines_for_member(session.member_id)))
}

/// Assign a routine to the authenticated member's plan
#[tracing::instrument(skip(gym, session))]
async fn assign_routine(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Path(routine_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, GymError> {
    if !gym.assign_routine(session.member_id, routine_id) {
        return Err(GymError::NotFound("routine"));
    }
    Ok(Json(MessageResponse {
        message: "Routine added to your training plan".to_string(),
    }))
}
