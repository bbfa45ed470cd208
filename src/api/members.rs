use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::auth::{jwt_auth_middleware, AuthService, MemberSession};
use crate::models::{MemberResponse, RegisterMemberRequest};
use crate::services::{GymError, GymService};

/// Member routes: registration is public, listing and the profile view
/// require a session.
pub fn member_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", post(register_member))
        .route(
            "/",
            get(list_members).route_layer(middleware::from_fn_with_state(
                auth_service.clone(),
                jwt_auth_middleware,
            )),
        )
        .route(
            "/me",
            get(my_profile).route_layer(middleware::from_fn_with_state(
                auth_service,
                jwt_auth_middleware,
            )),
        )
        .with_state(gym)
}

/// Register a new member
#[tracing::instrument(skip(gym, request))]
async fn register_member(
    State(gym): State<GymService>,
    Json(request): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), GymError> {
    let member = gym.register_member(
        &request.name,
        &request.email,
        &request.date_of_birth,
        &request.level,
        &request.password,
    )?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

async fn list_members(State(gym): State<GymService>) -> Json<Vec<MemberResponse>> {
    Json(gym.list_members().into_iter().map(Into::into).collect())
}

/// Profile of the currently authenticated member
async fn my_profile(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
) -> Result<Json<MemberResponse>, GymError> {
    let member = gym
        .member_by_id(session.member_id)
        .ok_or(GymError::NotFound("member"))?;
    Ok(Json(member.into()))
}
