use axum::{
    extract::State, http::StatusCode, middleware, response::Json, routing::post, Extension, Router,
};

use crate::auth::{jwt_auth_middleware, AuthService, MemberSession};
use crate::models::AccessLog;
use crate::services::{GymError, GymService};

pub fn access_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", post(record_access))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(gym)
}

/// Log the authenticated member entering the gym (turnstile event)
#[tracing::instrument(skip(gym, session))]
async fn record_access(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
) -> Result<(StatusCode, Json<AccessLog>), GymError> {
    let log = gym.record_access(session.member_id)?;
    Ok((StatusCode::CREATED, Json(log)))
}
