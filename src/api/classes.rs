use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::auth::{jwt_auth_middleware, AuthService};
use crate::models::{ClassResponse, CreateClassRequest};
use crate::services::{GymError, GymService};

/// Class routes: listing is public, creation requires a session.
pub fn class_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", get(list_classes))
        .route(
            "/",
            post(create_class).route_layer(middleware::from_fn_with_state(
                auth_service,
                jwt_auth_middleware,
            )),
        )
        .with_state(gym)
}

/// Create a new class under an existing trainer
#[tracing::instrument(skip(gym, request))]
async fn create_class(
    State(gym): State<GymService>,
    Json(request): Json<CreateClassRequest>,
) -> Result<(StatusCode, Json<ClassResponse>), GymError> {
    let class = gym.create_class(
        &request.name,
        &request.schedule,
        request.capacity,
        request.trainer_id,
    )?;
    Ok((StatusCode::CREATED, Json(class.into())))
}

/// List classes with their remaining slots. Public.
async fn list_classes(State(gym): State<GymService>) -> Json<Vec<ClassResponse>> {
    Json(gym.list_classes().into_iter().map(Into::into).collect())
}
