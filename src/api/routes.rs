use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::access::access_routes;
use super::auth::auth_routes;
use super::classes::class_routes;
use super::devices::device_routes;
use super::health::health_check;
use super::members::member_routes;
use super::progress::progress_routes;
use super::reservations::reservation_routes;
use super::routines::routine_routes;
use super::trainers::trainer_routes;
use crate::auth::{cors_layer, security_headers_layer, AuthService};
use crate::services::GymService;

pub fn create_routes(gym: GymService, jwt_secret: &str) -> Router {
    let auth_service = AuthService::new(gym.clone(), jwt_secret);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes(auth_service.clone()))
        .nest(
            "/api/members",
            member_routes(gym.clone(), auth_service.clone()),
        )
        .nest("/api/trainers", trainer_routes(gym.clone()))
        .nest(
            "/api/classes",
            class_routes(gym.clone(), auth_service.clone()),
        )
        .nest(
            "/api/reservations",
            reservation_routes(gym.clone(), auth_service.clone()),
        )
        .nest(
            "/api/routines",
            routine_routes(gym.clone(), auth_service.clone()),
        )
        .nest(
            "/api/progress",
            progress_routes(gym.clone(), auth_service.clone()),
        )
        .nest(
            "/api/devices",
            device_routes(gym.clone(), auth_service.clone()),
        )
        .nest("/api/access", access_routes(gym, auth_service))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers_layer())
                .layer(cors_layer()),
        )
}
