use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::post,
    Extension, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::auth::{jwt_auth_middleware, AuthService, MemberSession};
use crate::models::{Device, RegisterDeviceRequest};
use crate::services::{GymError, GymService};

pub fn device_routes(gym: GymService, auth_service: AuthService) -> Router {
    Router::new()
        .route("/", post(register_device))
        .route("/:device_id/sync", post(sync_device))
        .route_layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(gym)
}

#[derive(Debug, Serialize)]
struct SyncResponse {
    message: String,
    data: Map<String, Value>,
}

/// Pair a new device with the authenticated member
#[tracing::instrument(skip(gym, session, request))]
async fn register_device(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Json(request): Json<RegisterDeviceRequest>,
) -> Result<(StatusCode, Json<Device>), GymError> {
    let device = gym.register_device(&request.kind, session.member_id)?;
    Ok((StatusCode::CREATED, Json(device)))
}

/// Sync a device and, when the reading carries strength or body-weight
/// fields, record it in the member's progress history. Wristband readings
/// that carry only activity fields stay informational.
#[tracing::instrument(skip(gym, session))]
async fn sync_device(
    State(gym): State<GymService>,
    Extension(session): Extension<MemberSession>,
    Path(device_id): Path<Uuid>,
) -> Result<Json<SyncResponse>, GymError> {
    let data = gym
        .sync_device(device_id)
        .ok_or(GymError::NotFound("device"))?;

    let message = match progress_from_reading(&data) {
        Some((weight, repetitions, duration_seconds)) => {
            match gym.record_progress(session.member_id, weight, repetitions, duration_seconds) {
                Ok(_) => "Sync complete, progress recorded".to_string(),
                Err(err) => {
                    // A bad reading should not fail the sync itself
                    tracing::warn!("could not record synced reading: {err}");
                    "Sync complete, but the reading could not be recorded".to_string()
                }
            }
        }
        None => "Sync complete (informational reading, not recorded)".to_string(),
    };

    Ok(Json(SyncResponse { message, data }))
}

/// Map a reading onto the progress model: strength readings carry weight
/// lifted plus repetitions, scale readings carry body weight only.
fn progress_from_reading(data: &Map<String, Value>) -> Option<(f64, i64, i64)> {
    if data.contains_key("weight_lifted") && data.contains_key("repetitions") {
        return Some((
            data.get("weight_lifted").and_then(Value::as_f64).unwrap_or(0.0),
            data.get("repetitions").and_then(Value::as_i64).unwrap_or(0),
            data.get("exercise_seconds").and_then(Value::as_i64).unwrap_or(0),
        ));
    }
    if let Some(weight) = data.get("weight").and_then(Value::as_f64) {
        // Body measurement: repetitions and duration stay zero
        return Some((weight, 0, 0));
    }
    None
}
