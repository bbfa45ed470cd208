use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::models::{RegisterTrainerRequest, TrainerResponse};
use crate::services::{GymError, GymService};

pub fn trainer_routes(gym: GymService) -> Router {
    Router::new()
        .route("/", get(list_trainers).post(register_trainer))
        .with_state(gym)
}

/// Register a new trainer
#[tracing::instrument(skip(gym, request))]
async fn register_trainer(
    State(gym): State<GymService>,
    Json(request): Json<RegisterTrainerRequest>,
) -> Result<(StatusCode, Json<TrainerResponse>), GymError> {
    let trainer = gym.register_trainer(&request.name, &request.email, &request.specialty)?;
    Ok((StatusCode::CREATED, Json(trainer.into())))
}

async fn list_trainers(State(gym): State<GymService>) -> Json<Vec<TrainerResponse>> {
    Json(gym.list_trainers().into_iter().map(Into::into).collect())
}
