use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff identity that classes are scheduled under
#[derive(Debug, Clone, Serialize)]
pub struct Trainer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: String,
    /// Ids of classes this trainer teaches
    pub classes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterTrainerRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
}

#[derive(Debug, Serialize)]
pub struct TrainerResponse {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub classes: Vec<Uuid>,
}

impl From<Trainer> for TrainerResponse {
    fn from(trainer: Trainer) -> Self {
        Self {
            id: trainer.id,
            name: trainer.name,
            specialty: trainer.specialty,
            classes: trainer.classes,
        }
    }
}
