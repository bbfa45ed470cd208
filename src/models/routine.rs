use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ExperienceLevel;

/// One exercise inside a routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub repetitions: u32,
    pub series: u32,
}

/// A named, reusable workout plan template
#[derive(Debug, Clone, Serialize)]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: u32,
    pub difficulty: ExperienceLevel,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRoutineRequest {
    pub name: String,
    pub duration_minutes: u32,
    pub difficulty: String,
}

fn default_repetitions() -> u32 {
    10
}

fn default_series() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    pub name: String,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    #[serde(default = "default_series")]
    pub series: u32,
}
