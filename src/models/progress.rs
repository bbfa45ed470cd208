use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One timestamped performance data point for a member. Immutable once
/// created; a member's history is append-only.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    /// Weight lifted in kg (0 when the reading carries no weight)
    pub weight: f64,
    pub repetitions: i64,
    pub duration_seconds: i64,
}

#[derive(Debug, Deserialize)]
pub struct RecordProgressRequest {
    pub weight: f64,
    pub repetitions: i64,
    pub duration_seconds: i64,
}
