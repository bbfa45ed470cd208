use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A capacity-bounded, scheduled group session
#[derive(Debug, Clone, Serialize)]
pub struct GymClass {
    pub id: Uuid,
    pub name: String,
    pub schedule: NaiveTime,
    pub capacity: u32,
    pub trainer_id: Uuid,
    /// Member ids currently enrolled; never grows past `capacity`
    pub enrolled: Vec<Uuid>,
}

impl GymClass {
    pub fn is_enrolled(&self, member_id: Uuid) -> bool {
        self.enrolled.contains(&member_id)
    }

    pub fn has_space(&self) -> bool {
        (self.enrolled.len() as u32) < self.capacity
    }

    /// Computed on read, never stored
    pub fn remaining_slots(&self) -> u32 {
        self.capacity - self.enrolled.len() as u32
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub schedule: String,
    pub capacity: u32,
    pub trainer_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    pub id: Uuid,
    pub name: String,
    pub schedule: String,
    pub capacity: u32,
    pub trainer_id: Uuid,
    pub enrolled_count: u32,
    pub remaining_slots: u32,
}

impl From<GymClass> for ClassResponse {
    fn from(class: GymClass) -> Self {
        let remaining_slots = class.remaining_slots();
        Self {
            id: class.id,
            name: class.name,
            schedule: class.schedule.format("%H:%M").to_string(),
            capacity: class.capacity,
            trainer_id: class.trainer_id,
            enrolled_count: class.enrolled.len() as u32,
            remaining_slots,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReservationRequest {
    pub class_id: Uuid,
}
