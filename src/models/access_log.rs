use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A record of a member's physical entry event. The member's name is
/// snapshotted at entry time so the log stays readable on its own.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLog {
    pub id: Uuid,
    pub member_id: Uuid,
    pub member_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl AccessLog {
    pub fn new(member_id: Uuid, member_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            member_id,
            member_name: member_name.to_string(),
            date: now.date_naive(),
            time: now.time(),
        }
    }
}
