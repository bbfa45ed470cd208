use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Training experience level, shared by members and routines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }
}

/// A registered gym member
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub level: ExperienceLevel,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Ids of classes the member currently holds a reservation for
    pub reserved_classes: Vec<Uuid>,
    /// Ids of routines assigned to the member
    pub routines: Vec<Uuid>,
    /// Ids of progress records, in insertion order
    pub progress: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

fn default_level() -> String {
    "beginner".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    #[serde(default = "default_level")]
    pub level: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub level: ExperienceLevel,
    pub reserved_classes: Vec<Uuid>,
    pub routines: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            date_of_birth: member.date_of_birth,
            level: member.level,
            reserved_classes: member.reserved_classes,
            routines: member.routines,
            created_at: member.created_at,
        }
    }
}
