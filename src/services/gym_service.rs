use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::models::{
    AccessLog, Device, DeviceKind, Exercise, ExperienceLevel, GymClass, Member, ProgressRecord,
    Routine, Trainer,
};
use crate::services::GymError;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Every entity collection plus the two email indexes, guarded as one unit
/// so no reader can observe a reservation applied to only one side.
#[derive(Debug, Default)]
struct Directory {
    members: HashMap<Uuid, Member>,
    trainers: HashMap<Uuid, Trainer>,
    classes: HashMap<Uuid, GymClass>,
    routines: HashMap<Uuid, Routine>,
    progress: HashMap<Uuid, ProgressRecord>,
    devices: HashMap<Uuid, Device>,
    access_logs: HashMap<Uuid, AccessLog>,

    // Independent uniqueness key spaces: the same address may appear once
    // as a member and once as a trainer.
    member_emails: HashMap<String, Uuid>,
    trainer_emails: HashMap<String, Uuid>,
}

/// The gym directory and reservation ledger. Owns all entity collections;
/// entities reference each other only by id, never by handle.
///
/// All mutations serialize behind a single lock, which keeps the capacity
/// check and roster insertion of [`reserve_class`](Self::reserve_class)
/// indivisible. Listing reads share the lock.
#[derive(Debug, Clone, Default)]
pub struct GymService {
    state: Arc<RwLock<Directory>>,
}

impl GymService {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.state.read().unwrap()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.state.write().unwrap()
    }

    // =========== Members and authentication ===========

    pub fn register_member(
        &self,
        name: &str,
        email: &str,
        date_of_birth: &str,
        level: &str,
        password: &str,
    ) -> Result<Member, GymError> {
        let name = require_name(name)?;
        let email = require_email(email)?;

        let date_of_birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
            .map_err(|_| {
                GymError::InvalidInput(format!(
                    "date of birth must be YYYY-MM-DD, got {date_of_birth:?}"
                ))
            })?;
        if date_of_birth > Utc::now().date_naive() {
            return Err(GymError::InvalidInput(
                "date of birth cannot be in the future".to_string(),
            ));
        }

        let level = ExperienceLevel::from_str(level).ok_or_else(|| {
            GymError::InvalidInput(format!(
                "level must be one of beginner, intermediate, advanced, got {level:?}"
            ))
        })?;

        // Empty password stays an empty hash, so authentication for this
        // member always fails.
        let password_hash = if password.is_empty() {
            String::new()
        } else {
            hash_password(password)?
        };

        let mut state = self.write();
        if state.member_emails.contains_key(&email) {
            return Err(GymError::DuplicateEmail(email));
        }

        let member = Member {
            id: Uuid::new_v4(),
            name,
            email: email.clone(),
            date_of_birth,
            level,
            password_hash,
            reserved_classes: Vec::new(),
            routines: Vec::new(),
            progress: Vec::new(),
            created_at: Utc::now(),
        };
        state.member_emails.insert(email, member.id);
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    /// Verify credentials against the member email index. Unknown emails and
    /// wrong passwords both yield `None`, never an error.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<Member> {
        let member = {
            let state = self.read();
            let member_id = state.member_emails.get(email)?;
            state.members.get(member_id)?.clone()
        };

        if member.password_hash.is_empty() {
            return None;
        }
        match verify_password(password, &member.password_hash) {
            Ok(true) => Some(member),
            _ => None,
        }
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.read().members.values().cloned().collect()
    }

    pub fn member_by_id(&self, member_id: Uuid) -> Option<Member> {
        self.read().members.get(&member_id).cloned()
    }

    // =========== Trainers ===========

    pub fn register_trainer(
        &self,
        name: &str,
        email: &str,
        specialty: &str,
    ) -> Result<Trainer, GymError> {
        let name = require_name(name)?;
        let email = require_email(email)?;
        if specialty.trim().is_empty() {
            return Err(GymError::InvalidInput(
                "specialty cannot be blank".to_string(),
            ));
        }

        let mut state = self.write();
        if state.trainer_emails.contains_key(&email) {
            return Err(GymError::DuplicateEmail(email));
        }

        let trainer = Trainer {
            id: Uuid::new_v4(),
            name,
            email: email.clone(),
            specialty: specialty.trim().to_string(),
            classes: Vec::new(),
            created_at: Utc::now(),
        };
        state.trainer_emails.insert(email, trainer.id);
        state.trainers.insert(trainer.id, trainer.clone());
        Ok(trainer)
    }

    pub fn list_trainers(&self) -> Vec<Trainer> {
        self.read().trainers.values().cloned().collect()
    }

    // =========== Classes and reservations ===========

    pub fn create_class(
        &self,
        name: &str,
        schedule: &str,
        capacity: u32,
        trainer_id: Uuid,
    ) -> Result<GymClass, GymError> {
        let name = require_name(name)?;
        let schedule = NaiveTime::parse_from_str(schedule, "%H:%M").map_err(|_| {
            GymError::InvalidInput(format!("schedule must be HH:MM, got {schedule:?}"))
        })?;
        if capacity == 0 {
            return Err(GymError::InvalidInput(
                "capacity must be positive".to_string(),
            ));
        }

        let mut state = self.write();
        let trainer = state
            .trainers
            .get_mut(&trainer_id)
            .ok_or(GymError::NotFound("trainer"))?;

        let class = GymClass {
            id: Uuid::new_v4(),
            name,
            schedule,
            capacity,
            trainer_id,
            enrolled: Vec::new(),
        };
        trainer.classes.push(class.id);
        state.classes.insert(class.id, class.clone());
        Ok(class)
    }

    pub fn list_classes(&self) -> Vec<GymClass> {
        self.read().classes.values().cloned().collect()
    }

    pub fn class_by_id(&self, class_id: Uuid) -> Option<GymClass> {
        self.read().classes.get(&class_id).cloned()
    }

    /// Reserve a spot in a class for a member.
    ///
    /// Returns `false` when either id fails to resolve or the class is full.
    /// A member who already holds the reservation gets `true` with no state
    /// change. The capacity check and the roster insertion happen under one
    /// write lock, so the enrolled count can never exceed capacity.
    pub fn reserve_class(&self, member_id: Uuid, class_id: Uuid) -> bool {
        let mut state = self.write();
        if !state.members.contains_key(&member_id) {
            return false;
        }
        {
            let Some(class) = state.classes.get_mut(&class_id) else {
                return false;
            };
            if class.is_enrolled(member_id) {
                return true;
            }
            if !class.has_space() {
                return false;
            }
            class.enrolled.push(member_id);
        }
        if let Some(member) = state.members.get_mut(&member_id) {
            if !member.reserved_classes.contains(&class_id) {
                member.reserved_classes.push(class_id);
            }
        }
        true
    }

    /// Drop a reservation. `false` when either id fails to resolve or the
    /// member was not enrolled.
    pub fn cancel_reservation(&self, member_id: Uuid, class_id: Uuid) -> bool {
        let mut state = self.write();
        if !state.members.contains_key(&member_id) {
            return false;
        }
        {
            let Some(class) = state.classes.get_mut(&class_id) else {
                return false;
            };
            if !class.is_enrolled(member_id) {
                return false;
            }
            class.enrolled.retain(|id| *id != member_id);
        }
        if let Some(member) = state.members.get_mut(&member_id) {
            member.reserved_classes.retain(|id| *id != class_id);
        }
        true
    }

    // =========== Routines ===========

    pub fn create_routine(
        &self,
        name: &str,
        duration_minutes: u32,
        difficulty: &str,
    ) -> Result<Routine, GymError> {
        let name = require_name(name)?;
        if duration_minutes == 0 {
            return Err(GymError::InvalidInput(
                "duration must be positive".to_string(),
            ));
        }
        let difficulty = ExperienceLevel::from_str(difficulty).ok_or_else(|| {
            GymError::InvalidInput(format!(
                "difficulty must be one of beginner, intermediate, advanced, got {difficulty:?}"
            ))
        })?;

        let routine = Routine {
            id: Uuid::new_v4(),
            name,
            duration_minutes,
            difficulty,
            exercises: Vec::new(),
        };
        self.write().routines.insert(routine.id, routine.clone());
        Ok(routine)
    }

    pub fn add_exercise(
        &self,
        routine_id: Uuid,
        name: &str,
        repetitions: u32,
        series: u32,
    ) -> Result<Routine, GymError> {
        let name = require_name(name)?;
        if repetitions == 0 || series == 0 {
            return Err(GymError::InvalidInput(
                "repetitions and series must be positive".to_string(),
            ));
        }

        let mut state = self.write();
        let routine = state
            .routines
            .get_mut(&routine_id)
            .ok_or(GymError::NotFound("routine"))?;
        routine.exercises.push(Exercise {
            name,
            repetitions,
            series,
        });
        Ok(routine.clone())
    }

    pub fn list_routines(&self) -> Vec<Routine> {
        self.read().routines.values().cloned().collect()
    }

    pub fn routine_by_id(&self, routine_id: Uuid) -> Option<Routine> {
        self.read().routines.get(&routine_id).cloned()
    }

    /// Idempotently attach a routine to a member's plan. `false` when either
    /// id fails to resolve.
    pub fn assign_routine(&self, member_id: Uuid, routine_id: Uuid) -> bool {
        let mut state = self.write();
        if !state.routines.contains_key(&routine_id) {
            return false;
        }
        let Some(member) = state.members.get_mut(&member_id) else {
            return false;
        };
        if !member.routines.contains(&routine_id) {
            member.routines.push(routine_id);
        }
        true
    }

    /// Resolve the routines assigned to a member, skipping ids that no
    /// longer resolve. Empty for an unknown member.
    pub fn routines_for_member(&self, member_id: Uuid) -> Vec<Routine> {
        let state = self.read();
        let Some(member) = state.members.get(&member_id) else {
            return Vec::new();
        };
        member
            .routines
            .iter()
            .filter_map(|id| state.routines.get(id).cloned())
            .collect()
    }

    // =========== Progress, devices and access ===========

    pub fn record_progress(
        &self,
        member_id: Uuid,
        weight: f64,
        repetitions: i64,
        duration_seconds: i64,
    ) -> Result<ProgressRecord, GymError> {
        if weight < 0.0 {
            return Err(GymError::InvalidInput(
                "weight cannot be negative".to_string(),
            ));
        }
        if repetitions < 0 {
            return Err(GymError::InvalidInput(
                "repetitions cannot be negative".to_string(),
            ));
        }
        if duration_seconds < 0 {
            return Err(GymError::InvalidInput(
                "duration cannot be negative".to_string(),
            ));
        }

        let mut state = self.write();
        if !state.members.contains_key(&member_id) {
            return Err(GymError::NotFound("member"));
        }

        let record = ProgressRecord {
            id: Uuid::new_v4(),
            member_id,
            recorded_at: Utc::now(),
            weight,
            repetitions,
            duration_seconds,
        };
        state.progress.insert(record.id, record.clone());
        if let Some(member) = state.members.get_mut(&member_id) {
            member.progress.push(record.id);
        }
        Ok(record)
    }

    /// A member's progress history in insertion order. Empty for an unknown
    /// member; ids that fail to resolve are skipped.
    pub fn list_progress(&self, member_id: Uuid) -> Vec<ProgressRecord> {
        let state = self.read();
        let Some(member) = state.members.get(&member_id) else {
            return Vec::new();
        };
        member
            .progress
            .iter()
            .filter_map(|id| state.progress.get(id).cloned())
            .collect()
    }

    pub fn register_device(&self, kind: &str, member_id: Uuid) -> Result<Device, GymError> {
        let mut state = self.write();
        if !state.members.contains_key(&member_id) {
            return Err(GymError::NotFound("member"));
        }
        let kind = DeviceKind::from_str(kind).ok_or_else(|| {
            GymError::InvalidInput(format!(
                "device kind must be one of wristband, scale, sensor, got {kind:?}"
            ))
        })?;

        let device = Device::new(kind, member_id);
        state.devices.insert(device.id, device.clone());
        Ok(device)
    }

    /// Sync a device and return its reading. The first sync generates a
    /// kind-shaped synthetic payload; later syncs return the stored payload
    /// unchanged. `None` when the device id fails to resolve.
    pub fn sync_device(&self, device_id: Uuid) -> Option<Map<String, Value>> {
        let mut state = self.write();
        let device = state.devices.get_mut(&device_id)?;
        device.sync();
        Some(device.data.clone())
    }

    pub fn record_access(&self, member_id: Uuid) -> Result<AccessLog, GymError> {
        let mut state = self.write();
        let member = state
            .members
            .get(&member_id)
            .ok_or(GymError::NotFound("member"))?;

        let log = AccessLog::new(member_id, &member.name);
        state.access_logs.insert(log.id, log.clone());
        Ok(log)
    }
}

fn require_name(name: &str) -> Result<String, GymError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GymError::InvalidInput("name cannot be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

fn require_email(email: &str) -> Result<String, GymError> {
    if !email_regex().is_match(email) {
        return Err(GymError::InvalidInput(format!(
            "invalid email address: {email:?}"
        )));
    }
    Ok(email.to_string())
}
