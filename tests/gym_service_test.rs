use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use smart_gym::models::ExperienceLevel;
use smart_gym::services::{GymError, GymService};

fn gym_with_class(capacity: u32) -> (GymService, Uuid) {
    let gym = GymService::new();
    let trainer = gym
        .register_trainer("Ana", "ana@gym.com", "Yoga")
        .unwrap();
    let class = gym.create_class("Yoga", "08:00", capacity, trainer.id).unwrap();
    (gym, class.id)
}

fn register_member(gym: &GymService, email: &str) -> Uuid {
    gym.register_member("Member", email, "1995-06-01", "beginner", "pw")
        .unwrap()
        .id
}

#[test]
fn enrolled_count_never_exceeds_capacity() {
    let (gym, class_id) = gym_with_class(2);
    let m1 = register_member(&gym, "m1@gym.com");
    let m2 = register_member(&gym, "m2@gym.com");
    let m3 = register_member(&gym, "m3@gym.com");

    assert!(gym.reserve_class(m1, class_id));
    assert!(gym.reserve_class(m2, class_id));
    assert!(!gym.reserve_class(m3, class_id));

    let class = gym.class_by_id(class_id).unwrap();
    assert_eq!(class.enrolled.len(), 2);
    assert_eq!(class.remaining_slots(), 0);
}

#[test]
fn repeated_reservation_is_idempotent() {
    let (gym, class_id) = gym_with_class(5);
    let member_id = register_member(&gym, "m@gym.com");

    assert!(gym.reserve_class(member_id, class_id));
    let enrolled_after_first = gym.class_by_id(class_id).unwrap().enrolled.len();

    assert!(gym.reserve_class(member_id, class_id));
    let class = gym.class_by_id(class_id).unwrap();
    assert_eq!(class.enrolled.len(), enrolled_after_first);

    let member = gym.member_by_id(member_id).unwrap();
    assert_eq!(member.reserved_classes, vec![class_id]);
}

#[test]
fn cancel_restores_pre_reservation_state() {
    let (gym, class_id) = gym_with_class(3);
    let member_id = register_member(&gym, "m@gym.com");
    let slots_before = gym.class_by_id(class_id).unwrap().remaining_slots();

    assert!(gym.reserve_class(member_id, class_id));
    assert!(gym.cancel_reservation(member_id, class_id));

    let class = gym.class_by_id(class_id).unwrap();
    assert_eq!(class.remaining_slots(), slots_before);
    assert!(!gym
        .member_by_id(member_id)
        .unwrap()
        .reserved_classes
        .contains(&class_id));
}

#[test]
fn cancel_without_reservation_fails() {
    let (gym, class_id) = gym_with_class(3);
    let member_id = register_member(&gym, "m@gym.com");

    assert!(!gym.cancel_reservation(member_id, class_id));
    assert!(!gym.cancel_reservation(member_id, Uuid::new_v4()));
    assert!(!gym.cancel_reservation(Uuid::new_v4(), class_id));
}

#[test]
fn reservation_with_unknown_ids_fails_quietly() {
    let (gym, class_id) = gym_with_class(3);
    let member_id = register_member(&gym, "m@gym.com");

    assert!(!gym.reserve_class(member_id, Uuid::new_v4()));
    assert!(!gym.reserve_class(Uuid::new_v4(), class_id));
    assert_eq!(gym.class_by_id(class_id).unwrap().enrolled.len(), 0);
}

#[test]
fn duplicate_member_email_is_rejected() {
    let gym = GymService::new();
    register_member(&gym, "same@gym.com");

    let result = gym.register_member("Other", "same@gym.com", "1990-01-01", "advanced", "pw");
    assert_matches!(result, Err(GymError::DuplicateEmail(_)));
    assert_eq!(gym.list_members().len(), 1);
}

#[test]
fn member_and_trainer_email_spaces_are_independent() {
    let gym = GymService::new();
    register_member(&gym, "shared@gym.com");

    // Same address registering as a trainer is fine
    assert!(gym
        .register_trainer("Coach", "shared@gym.com", "Pilates")
        .is_ok());

    // But a second trainer with it is not
    let result = gym.register_trainer("Coach 2", "shared@gym.com", "Boxing");
    assert_matches!(result, Err(GymError::DuplicateEmail(_)));
}

#[test]
fn class_with_zero_capacity_is_rejected() {
    let gym = GymService::new();
    let trainer = gym.register_trainer("Ana", "ana@gym.com", "Yoga").unwrap();

    let result = gym.create_class("Yoga", "08:00", 0, trainer.id);
    assert_matches!(result, Err(GymError::InvalidInput(_)));
}

#[test]
fn capacity_one_admits_exactly_one_member() {
    let (gym, class_id) = gym_with_class(1);
    let m1 = register_member(&gym, "m1@gym.com");
    let m2 = register_member(&gym, "m2@gym.com");

    assert!(gym.reserve_class(m1, class_id));
    assert!(!gym.reserve_class(m2, class_id));
    assert_eq!(gym.class_by_id(class_id).unwrap().enrolled, vec![m1]);
}

#[test]
fn yoga_scenario() {
    let gym = GymService::new();
    let ana = gym.register_trainer("Ana", "ana@gym.com", "Yoga").unwrap();
    let class = gym.create_class("Yoga", "08:00", 1, ana.id).unwrap();
    assert!(gym
        .list_trainers()
        .iter()
        .any(|t| t.classes.contains(&class.id)));

    let m1 = register_member(&gym, "m1@gym.com");
    assert!(gym.reserve_class(m1, class.id));
    assert_eq!(gym.class_by_id(class.id).unwrap().remaining_slots(), 0);

    let m2 = register_member(&gym, "m2@gym.com");
    assert!(!gym.reserve_class(m2, class.id));
}

#[test]
fn class_creation_requires_known_trainer_and_valid_inputs() {
    let gym = GymService::new();
    let trainer = gym.register_trainer("Ana", "ana@gym.com", "Yoga").unwrap();

    assert_matches!(
        gym.create_class("Yoga", "08:00", 5, Uuid::new_v4()),
        Err(GymError::NotFound("trainer"))
    );
    assert_matches!(
        gym.create_class("  ", "08:00", 5, trainer.id),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.create_class("Yoga", "8 o'clock", 5, trainer.id),
        Err(GymError::InvalidInput(_))
    );
}

#[test]
fn member_registration_validates_inputs() {
    let gym = GymService::new();

    assert_matches!(
        gym.register_member("", "m@gym.com", "1990-01-01", "beginner", "pw"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.register_member("M", "not-an-email", "1990-01-01", "beginner", "pw"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.register_member("M", "m@gym.com", "01/01/1990", "beginner", "pw"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.register_member("M", "m@gym.com", "2990-01-01", "beginner", "pw"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.register_member("M", "m@gym.com", "1990-01-01", "expert", "pw"),
        Err(GymError::InvalidInput(_))
    );
    assert!(gym.list_members().is_empty());
}

#[test]
fn authentication_only_succeeds_with_matching_password() {
    let gym = GymService::new();
    register_member(&gym, "m@gym.com");

    assert!(gym.authenticate("m@gym.com", "pw").is_some());
    assert!(gym.authenticate("m@gym.com", "wrong").is_none());
    assert!(gym.authenticate("nobody@gym.com", "pw").is_none());
}

#[test]
fn empty_password_member_can_never_authenticate() {
    let gym = GymService::new();
    gym.register_member("M", "m@gym.com", "1990-01-01", "beginner", "")
        .unwrap();

    assert!(gym.authenticate("m@gym.com", "").is_none());
    assert!(gym.authenticate("m@gym.com", "anything").is_none());
}

#[test]
fn progress_record_and_history() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");

    let record = gym.record_progress(member_id, 50.0, 10, 600).unwrap();
    assert_eq!(record.weight, 50.0);
    assert_eq!(record.repetitions, 10);
    assert_eq!(record.duration_seconds, 600);

    let history = gym.list_progress(member_id);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, record.id);
}

#[test]
fn progress_history_preserves_insertion_order() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");

    let first = gym.record_progress(member_id, 40.0, 8, 300).unwrap();
    let second = gym.record_progress(member_id, 45.0, 8, 300).unwrap();
    let third = gym.record_progress(member_id, 50.0, 6, 300).unwrap();

    let ids: Vec<_> = gym.list_progress(member_id).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn progress_rejects_negative_values_and_unknown_members() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");

    assert_matches!(
        gym.record_progress(member_id, -1.0, 10, 600),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.record_progress(member_id, 50.0, -1, 600),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.record_progress(member_id, 50.0, 10, -1),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.record_progress(Uuid::new_v4(), 50.0, 10, 600),
        Err(GymError::NotFound("member"))
    );

    // Unknown member reads as an empty history, not an error
    assert!(gym.list_progress(Uuid::new_v4()).is_empty());
}

#[test]
fn routine_assignment_is_idempotent() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");
    let routine = gym.create_routine("Strength", 45, "intermediate").unwrap();
    assert_eq!(routine.difficulty, ExperienceLevel::Intermediate);

    assert!(gym.assign_routine(member_id, routine.id));
    assert!(gym.assign_routine(member_id, routine.id));
    assert_eq!(gym.member_by_id(member_id).unwrap().routines.len(), 1);

    assert!(!gym.assign_routine(member_id, Uuid::new_v4()));
    assert!(!gym.assign_routine(Uuid::new_v4(), routine.id));

    let assigned = gym.routines_for_member(member_id);
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, routine.id);
}

#[test]
fn routine_exercises_are_validated_and_ordered() {
    let gym = GymService::new();
    let routine = gym.create_routine("Strength", 45, "beginner").unwrap();

    gym.add_exercise(routine.id, "Squat", 10, 3).unwrap();
    let updated = gym.add_exercise(routine.id, "Deadlift", 5, 5).unwrap();
    assert_eq!(updated.exercises.len(), 2);
    assert_eq!(updated.exercises[0].name, "Squat");

    assert_matches!(
        gym.add_exercise(routine.id, "", 10, 3),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.add_exercise(routine.id, "Squat", 0, 3),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.add_exercise(Uuid::new_v4(), "Squat", 10, 3),
        Err(GymError::NotFound("routine"))
    );
}

#[test]
fn routine_creation_validates_inputs() {
    let gym = GymService::new();

    assert_matches!(
        gym.create_routine("", 45, "beginner"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.create_routine("Strength", 0, "beginner"),
        Err(GymError::InvalidInput(_))
    );
    assert_matches!(
        gym.create_routine("Strength", 45, "impossible"),
        Err(GymError::InvalidInput(_))
    );
}

#[test]
fn device_sync_returns_stable_payload() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");
    let device = gym.register_device("wristband", member_id).unwrap();

    let first = gym.sync_device(device.id).unwrap();
    let second = gym.sync_device(device.id).unwrap();
    assert_eq!(first, second);
    assert!(first.contains_key("heart_rate"));

    assert!(gym.sync_device(Uuid::new_v4()).is_none());
}

#[test]
fn device_registration_checks_member_and_kind() {
    let gym = GymService::new();
    let member_id = register_member(&gym, "m@gym.com");

    assert_matches!(
        gym.register_device("wristband", Uuid::new_v4()),
        Err(GymError::NotFound("member"))
    );
    assert_matches!(
        gym.register_device("treadmill", member_id),
        Err(GymError::InvalidInput(_))
    );
}

#[test]
fn access_log_snapshots_member_name() {
    let gym = GymService::new();
    let member = gym
        .register_member("Marta Diaz", "marta@gym.com", "1992-03-15", "advanced", "pw")
        .unwrap();

    let log = gym.record_access(member.id).unwrap();
    assert_eq!(log.member_id, member.id);
    assert_eq!(log.member_name, "Marta Diaz");

    assert_matches!(
        gym.record_access(Uuid::new_v4()),
        Err(GymError::NotFound("member"))
    );
}
