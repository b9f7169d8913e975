use jiff::civil::date;
use jiff::tz::TimeZone;
use jiff::Zoned;
use tempfile::NamedTempFile;
use tend_core::{AddPlant, Database, QuestRecord, TrackerError};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Wednesday 2025-03-05 at the given hour, UTC.
fn at(hour: i8) -> Zoned {
    date(2025, 3, 5)
        .at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid test instant")
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_seeded_definitions() {
    let (_temp_file, db) = create_test_db();

    let quests = db
        .list_quest_definitions()
        .expect("Failed to list quest definitions");
    assert!(quests.iter().any(|q| q.code == "daily_watering"));

    let achievements = db
        .list_achievement_definitions()
        .expect("Failed to list achievement definitions");
    let codes: Vec<&str> = achievements.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "green_thumb",
            "community_gardener",
            "native_protector",
            "master_waterer",
            "carbon_champion",
        ]
    );
}

#[test]
fn test_plant_roundtrip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_plant(
            &AddPlant {
                name: "Sword Fern".to_string(),
                species: Some("Polystichum munitum".to_string()),
                quantity: 0,
                native: true,
                water_weekdays: vec![1, 3, 5],
                water_time: Some("08:00".to_string()),
                ..Default::default()
            },
            &at(9),
        )
        .expect("Failed to create plant");
    assert!(created.id > 0);
    // Quantity is raised to at least one.
    assert_eq!(created.quantity, 1);

    let retrieved = db
        .get_plant(created.id)
        .expect("Failed to get plant")
        .expect("Plant should exist");
    assert_eq!(retrieved, created);
}

#[test]
fn test_list_plants_ordering() {
    let (_temp_file, mut db) = create_test_db();

    for (name, hour) in [("First", 8), ("Second", 9), ("Third", 10)] {
        db.create_plant(
            &AddPlant {
                name: name.to_string(),
                ..Default::default()
            },
            &at(hour),
        )
        .expect("Failed to create plant");
    }

    let plants = db.list_plants().expect("Failed to list plants");
    let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_water_plant_accumulates_points() {
    let (_temp_file, mut db) = create_test_db();

    let plant = db
        .create_plant(
            &AddPlant {
                name: "Basil".to_string(),
                ..Default::default()
            },
            &at(8),
        )
        .expect("Failed to create plant");

    let first = db.water_plant(plant.id, &at(9)).expect("Failed to water");
    let second = db.water_plant(plant.id, &at(18)).expect("Failed to water");

    assert_eq!(first.care_points, 5);
    assert_eq!(second.care_points, 10);
    assert_eq!(second.last_watered_at, Some(at(18).timestamp()));
}

#[test]
fn test_water_missing_plant_fails() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.water_plant(99, &at(9));
    assert!(matches!(result, Err(TrackerError::PlantNotFound { id: 99 })));
}

#[test]
fn test_delete_plant_returns_details() {
    let (_temp_file, mut db) = create_test_db();

    let plant = db
        .create_plant(
            &AddPlant {
                name: "Doomed".to_string(),
                ..Default::default()
            },
            &at(8),
        )
        .expect("Failed to create plant");
    assert!(db.plant_exists(plant.id).expect("Failed to check existence"));

    let deleted = db.delete_plant(plant.id).expect("Failed to delete plant");
    assert_eq!(deleted.map(|p| p.name), Some("Doomed".to_string()));
    assert!(!db.plant_exists(plant.id).expect("Failed to check existence"));

    let again = db.delete_plant(plant.id).expect("Delete should not error");
    assert!(again.is_none());
}

#[test]
fn test_group_member_count_clamped() {
    let (_temp_file, mut db) = create_test_db();

    let group = db
        .set_group("Lonely Club", -3)
        .expect("Failed to set group");
    assert_eq!(group.member_count, 0);

    let groups = db.list_groups().expect("Failed to list groups");
    assert_eq!(groups[0].member_count, 0);
}

#[test]
fn test_quest_upsert_is_monotonic() {
    let (_temp_file, mut db) = create_test_db();

    let quest_id = db
        .list_quest_definitions()
        .expect("Failed to list quest definitions")
        .first()
        .expect("seeded quest expected")
        .id;
    let day = date(2025, 3, 5);
    let first_completed = at(9).timestamp();

    let first = db
        .upsert_quest_record(&QuestRecord {
            user_id: "u1".to_string(),
            quest_id,
            day,
            progress_count: 1,
            completed_at: Some(first_completed),
            claimed_at: None,
        })
        .expect("Failed to upsert quest record");
    assert_eq!(first.progress_count, 1);

    // A later write with lower progress and a later timestamp changes
    // nothing: MAX keeps the progress, COALESCE keeps the timestamp.
    let second = db
        .upsert_quest_record(&QuestRecord {
            user_id: "u1".to_string(),
            quest_id,
            day,
            progress_count: 0,
            completed_at: Some(at(18).timestamp()),
            claimed_at: None,
        })
        .expect("Failed to re-upsert quest record");
    assert_eq!(second.progress_count, 1);
    assert_eq!(second.completed_at, Some(first_completed));
}

#[test]
fn test_quest_records_scoped_per_day_and_user() {
    let (_temp_file, mut db) = create_test_db();

    let quest_id = db
        .list_quest_definitions()
        .expect("Failed to list quest definitions")
        .first()
        .expect("seeded quest expected")
        .id;

    db.upsert_quest_record(&QuestRecord {
        user_id: "u1".to_string(),
        quest_id,
        day: date(2025, 3, 5),
        progress_count: 1,
        completed_at: None,
        claimed_at: None,
    })
    .expect("Failed to upsert quest record");

    let other_day = db
        .quest_record("u1", quest_id, date(2025, 3, 6))
        .expect("Failed to query quest record");
    assert!(other_day.is_none());

    let other_user = db
        .quest_record("u2", quest_id, date(2025, 3, 5))
        .expect("Failed to query quest record");
    assert!(other_user.is_none());
}

#[test]
fn test_award_achievement_write_once() {
    let (_temp_file, mut db) = create_test_db();

    let achievement_id = db
        .list_achievement_definitions()
        .expect("Failed to list achievement definitions")
        .iter()
        .find(|a| a.code == "green_thumb")
        .expect("seeded achievement expected")
        .id;
    let first_earned = at(9).timestamp();

    assert!(db
        .award_achievement("u1", achievement_id, first_earned)
        .expect("Failed to award achievement"));
    // Second award is ignored and the original timestamp survives.
    assert!(!db
        .award_achievement("u1", achievement_id, at(18).timestamp())
        .expect("Re-award should not error"));

    let earned = db
        .earned_achievements("u1")
        .expect("Failed to read earned achievements");
    assert_eq!(earned.get("green_thumb"), Some(&first_earned));
}

#[test]
fn test_reopen_database_preserves_data() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create database");
        db.create_plant(
            &AddPlant {
                name: "Persistent".to_string(),
                ..Default::default()
            },
            &at(8),
        )
        .expect("Failed to create plant");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let plants = db.list_plants().expect("Failed to list plants");
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Persistent");
}
