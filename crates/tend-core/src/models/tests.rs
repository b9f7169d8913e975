//! Tests for the data models.

use jiff::civil::Weekday;
use jiff::Timestamp;

use super::*;

fn plant() -> Plant {
    let created = Timestamp::from_second(1640995200).unwrap();
    Plant {
        id: 1,
        name: "Sword Fern".to_string(),
        species: None,
        quantity: 3,
        native: true,
        co2_offset_kg: 2.0,
        co2_offset_override_kg: None,
        water_weekdays: vec![1, 3],
        water_time: Some("08:00".to_string()),
        last_watered_at: None,
        care_points: 0,
        created_at: created,
        updated_at: created,
    }
}

#[test]
fn test_recurrence_pattern_drops_invalid_weekdays() {
    let pattern = RecurrencePattern::new(&[0, 3, 7, 200, 3], Some("08:00"));
    assert_eq!(
        pattern.weekdays(),
        &[Weekday::Sunday, Weekday::Wednesday]
    );
    assert!(!pattern.is_never());
}

#[test]
fn test_recurrence_pattern_malformed_time_is_never() {
    for raw in ["", "8am", "25:00", "12:60", "12", "::"] {
        let pattern = RecurrencePattern::new(&[1], Some(raw));
        assert!(pattern.time_of_day().is_none(), "{raw:?} should not parse");
        assert!(pattern.is_never());
    }
}

#[test]
fn test_recurrence_pattern_time_parsing() {
    let pattern = RecurrencePattern::new(&[1], Some("23:45"));
    let time = pattern.time_of_day().expect("time expected");
    assert_eq!((time.hour(), time.minute()), (23, 45));
}

#[test]
fn test_plant_total_co2_offset_uses_override() {
    let mut p = plant();
    assert_eq!(p.total_co2_offset_kg(), 6.0);

    p.co2_offset_override_kg = Some(5.0);
    assert_eq!(p.total_co2_offset_kg(), 15.0);
}

#[test]
fn test_plant_schedule_state_carries_last_watered() {
    let mut p = plant();
    let watered = Timestamp::from_second(1700000000).unwrap();
    p.last_watered_at = Some(watered);

    let state = p.schedule_state();
    assert_eq!(state.last_completed_at, Some(watered));
    assert!(!state.pattern.is_never());
}

#[test]
fn test_first_or_none_shapes() {
    assert_eq!(first_or_none::<u32>(None), None);
    assert_eq!(first_or_none(Some(OneOrMany::One(7))), Some(7));
    assert_eq!(first_or_none(Some(OneOrMany::Many(vec![1, 2, 3]))), Some(1));
    assert_eq!(first_or_none(Some(OneOrMany::Many(Vec::<u32>::new()))), None);
}

#[test]
fn test_raw_record_lenient_parsing() {
    let json = r#"{
        "name": "Oak",
        "quantity": null,
        "last_watered_at": "garbage",
        "water_weekdays": [0, 6, -1, 12],
        "plant_types": [{"name": "Quercus", "co2_offset_kg": 10.5}]
    }"#;
    let record: RawPlantRecord = serde_json::from_str(json).expect("record should parse");

    assert_eq!(record.quantity, None);
    assert_eq!(record.last_watered_timestamp(), None);
    assert_eq!(record.weekdays(), vec![0, 6]);
    assert_eq!(record.species().as_deref(), Some("Quercus"));
    assert_eq!(record.co2_offset_default_kg(), Some(10.5));
}

#[test]
fn test_raw_record_single_object_relation() {
    let json = r#"{"name": "Oak", "plant_types": {"name": "Quercus"}}"#;
    let record: RawPlantRecord = serde_json::from_str(json).expect("record should parse");
    assert_eq!(record.species().as_deref(), Some("Quercus"));
    assert_eq!(record.co2_offset_default_kg(), None);
}

#[test]
fn test_achievement_code_roundtrip() {
    for code in [
        "green_thumb",
        "native_protector",
        "community_gardener",
        "carbon_champion",
        "master_waterer",
    ] {
        let parsed: AchievementCode = code.parse().expect("known code should parse");
        assert_eq!(parsed.as_str(), code);
    }
    assert!("time_traveler".parse::<AchievementCode>().is_err());
}

#[test]
fn test_achievement_predicates_at_boundaries() {
    let snapshot = ProgressSnapshot {
        total_plants: 1,
        native_plants: 15,
        watering_units: 15,
        watered_today: false,
        has_qualifying_group: false,
        co2_offset_kg: 500.0,
    };

    assert!(AchievementCode::GreenThumb.unlocked(&snapshot));
    assert!(AchievementCode::NativeProtector.unlocked(&snapshot));
    assert!(AchievementCode::MasterWaterer.unlocked(&snapshot));
    assert!(AchievementCode::CarbonChampion.unlocked(&snapshot));
    assert!(!AchievementCode::CommunityGardener.unlocked(&snapshot));

    let below = ProgressSnapshot {
        total_plants: 0,
        native_plants: 14,
        watering_units: 14,
        co2_offset_kg: 499.99,
        ..snapshot
    };
    assert!(!AchievementCode::GreenThumb.unlocked(&below));
    assert!(!AchievementCode::NativeProtector.unlocked(&below));
    assert!(!AchievementCode::MasterWaterer.unlocked(&below));
    assert!(!AchievementCode::CarbonChampion.unlocked(&below));
}

#[test]
fn test_achievement_state_icons() {
    let earned_at = Timestamp::from_second(1640995200).unwrap();
    assert_eq!(AchievementState::Earned(earned_at).with_icon(), "✓ Earned");
    assert_eq!(AchievementState::Ready.with_icon(), "➤ Ready");
    assert_eq!(AchievementState::Locked.with_icon(), "○ Locked");
}
