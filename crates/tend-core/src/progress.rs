//! Progress snapshot construction.
//!
//! Pure aggregation over caller-supplied records: arithmetic and threshold
//! evaluation only, no business rules and no I/O. Empty inputs yield a
//! zero/false snapshot.

use jiff::Zoned;

use crate::models::{GroupFact, Plant, ProgressSnapshot};

/// Care points that make up one watering-equivalent unit.
pub const CARE_POINTS_PER_UNIT: i64 = 10;

/// Minimum member count for a garden group to count as qualifying.
pub const QUALIFYING_GROUP_SIZE: i64 = 5;

/// Aggregates current plant and group facts into an immutable snapshot.
///
/// "Watered today" is calendar-day equality of any plant's last watering
/// with `now`, evaluated in `now`'s timezone, not exact-instant equality.
pub fn build_snapshot(plants: &[Plant], groups: &[GroupFact], now: &Zoned) -> ProgressSnapshot {
    let mut snapshot = ProgressSnapshot::default();
    let mut care_points: i64 = 0;

    for plant in plants {
        let quantity = u64::from(plant.quantity);
        snapshot.total_plants += quantity;
        if plant.native {
            snapshot.native_plants += quantity;
        }
        snapshot.co2_offset_kg += plant.total_co2_offset_kg();
        care_points += plant.care_points.max(0);

        if !snapshot.watered_today {
            snapshot.watered_today = plant
                .last_watered_at
                .map(|watered| watered.to_zoned(now.time_zone().clone()).date() == now.date())
                .unwrap_or(false);
        }
    }

    snapshot.watering_units = care_points / CARE_POINTS_PER_UNIT;
    snapshot.has_qualifying_group = groups
        .iter()
        .any(|group| group.member_count >= QUALIFYING_GROUP_SIZE);

    snapshot
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;
    use jiff::{Timestamp, Zoned};

    use super::*;

    fn noon() -> Zoned {
        date(2025, 3, 5)
            .at(12, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    fn plant(quantity: u32, native: bool, care_points: i64) -> Plant {
        let now = Timestamp::now();
        Plant {
            id: 1,
            name: "Test".to_string(),
            species: None,
            quantity,
            native,
            co2_offset_kg: 2.0,
            co2_offset_override_kg: None,
            water_weekdays: Vec::new(),
            water_time: None,
            last_watered_at: None,
            care_points,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_inputs_yield_zero_snapshot() {
        let snapshot = build_snapshot(&[], &[], &noon());
        assert_eq!(snapshot, ProgressSnapshot::default());
    }

    #[test]
    fn test_totals_sum_quantities() {
        let plants = vec![plant(3, true, 0), plant(2, false, 0)];
        let snapshot = build_snapshot(&plants, &[], &noon());

        assert_eq!(snapshot.total_plants, 5);
        assert_eq!(snapshot.native_plants, 3);
    }

    #[test]
    fn test_co2_uses_override_when_present() {
        let mut with_override = plant(2, false, 0);
        with_override.co2_offset_override_kg = Some(10.0);
        let plants = vec![with_override, plant(1, false, 0)];

        let snapshot = build_snapshot(&plants, &[], &noon());
        assert!((snapshot.co2_offset_kg - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_watering_units_floor_division() {
        let plants = vec![plant(1, false, 7), plant(1, false, 12)];
        let snapshot = build_snapshot(&plants, &[], &noon());

        // 19 care points at 10 per unit floors to 1.
        assert_eq!(snapshot.watering_units, 1);
    }

    #[test]
    fn test_negative_care_points_do_not_contribute() {
        let plants = vec![plant(1, false, -30), plant(1, false, 25)];
        let snapshot = build_snapshot(&plants, &[], &noon());

        assert_eq!(snapshot.watering_units, 2);
    }

    #[test]
    fn test_watered_today_is_calendar_day_equality() {
        let now = noon();
        let mut watered = plant(1, false, 0);
        // Early morning of the same calendar day, hours before `now`.
        watered.last_watered_at = Some(
            date(2025, 3, 5)
                .at(0, 30, 0, 0)
                .to_zoned(TimeZone::UTC)
                .unwrap()
                .timestamp(),
        );
        let snapshot = build_snapshot(&[watered.clone()], &[], &now);
        assert!(snapshot.watered_today);

        // The previous evening does not count.
        watered.last_watered_at = Some(
            date(2025, 3, 4)
                .at(23, 59, 0, 0)
                .to_zoned(TimeZone::UTC)
                .unwrap()
                .timestamp(),
        );
        let snapshot = build_snapshot(&[watered], &[], &now);
        assert!(!snapshot.watered_today);
    }

    #[test]
    fn test_qualifying_group_threshold() {
        let small = GroupFact {
            name: "balcony".to_string(),
            member_count: QUALIFYING_GROUP_SIZE - 1,
        };
        let big = GroupFact {
            name: "community".to_string(),
            member_count: QUALIFYING_GROUP_SIZE,
        };

        assert!(!build_snapshot(&[], std::slice::from_ref(&small), &noon()).has_qualifying_group);
        assert!(build_snapshot(&[], &[small, big], &noon()).has_qualifying_group);
    }
}
