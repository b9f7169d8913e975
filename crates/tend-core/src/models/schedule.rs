//! Watering schedule values consumed by the due engine.

use jiff::civil::{Time, Weekday};
use jiff::{Timestamp, Zoned};

use super::Plant;

/// A weekly recurrence: the set of weekdays a care task fires on and a
/// single time-of-day shared by all of them.
///
/// Weekday numbers at the construction boundary are Sunday-zero
/// (0 = Sunday .. 6 = Saturday), the convention of the upstream export
/// format. Malformed input never produces an error: out-of-range weekday
/// numbers are dropped and an unparsable time string leaves the pattern
/// without a time-of-day, which makes it never due.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurrencePattern {
    weekdays: Vec<Weekday>,
    time_of_day: Option<Time>,
}

impl RecurrencePattern {
    /// Builds a pattern from Sunday-zero weekday numbers and an optional
    /// `"HH:MM"` time string. Duplicates and out-of-range weekdays are
    /// dropped; a malformed time string yields a pattern with no
    /// time-of-day.
    pub fn new(weekdays: &[u8], time_of_day: Option<&str>) -> Self {
        let mut parsed: Vec<Weekday> = weekdays
            .iter()
            .filter_map(|&n| i8::try_from(n).ok())
            .filter_map(|n| Weekday::from_sunday_zero_offset(n).ok())
            .collect();
        parsed.sort_by_key(|w| w.to_sunday_zero_offset());
        parsed.dedup();

        Self {
            weekdays: parsed,
            time_of_day: time_of_day.and_then(Self::parse_time_of_day),
        }
    }

    /// Parses a `"HH:MM"` 24-hour time string, returning `None` for
    /// anything malformed or out of range.
    fn parse_time_of_day(raw: &str) -> Option<Time> {
        let (hour, minute) = raw.split_once(':')?;
        let hour: i8 = hour.trim().parse().ok()?;
        let minute: i8 = minute.trim().parse().ok()?;
        Time::new(hour, minute, 0, 0).ok()
    }

    /// The weekdays this pattern fires on.
    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    /// The time-of-day this pattern fires at, if one was given and valid.
    pub fn time_of_day(&self) -> Option<Time> {
        self.time_of_day
    }

    /// True when the pattern can never produce an occurrence.
    pub fn is_never(&self) -> bool {
        self.weekdays.is_empty() || self.time_of_day.is_none()
    }
}

/// The complete evaluation input for one recurring task: its pattern and
/// the instant it was last completed, if known.
///
/// Built fresh on every evaluation from caller-supplied data; an
/// unparsable completion timestamp maps to `None` at the boundary, which
/// the due engine treats as "never completed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleState {
    /// The recurrence pattern to evaluate
    pub pattern: RecurrencePattern,
    /// Instant of the most recent qualifying completion, if any
    pub last_completed_at: Option<Timestamp>,
}

impl ScheduleState {
    /// Creates a schedule state from a pattern and optional completion.
    pub fn new(pattern: RecurrencePattern, last_completed_at: Option<Timestamp>) -> Self {
        Self {
            pattern,
            last_completed_at,
        }
    }
}

/// One plant's due-engine result, as reported to callers that schedule
/// reminders or render a care list.
#[derive(Debug, Clone)]
pub struct DueEntry {
    /// The plant the schedule belongs to
    pub plant: Plant,
    /// The latest scheduled occurrence at or before the evaluation instant
    pub occurrence: Option<Zoned>,
    /// Whether the task is currently due
    pub due: bool,
}
