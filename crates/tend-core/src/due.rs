//! Due computation for weekly recurrence patterns.
//!
//! Pure functions only: no I/O, no clock reads. The evaluation instant is
//! always supplied by the caller as a [`Zoned`], and the timezone attached
//! to it governs all calendar arithmetic. Malformed input never raises:
//! it degrades to "no occurrence" / "not due".

use jiff::{Timestamp, ToSpan, Zoned};

use crate::models::{RecurrencePattern, ScheduleState};

/// Returns the latest scheduled occurrence of `pattern` at or before
/// `now`, or `None` when the pattern cannot produce one.
///
/// The scan walks the seven calendar days ending at `now` (offset 0 =
/// today, working backward). For each day whose weekday is in the pattern
/// the candidate instant is that day's date combined with the pattern's
/// time-of-day in `now`'s timezone; the first candidate at or before `now`
/// wins. Any weekly pattern with at least one weekday fires within any
/// 7-day window, so the scan is bounded at seven days.
pub fn latest_scheduled_occurrence(pattern: &RecurrencePattern, now: &Zoned) -> Option<Zoned> {
    let time_of_day = pattern.time_of_day()?;
    if pattern.weekdays().is_empty() {
        return None;
    }

    for offset in 0i64..7 {
        let Ok(date) = now.date().checked_sub(offset.days()) else {
            continue;
        };
        if !pattern.weekdays().contains(&date.weekday()) {
            continue;
        }
        let Ok(candidate) = date.to_datetime(time_of_day).to_zoned(now.time_zone().clone())
        else {
            continue;
        };
        if candidate.timestamp() <= now.timestamp() {
            return Some(candidate);
        }
    }

    None
}

/// Decides whether a recurring task is currently due.
///
/// A task is due when its latest scheduled occurrence exists and no
/// qualifying completion happened at or after it. A caller holding an
/// unparsable completion timestamp maps it to `None` at the boundary,
/// which counts as "never completed" and therefore due.
pub fn is_due(pattern: &RecurrencePattern, last_completed_at: Option<Timestamp>, now: &Zoned) -> bool {
    let Some(occurrence) = latest_scheduled_occurrence(pattern, now) else {
        return false;
    };
    match last_completed_at {
        None => true,
        Some(completed) => completed < occurrence.timestamp(),
    }
}

impl ScheduleState {
    /// Latest scheduled occurrence for this schedule at or before `now`.
    pub fn latest_occurrence(&self, now: &Zoned) -> Option<Zoned> {
        latest_scheduled_occurrence(&self.pattern, now)
    }

    /// Whether this schedule is currently due.
    pub fn is_due(&self, now: &Zoned) -> bool {
        is_due(&self.pattern, self.last_completed_at, now)
    }
}
