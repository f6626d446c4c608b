//! Weekly Nudge Counter
//!
//! A counter clamped to `[0, target]` plus an append-only history of
//! archived weeks.

use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

use crate::progress::compute_progress;

/// `ceil(days_since_jan_1 / 7)`, counting whole days elapsed since local
/// midnight on January 1 of `now`'s year. A display label, not an ISO week.
pub fn compute_week_number<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    let days = now.ordinal0();
    days.div_ceil(7)
}

/// One archived week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    pub week_number: u32,
    pub completed: u32,
}

impl WeekRecord {
    pub fn progress(&self, target: NonZeroU32) -> u32 {
        compute_progress(self.completed, target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCounter {
    pub current: u32,
    pub target: NonZeroU32,
    pub history: Vec<WeekRecord>,
}

impl WeeklyCounter {
    /// `current` above `target` is clamped down to `target`.
    pub fn new(current: u32, target: NonZeroU32, history: Vec<WeekRecord>) -> Self {
        Self { current: current.min(target.get()), target, history }
    }

    pub fn progress(&self) -> u32 {
        compute_progress(self.current, self.target)
    }

    pub fn increment(&self) -> Self {
        if self.current >= self.target.get() {
            return self.clone();
        }
        Self { current: self.current + 1, ..self.clone() }
    }

    pub fn decrement(&self) -> Self {
        if self.current == 0 {
            return self.clone();
        }
        Self { current: self.current - 1, ..self.clone() }
    }

    /// Archive the current count under this week's number and start over at
    /// zero. Resetting twice in one week archives two records.
    pub fn reset_week<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Self {
        let record = WeekRecord {
            week_number: compute_week_number(now),
            completed: self.current,
        };
        log::debug!("archived week {} with {} nudges", record.week_number, record.completed);
        let mut history = self.history.clone();
        history.push(record);
        Self { current: 0, target: self.target, history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use proptest::prelude::*;

    fn counter(current: u32, target: u32) -> WeeklyCounter {
        WeeklyCounter::new(current, NonZeroU32::new(target).unwrap(), Vec::new())
    }

    #[test]
    fn test_week_number() {
        let jan1 = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(compute_week_number(&jan1), 0);
        let jan2 = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(compute_week_number(&jan2), 1);
        let jan8 = Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap();
        assert_eq!(compute_week_number(&jan8), 1);
        let jan9 = Utc.with_ymd_and_hms(2025, 1, 9, 0, 0, 0).unwrap();
        assert_eq!(compute_week_number(&jan9), 2);
    }

    #[test]
    fn test_week_number_uses_local_calendar() {
        // 23:30 UTC on Jan 7 is already Jan 8 in UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 7, 23, 30, 0).unwrap().with_timezone(&offset);
        assert_eq!(compute_week_number(&now), 1);
        let now = Utc.with_ymd_and_hms(2025, 1, 8, 23, 30, 0).unwrap().with_timezone(&offset);
        assert_eq!(compute_week_number(&now), 2);
    }

    #[test]
    fn test_increment_clamps_at_target() {
        let mut c = counter(3, 10);
        for _ in 0..7 {
            c = c.increment();
        }
        assert_eq!(c.current, 10);
        assert_eq!(c.increment().current, 10);
        assert_eq!(c.progress(), 100);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let c = counter(0, 10);
        assert_eq!(c.decrement().current, 0);
        assert_eq!(counter(1, 10).decrement().current, 0);
    }

    #[test]
    fn test_new_clamps_seed() {
        assert_eq!(counter(15, 10).current, 10);
    }

    #[test]
    fn test_reset_week_archives_count() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap();
        let c = counter(6, 10);
        let reset = c.reset_week(&now);
        assert_eq!(reset.current, 0);
        assert_eq!(reset.history, vec![WeekRecord { week_number: 22, completed: 6 }]);

        // Same week again: duplicate week numbers are kept
        let again = reset.increment().reset_week(&now);
        assert_eq!(again.history.len(), 2);
        assert_eq!(again.history[1], WeekRecord { week_number: 22, completed: 1 });
    }

    #[test]
    fn test_week_record_progress() {
        let target = NonZeroU32::new(10).unwrap();
        assert_eq!(WeekRecord { week_number: 20, completed: 8 }.progress(target), 80);
        assert_eq!(WeekRecord { week_number: 21, completed: 12 }.progress(target), 100);
    }

    proptest! {
        #[test]
        fn increment_then_decrement_restores(current in 0u32..=10) {
            let c = counter(current, 10);
            let round_trip = c.increment().decrement();
            if current == 10 {
                prop_assert_eq!(round_trip.current, 9);
            } else {
                prop_assert_eq!(round_trip.current, current);
            }
        }

        #[test]
        fn decrement_then_increment_restores(current in 0u32..=10) {
            let c = counter(current, 10);
            let round_trip = c.decrement().increment();
            if current == 0 {
                prop_assert_eq!(round_trip.current, 1);
            } else {
                prop_assert_eq!(round_trip.current, current);
            }
        }
    }
}
