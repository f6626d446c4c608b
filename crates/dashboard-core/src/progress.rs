//! Outreach Progress
//!
//! Counts favours granted against a fixed target and end date. The raw
//! count is not clamped; only the displayed percentage is.

use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Stamp;
use crate::entity::{DomainResult, EntityId};
use crate::notify::{Notice, Notifier};
use crate::require_text;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// `round(100 * current / target)`, halves rounded up, clamped to 100.
pub fn compute_progress(current: u32, target: NonZeroU32) -> u32 {
    let current = u64::from(current);
    let target = u64::from(target.get());
    let pct = (200 * current + target) / (2 * target);
    pct.min(100) as u32
}

/// Whole days from `now` until midnight UTC of `end_date`, rounded up.
/// Negative once the end date has passed.
pub fn compute_days_left(now: DateTime<Utc>, end_date: NaiveDate) -> i64 {
    let end = end_date.and_time(NaiveTime::default()).and_utc();
    let diff = (end - now).num_milliseconds();
    -(-diff).div_euclid(MILLIS_PER_DAY)
}

/// A granted favour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favour {
    pub id: EntityId,
    pub recipient_name: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressCounter {
    pub current: u32,
    pub target: NonZeroU32,
    pub end_date: NaiveDate,
    /// Newest first
    pub favours: Vec<Favour>,
}

impl ProgressCounter {
    pub fn new(current: u32, target: NonZeroU32, end_date: NaiveDate) -> Self {
        Self { current, target, end_date, favours: Vec::new() }
    }

    pub fn progress(&self) -> u32 {
        compute_progress(self.current, self.target)
    }

    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        compute_days_left(now, self.end_date)
    }

    /// Record a favour for `recipient_name`. A blank name is rejected with
    /// an error notice and no state change.
    pub fn grant(&self, recipient_name: &str, stamp: Stamp, notifier: &dyn Notifier) -> DomainResult<Self> {
        let name = match require_text(recipient_name, "recipient name") {
            Ok(name) => name,
            Err(err) => {
                log::debug!("grant rejected: {}", err);
                notifier.notify(Notice::error(
                    "Recipient required",
                    "Enter a recipient name before granting a favour.",
                ));
                return Err(err);
            }
        };

        let mut favours = Vec::with_capacity(self.favours.len() + 1);
        favours.push(Favour { id: stamp.id, recipient_name: name.clone(), date: stamp.at });
        favours.extend(self.favours.iter().cloned());

        let next = Self {
            current: self.current + 1,
            favours,
            ..self.clone()
        };
        log::debug!("favour granted to {} ({}/{})", name, next.current, next.target);
        notifier.notify(Notice::success("Favour granted", format!("Favour recorded for {}.", name)));
        Ok(next)
    }
}
