//! Clock and Identifier Generation
//!
//! Ids are derived from the wall clock in milliseconds and forced to be
//! strictly increasing, so two records created in the same millisecond
//! still get distinct ids.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::entity::EntityId;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the real clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Identifier and creation time for a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub id: EntityId,
    pub at: DateTime<Utc>,
}

/// Shared monotonic id source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Arc<AtomicU64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above `floor`, e.g. the highest seeded id.
    pub fn starting_after(floor: u64) -> Self {
        Self {
            last: Arc::new(AtomicU64::new(floor)),
        }
    }

    /// Next id for a clock reading of `now_ms`: `max(now_ms, last + 1)`.
    pub fn next_id(&self, now_ms: u64) -> EntityId {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(current + 1);
            match self
                .last
                .compare_exchange_weak(current, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return EntityId(candidate),
                Err(actual) => current = actual,
            }
        }
    }

    pub fn stamp(&self, clock: &dyn Clock) -> Stamp {
        let at = clock.now();
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        Stamp {
            id: self.next_id(millis),
            at,
        }
    }
}
