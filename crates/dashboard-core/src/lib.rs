//! Dashboard Domain Layer
//!
//! Pure state for the outreach dashboard:
//! - board: team members and their tasks (kanban)
//! - progress: outreach/favour counter against a target and end date
//! - weekly: weekly nudge counter with archived week history
//! - favours: recipient log view over granted favours
//! - contacts: contact notes log
//!
//! Every mutation takes `&self` and returns a new value, so the previous
//! snapshot is never partially modified. This crate has no wasm or DOM
//! dependencies and is tested natively.

mod entity;
mod clock;
mod notify;
mod board;
mod progress;
mod weekly;
mod favours;
mod contacts;
mod config;
mod snapshot;

#[cfg(test)]
mod tests;

pub use entity::{DomainError, DomainResult, EntityId};
pub use clock::{Clock, FixedClock, IdGenerator, Stamp, SystemClock};
pub use notify::{Notice, Notifier, Severity};
pub use board::{Task, TaskBoard, TeamMember};
pub use progress::{compute_days_left, compute_progress, Favour, ProgressCounter};
pub use weekly::{compute_week_number, WeekRecord, WeeklyCounter};
pub use favours::{RecipientLog, RecipientView};
pub use contacts::{Contact, ContactLog};
pub use config::{DashboardConfig, KpiSeed, MemberSeed, UiSettings, WeeklySeed};
pub use snapshot::DashboardSnapshot;

/// Trim user input, rejecting values that are empty afterwards.
pub(crate) fn require_text(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} is empty", field)));
    }
    Ok(trimmed.to_string())
}
