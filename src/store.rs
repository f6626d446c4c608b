//! Dashboard State Store
//!
//! Uses Leptos reactive_stores so each widget only tracks its own field.
//! Widgets never read each other's fields; only export reads them all.

use dashboard_core::{
    ContactLog, DashboardConfig, DomainResult, ProgressCounter, TaskBoard, WeeklyCounter,
};
use leptos::prelude::*;
use reactive_stores::Store;

/// Every widget's state, one field per widget
#[derive(Clone, Debug, Store)]
pub struct DashboardState {
    pub board: TaskBoard,
    pub outreach: ProgressCounter,
    pub nudges: WeeklyCounter,
    pub contacts: ContactLog,
}

impl DashboardState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            board: config.build_board(),
            outreach: config.build_progress(),
            nudges: config.build_weekly(),
            contacts: ContactLog::new(),
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper computes the next value from an untracked read and swaps it
// in whole. On error the field is left untouched and `false` is returned.

/// Replace the board with the result of `f`
pub fn store_update_board<F>(store: &DashboardStore, f: F) -> bool
where
    F: FnOnce(&TaskBoard) -> DomainResult<TaskBoard>,
{
    match store.board().with_untracked(f) {
        Ok(next) => {
            *store.board().write() = next;
            true
        }
        Err(err) => {
            log::debug!("board unchanged: {}", err);
            false
        }
    }
}

/// Replace the outreach counter with the result of `f`
pub fn store_update_outreach<F>(store: &DashboardStore, f: F) -> bool
where
    F: FnOnce(&ProgressCounter) -> DomainResult<ProgressCounter>,
{
    match store.outreach().with_untracked(f) {
        Ok(next) => {
            *store.outreach().write() = next;
            true
        }
        Err(err) => {
            log::debug!("outreach unchanged: {}", err);
            false
        }
    }
}

/// Replace the weekly counter; its operations are total
pub fn store_update_nudges<F>(store: &DashboardStore, f: F)
where
    F: FnOnce(&WeeklyCounter) -> WeeklyCounter,
{
    let next = store.nudges().with_untracked(f);
    *store.nudges().write() = next;
}

/// Replace the contact log with the result of `f`
pub fn store_update_contacts<F>(store: &DashboardStore, f: F) -> bool
where
    F: FnOnce(&ContactLog) -> DomainResult<ContactLog>,
{
    match store.contacts().with_untracked(f) {
        Ok(next) => {
            *store.contacts().write() = next;
            true
        }
        Err(err) => {
            log::debug!("contacts unchanged: {}", err);
            false
        }
    }
}
