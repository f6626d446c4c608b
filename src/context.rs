//! Application Context
//!
//! Shared services provided via Leptos Context API.

use chrono::{DateTime, Utc};
use dashboard_core::{Clock, IdGenerator, Stamp, SystemClock, UiSettings};
use leptos::prelude::*;

use crate::toast::ToastQueue;

/// App-wide services: id source, toast sink and UI settings
#[derive(Clone, Copy)]
pub struct AppContext {
    ids: StoredValue<IdGenerator>,
    /// Notification sink handed to domain operations
    pub toasts: ToastQueue,
    pub settings: StoredValue<UiSettings>,
}

impl AppContext {
    pub fn new(ids: IdGenerator, settings: UiSettings) -> Self {
        Self {
            ids: StoredValue::new(ids),
            toasts: ToastQueue::new(settings.toast_duration_ms),
            settings: StoredValue::new(settings),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        SystemClock.now()
    }

    /// Fresh id and timestamp for a new record
    pub fn stamp(&self) -> Stamp {
        self.ids.with_value(|ids| ids.stamp(&SystemClock))
    }
}
