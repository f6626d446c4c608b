//! Toast Notifications
//!
//! Reactive queue of notices; each one dismisses itself after a delay.

use dashboard_core::{Notice, Notifier, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.notice.severity {
            Severity::Success => "toast success",
            Severity::Info => "toast info",
            Severity::Error => "toast error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl ToastQueue {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        self.next_id.update_value(|n| *n += 1);
        let id = self.next_id.get_value();
        log::info!("toast {}: {}", notice.title, notice.message);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(queue.duration_ms).await;
            queue.dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_class() {
        let toast = Toast { id: 1, notice: Notice::error("Recipient required", "Enter a name") };
        assert_eq!(toast.class(), "toast error");
        let toast = Toast { id: 2, notice: Notice::info("News deleted", "Removed") };
        assert_eq!(toast.class(), "toast info");
    }
}
