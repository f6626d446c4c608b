//! Header Component
//!
//! Page title and the snapshot export action.

use dashboard_core::{DashboardSnapshot, Notice, Notifier};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::export;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();

    let on_export = move |_| {
        let snapshot = DashboardSnapshot {
            exported_at: ctx.now(),
            board: store.board().get_untracked(),
            outreach: store.outreach().get_untracked(),
            nudges: store.nudges().get_untracked(),
            contacts: store.contacts().get_untracked(),
            recent_log: rolling_logger::recent_lines(),
        };
        match export::download_snapshot(&snapshot) {
            Ok(file_name) => {
                log::info!("[EXPORT] wrote {}", file_name);
                ctx.toasts.notify(Notice::success("Export ready", format!("Downloaded {}.", file_name)));
            }
            Err(err) => {
                log::warn!("[EXPORT] failed: {}", err);
                ctx.toasts.notify(Notice::error("Export failed", err));
            }
        }
    };

    view! {
        <header class="app-header">
            <h1>"Project Dashboard"</h1>
            <button class="primary" on:click=on_export>"Export"</button>
        </header>
    }
}
