//! Outreach Dashboard App
//!
//! Header, the two progress trackers, the team task board and the contact
//! log. Each widget owns one field of the store.

use dashboard_core::{DashboardConfig, IdGenerator};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContactLog, Header, OutreachTracker, TaskBoard, Toaster, WeeklyTracker};
use crate::context::AppContext;
use crate::store::DashboardState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let state = DashboardState::from_config(&config);
    // Runtime ids must stay clear of the seeded ones
    let ids = IdGenerator::starting_after(state.board.max_id());

    provide_context(Store::new(state));
    provide_context(AppContext::new(ids, config.ui.clone()));

    view! {
        <div class="app-layout">
            <Header />
            <Toaster />
            <main class="main-content">
                <div class="tracker-grid">
                    <OutreachTracker />
                    <WeeklyTracker />
                </div>
                <TaskBoard />
                <ContactLog />
            </main>
        </div>
    }
}
