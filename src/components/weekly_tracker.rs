//! Weekly Tracker Component
//!
//! Nudge counter for the current week with archived week history.

use chrono::Local;
use dashboard_core::compute_week_number;
use leptos::prelude::*;

use crate::components::ProgressBar;
use crate::context::AppContext;
use crate::format::fraction;
use crate::store::{store_update_nudges, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn WeeklyTracker() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let progress = Signal::derive(move || store.nudges().with(|c| c.progress()));
    let week_number = move || compute_week_number(&ctx.now().with_timezone(&Local));

    let reset_week = move |_| {
        let now = ctx.now().with_timezone(&Local);
        store_update_nudges(&store, |counter| counter.reset_week(&now));
        log::info!("[NUDGES] week reset");
    };

    view! {
        <section class="card tracker">
            <h2 class="card-title">"Weekly Nudges"</h2>
            <div class="tracker-row">
                <span class="tracker-count">
                    {move || store.nudges().with(|c| fraction(c.current, c.target))}
                </span>
                <div class="stepper">
                    <button
                        class="secondary small"
                        on:click=move |_| store_update_nudges(&store, |c| c.decrement())
                    >
                        "-"
                    </button>
                    <button
                        class="small"
                        on:click=move |_| store_update_nudges(&store, |c| c.increment())
                    >
                        "+"
                    </button>
                </div>
            </div>
            <ProgressBar value=progress />
            <div class="tracker-footer">
                <span>{move || format!("{}% Complete", progress.get())}</span>
                <span>{move || format!("Week {}", week_number())}</span>
            </div>

            {move || {
                let counter = store.nudges().get();
                if counter.history.is_empty() {
                    return None;
                }
                let target = counter.target;
                let rows = counter
                    .history
                    .iter()
                    .map(|week| {
                        let pct = week.progress(target);
                        view! {
                            <li class="week-row">
                                <span class="week-label">{format!("Week {}", week.week_number)}</span>
                                <ProgressBar value=Signal::derive(move || pct) class="faded" />
                                <span class="week-count">{fraction(week.completed, target)}</span>
                            </li>
                        }
                    })
                    .collect_view();
                Some(view! {
                    <div class="week-history">
                        <h5>"Previous Weeks"</h5>
                        <ul>{rows}</ul>
                    </div>
                })
            }}

            <button class="secondary full-width" on:click=reset_week>"Reset for New Week"</button>
        </section>
    }
}
