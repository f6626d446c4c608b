//! Outreach Tracker Component
//!
//! Favour counter against the outreach target, with a grant form and the
//! recent-favours list.

use leptos::prelude::*;

use crate::components::{FavourList, ProgressBar};
use crate::context::AppContext;
use crate::format::{days_left_label, fraction};
use crate::store::{store_update_outreach, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn OutreachTracker() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let (recipient, set_recipient) = signal(String::new());

    let progress = Signal::derive(move || store.outreach().with(|c| c.progress()));
    let favours = Signal::derive(move || store.outreach().with(|c| c.favours.clone()));
    let favour_limit = ctx.settings.with_value(|s| s.recent_favour_limit);

    let grant = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = recipient.get_untracked();
        let stamp = ctx.stamp();
        if store_update_outreach(&store, |counter| counter.grant(&name, stamp, &ctx.toasts)) {
            log::info!("[OUTREACH] favour granted to {}", name.trim());
            set_recipient.set(String::new());
        }
    };

    view! {
        <section class="card tracker">
            <h2 class="card-title">"Outreach Progress"</h2>
            <div class="tracker-row">
                <span class="tracker-count">
                    {move || store.outreach().with(|c| fraction(c.current, c.target))}
                </span>
                <span class="tracker-deadline">
                    {move || store.outreach().with(|c| days_left_label(c.days_left(ctx.now()), c.end_date))}
                </span>
            </div>
            <ProgressBar value=progress />
            <div class="tracker-footer">
                <span>{move || format!("{}% Complete", progress.get())}</span>
                <span>{move || store.outreach().with(|c| format!("Target: {} Outreaches", c.target))}</span>
            </div>

            <form class="grant-form" on:submit=grant>
                <input
                    type="text"
                    placeholder="Recipient name"
                    prop:value=move || recipient.get()
                    on:input=move |ev| set_recipient.set(event_target_value(&ev))
                />
                <button type="submit">"Grant Favour"</button>
            </form>

            <FavourList favours=favours limit=favour_limit />
        </section>
    }
}
