//! Favour List Component
//!
//! Newest-first list of granted favours, collapsed to a few entries.

use chrono::Local;
use dashboard_core::{Favour, RecipientLog};
use leptos::prelude::*;

use crate::format::short_date;

#[component]
pub fn FavourList(favours: Signal<Vec<Favour>>, limit: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let log = RecipientLog::with_limit(limit);

    move || {
        let favours = favours.get();
        let is_expanded = expanded.get();
        let recipients = log.render(&favours, is_expanded);
        if recipients.is_hidden() {
            return None;
        }

        let toggle_label = if is_expanded {
            "Show less ▲".to_string()
        } else {
            format!("Show all ({}) ▼", recipients.total)
        };
        let rows = recipients
            .entries
            .iter()
            .map(|favour| {
                let date = short_date(&favour.date.with_timezone(&Local));
                view! {
                    <li class="favour-row">
                        <span class="favour-name">{favour.recipient_name.clone()}</span>
                        <span class="favour-date">{date}</span>
                    </li>
                }
            })
            .collect_view();

        Some(view! {
            <div class="favour-list">
                <div class="favour-list-header">
                    <h4>"Recent Favours Granted"</h4>
                    {recipients.has_more.then(|| view! {
                        <button
                            class="ghost small"
                            on:click=move |_| set_expanded.update(|v| *v = !*v)
                        >
                            {toggle_label}
                        </button>
                    })}
                </div>
                <ul>{rows}</ul>
            </div>
        })
    }
}
