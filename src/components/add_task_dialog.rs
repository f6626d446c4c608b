//! Add Task Dialog
//!
//! Modal form: pick a team member, enter a title.

use dashboard_core::EntityId;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_update_board, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn AddTaskDialog(initial_member: EntityId, open: RwSignal<Option<EntityId>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let (member, set_member) = signal(initial_member);
    let (title, set_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let member_id = member.get_untracked();
        let task_id = ctx.stamp().id;
        let title = title.get_untracked();
        if store_update_board(&store, |board| board.add_task(member_id, &title, task_id)) {
            log::info!("[BOARD] added task {} for member {}", task_id, member_id);
            open.set(None);
        }
    };

    let options = move || {
        store.board().with(|b| {
            b.members()
                .iter()
                .map(|m| (m.id, m.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(None)>
            <form
                class="dialog"
                on:submit=add_task
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <h3>"Add New Task"</h3>
                <label for="task-member">"Team Member"</label>
                <select
                    id="task-member"
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse::<u64>() {
                            set_member.set(EntityId(id));
                        }
                    }
                >
                    {move || options().into_iter().map(|(id, name)| view! {
                        <option value=id.to_string() selected=move || member.get() == id>{name}</option>
                    }).collect_view()}
                </select>
                <label for="task-title">"Task Title"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="Enter task title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <div class="dialog-actions">
                    <button type="button" class="secondary" on:click=move |_| open.set(None)>"Cancel"</button>
                    <button type="submit">"Add Task"</button>
                </div>
            </form>
        </div>
    }
}
