//! Rename Member Dialog

use dashboard_core::EntityId;
use leptos::prelude::*;

use crate::store::{store_update_board, use_dashboard_store};

#[component]
pub fn RenameMemberDialog(
    member_id: EntityId,
    current_name: String,
    open: RwSignal<Option<EntityId>>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let (name, set_name) = signal(current_name);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = name.get_untracked();
        if store_update_board(&store, |board| board.rename_member(member_id, &new_name)) {
            log::info!("[BOARD] renamed member {} to {}", member_id, new_name.trim());
            open.set(None);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(None)>
            <form
                class="dialog"
                on:submit=save
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <h3>"Edit Team Member"</h3>
                <label for="member-name">"Name"</label>
                <input
                    id="member-name"
                    type="text"
                    placeholder="Enter member name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <div class="dialog-actions">
                    <button type="button" class="secondary" on:click=move |_| open.set(None)>"Cancel"</button>
                    <button type="submit">"Save"</button>
                </div>
            </form>
        </div>
    }
}
