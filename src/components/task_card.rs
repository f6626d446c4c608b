//! Task Card Component
//!
//! A draggable card with a completion checkbox and a confirmed delete.

use dashboard_core::{EntityId, Task};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::store::{store_update_board, use_dashboard_store};

use leptos_dragdrop::*;

#[component]
pub fn TaskCard(member_id: EntityId, task: Task, index: usize, dnd: DndSignals) -> impl IntoView {
    let store = use_dashboard_store();
    let task_id = task.id;
    let completed = task.completed;
    let slot = DropTarget::Slot(member_id.get(), index);
    let column = DropTarget::Column(member_id.get());

    let card_class = move || {
        let mut c = String::from("kanban-card");
        if completed { c.push_str(" completed"); }
        if dnd.is_dragging(task_id.get()) { c.push_str(" dragging"); }
        if dnd.is_target(slot) { c.push_str(" drop-target"); }
        c
    };

    let on_toggle = move |_| {
        store_update_board(&store, |board| board.toggle_completion(member_id, task_id));
    };

    let on_remove = Callback::new(move |_: ()| {
        if store_update_board(&store, |board| board.remove_task(member_id, task_id)) {
            log::info!("[BOARD] removed task {}", task_id);
        }
    });

    view! {
        <div
            class=card_class
            on:mousedown=make_on_mousedown(dnd, task_id.get())
            on:mouseenter=make_on_mouseenter(dnd, slot)
            on:mouseleave=make_on_mouseleave(dnd, Some(column))
        >
            <input type="checkbox" checked=completed on:change=on_toggle />
            <span class="task-title">{task.title}</span>
            <DeleteConfirmButton button_class="delete-btn" label="×" on_confirm=on_remove />
        </div>
    }
}
