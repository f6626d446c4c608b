//! Task Board Component
//!
//! One column per team member. Cards can be dragged between columns using
//! leptos-dragdrop.

use dashboard_core::{EntityId, TaskBoard as Board, TeamMember};
use leptos::prelude::*;

use crate::components::{AddTaskDialog, RenameMemberDialog, TaskCard};
use crate::store::{store_update_board, use_dashboard_store, DashboardStateStoreFields};

use leptos_dragdrop::*;

/// Insert position for a drop, expressed against the column after the
/// dragged card has been taken out of it.
fn drop_position(board: &Board, task_id: EntityId, target: DropTarget) -> usize {
    let column = EntityId(target.column());
    let Some(member) = board.member(column) else {
        return 0;
    };
    let len = member.tasks.len();
    match member.tasks.iter().position(|t| t.id == task_id) {
        // Same column: slots after the card shift up by one once it is removed
        Some(from) => {
            let at = target.position(len);
            if at > from { at - 1 } else { at }
        }
        None => target.position(len),
    }
}

#[component]
pub fn TaskBoard() -> impl IntoView {
    let store = use_dashboard_store();
    let dnd = create_dnd_signals();
    // Which column the add-task dialog targets (None = closed)
    let adding = RwSignal::new(None::<EntityId>);
    // Which member is being renamed (None = closed)
    let renaming = RwSignal::new(None::<EntityId>);

    bind_global_handlers(dnd, move |task, target| {
        let task_id = EntityId(task);
        let to = EntityId(target.column());
        log::info!("[DND] drop task {} on {:?}", task_id, target);
        store_update_board(&store, |board| {
            board.move_task(task_id, to, drop_position(board, task_id, target))
        });
    });

    let open_add_dialog = move |_| {
        let first = store.board().with_untracked(|b| b.members().first().map(|m| m.id));
        adding.set(first);
    };

    view! {
        <section class="task-board">
            <div class="board-header">
                <h2>"Team Tasks"</h2>
                <button on:click=open_add_dialog>"Add Task"</button>
            </div>

            <div class="board-columns">
                <For
                    each=move || store.board().with(|b| b.members().to_vec())
                    key=|member| member.clone()
                    children=move |member| view! {
                        <MemberColumn member=member dnd=dnd adding=adding renaming=renaming />
                    }
                />
            </div>

            {move || adding.get().map(|member_id| view! {
                <AddTaskDialog initial_member=member_id open=adding />
            })}
            {move || {
                let id = renaming.get()?;
                let name = store.board().with(|b| b.member(id).map(|m| m.name.clone()))?;
                Some(view! { <RenameMemberDialog member_id=id current_name=name open=renaming /> })
            }}
        </section>
    }
}

/// A single member column
#[component]
fn MemberColumn(
    member: TeamMember,
    dnd: DndSignals,
    adding: RwSignal<Option<EntityId>>,
    renaming: RwSignal<Option<EntityId>>,
) -> impl IntoView {
    let member_id = member.id;
    let (done, total) = member.tally();
    let column_target = DropTarget::Column(member_id.get());

    let column_class = move || {
        if dnd.is_target(column_target) { "kanban-column drop-target" } else { "kanban-column" }
    };

    let cards = if member.tasks.is_empty() {
        view! { <div class="empty-column">"No tasks yet"</div> }.into_any()
    } else {
        member
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| view! { <TaskCard member_id=member_id task=task index=index dnd=dnd /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div
            class=column_class
            on:mouseenter=make_on_mouseenter(dnd, column_target)
            on:mouseleave=make_on_mouseleave(dnd, None)
        >
            <div class="column-header">
                <h3 class="member-name" title="Rename" on:click=move |_| renaming.set(Some(member_id))>
                    {member.name}
                </h3>
                <span class="column-tally">{format!("{}/{} done", done, total)}</span>
                <button class="ghost small" on:click=move |_| adding.set(Some(member_id))>"+"</button>
            </div>
            <div class="column-cards">{cards}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::DashboardConfig;

    #[test]
    fn test_drop_position_across_columns() {
        let board = DashboardConfig::default().build_board();
        // Task 1 (Alice) dropped before Bob's first card
        assert_eq!(drop_position(&board, EntityId(1), DropTarget::Slot(2, 0)), 0);
        assert_eq!(drop_position(&board, EntityId(1), DropTarget::Column(2)), 1);
    }

    #[test]
    fn test_drop_position_within_column() {
        let board = DashboardConfig::default().build_board();
        // Alice holds tasks 1 and 2; dragging task 1 to the end of her column
        assert_eq!(drop_position(&board, EntityId(1), DropTarget::Column(1)), 1);
        // Dragging task 2 above task 1
        assert_eq!(drop_position(&board, EntityId(2), DropTarget::Slot(1, 0)), 0);
    }

    #[test]
    fn test_drop_position_unknown_column() {
        let board = DashboardConfig::default().build_board();
        assert_eq!(drop_position(&board, EntityId(1), DropTarget::Column(99)), 0);
    }
}
