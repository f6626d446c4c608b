//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod toaster;
mod progress_bar;
mod delete_confirm_button;
mod outreach_tracker;
mod favour_list;
mod weekly_tracker;
mod task_board;
mod task_card;
mod add_task_dialog;
mod rename_member_dialog;
mod contact_log;

pub use header::Header;
pub use toaster::Toaster;
pub use progress_bar::ProgressBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use outreach_tracker::OutreachTracker;
pub use favour_list::FavourList;
pub use weekly_tracker::WeeklyTracker;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use add_task_dialog::AddTaskDialog;
pub use rename_member_dialog::RenameMemberDialog;
pub use contact_log::ContactLog;
