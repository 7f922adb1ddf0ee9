//! UI Components
//!
//! Leptos components of the reorder page.

mod action_bar;
mod delete_confirm_button;
mod position_modal;
mod search_bar;
mod selection_bar;
mod sortable_row;
mod staff_reorder_page;

pub use action_bar::ActionBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use position_modal::PositionModal;
pub use search_bar::SearchBar;
pub use selection_bar::SelectionBar;
pub use sortable_row::SortableRow;
pub use staff_reorder_page::StaffReorderPage;
