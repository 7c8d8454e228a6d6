//! UI Components
//!
//! Leptos components for the to-do list.

mod todo_form;
mod todo_list;
mod todo_row;
mod todo_view;

pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRowView;
pub use todo_view::TodoView;
