//! Row Model
//!
//! Pure mapping from (collection, selection) to what the list view shows.

use crate::models::{TodoId, TodoItem};
use crate::selection::{EditDraft, EditSelection};

pub const ROW_CLASS: &str = "todo-row";
pub const ROW_CLASS_COMPLETE: &str = "todo-row complete";

pub fn row_class(is_complete: bool) -> &'static str {
    if is_complete {
        ROW_CLASS_COMPLETE
    } else {
        ROW_CLASS
    }
}

/// Display data for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub class: &'static str,
}

impl From<&TodoItem> for TodoRow {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            class: row_class(item.is_complete),
        }
    }
}

/// One row per item, in collection order
pub fn render_rows(items: &[TodoItem]) -> Vec<TodoRow> {
    items.iter().map(TodoRow::from).collect()
}

/// What the list view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Only the edit form
    Form(EditDraft),
    Rows(Vec<TodoRow>),
}

impl ListView {
    pub fn of(items: &[TodoItem], selection: &EditSelection) -> Self {
        match selection.draft() {
            Some(draft) => ListView::Form(draft.clone()),
            None => ListView::Rows(render_rows(items)),
        }
    }

    /// Draft shown by the form; `None` while rows are shown
    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            ListView::Form(draft) => Some(draft),
            ListView::Rows(_) => None,
        }
    }

    /// Row ids in display order
    pub fn row_ids(&self) -> Vec<TodoId> {
        match self {
            ListView::Rows(rows) => rows.iter().map(|row| row.id).collect(),
            ListView::Form(_) => Vec::new(),
        }
    }

    pub fn row(&self, id: TodoId) -> Option<&TodoRow> {
        match self {
            ListView::Rows(rows) => rows.iter().find(|row| row.id == id),
            ListView::Form(_) => None,
        }
    }
}
