//! Collection Operations
//!
//! Mutations the list component applies to its own collection.

use crate::error::{TodoError, TodoResult};
use crate::models::{TodoId, TodoItem};

/// Trim `raw`, rejecting empty or whitespace-only text
pub fn validate_text(raw: &str) -> TodoResult<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(text.to_string())
}

/// New items go to the top of the list
pub fn add_todo(todos: &mut Vec<TodoItem>, text: &str) -> TodoResult<TodoId> {
    let text = validate_text(text)?;
    let id = TodoId::next_after(todos);
    todos.insert(0, TodoItem::new(id, text));
    Ok(id)
}

fn find_mut(todos: &mut [TodoItem], id: TodoId) -> TodoResult<&mut TodoItem> {
    todos
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(TodoError::NotFound(id))
}

/// Returns the new completion state
pub fn toggle_todo(todos: &mut [TodoItem], id: TodoId) -> TodoResult<bool> {
    let item = find_mut(todos, id)?;
    item.is_complete = !item.is_complete;
    Ok(item.is_complete)
}

pub fn remove_todo(todos: &mut Vec<TodoItem>, id: TodoId) -> TodoResult<TodoItem> {
    let index = todos
        .iter()
        .position(|item| item.id == id)
        .ok_or(TodoError::NotFound(id))?;
    Ok(todos.remove(index))
}

/// Replace text, keeping completion state
pub fn update_todo(todos: &mut [TodoItem], id: TodoId, text: &str) -> TodoResult<()> {
    let text = validate_text(text)?;
    find_mut(todos, id)?.text = text;
    Ok(())
}

pub fn remaining_count(todos: &[TodoItem]) -> usize {
    todos.iter().filter(|item| !item.is_complete).count()
}
