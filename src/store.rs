//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TodoResult;
use crate::models::{TodoId, TodoItem};
use crate::todos;

/// State owned by the list component
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative to-do collection, newest first
    pub todos: Vec<TodoItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Read-only view of the collection
pub fn todos_signal(store: AppStore) -> Signal<Vec<TodoItem>> {
    Signal::derive(move || store.todos().get())
}

fn log_rejected<T>(op: &str, result: &TodoResult<T>) {
    if let Err(e) = result {
        log::warn!("[STORE] {} rejected: {}", op, e);
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_todo(store: &AppStore, text: &str) -> TodoResult<TodoId> {
    let result = todos::add_todo(&mut store.todos().write(), text);
    match &result {
        Ok(id) => log::debug!("[STORE] added #{}", id),
        Err(_) => log_rejected("add", &result),
    }
    result
}

pub fn store_toggle_todo(store: &AppStore, id: TodoId) -> TodoResult<bool> {
    let result = todos::toggle_todo(&mut store.todos().write(), id);
    match &result {
        Ok(done) => log::debug!("[STORE] #{} complete={}", id, done),
        Err(_) => log_rejected("toggle", &result),
    }
    result
}

pub fn store_remove_todo(store: &AppStore, id: TodoId) -> TodoResult<TodoItem> {
    let result = todos::remove_todo(&mut store.todos().write(), id);
    match &result {
        Ok(_) => log::debug!("[STORE] removed #{}", id),
        Err(_) => log_rejected("remove", &result),
    }
    result
}

pub fn store_update_todo(store: &AppStore, id: TodoId, text: &str) -> TodoResult<()> {
    let result = todos::update_todo(&mut store.todos().write(), id, text);
    match &result {
        Ok(()) => log::debug!("[STORE] updated #{}", id),
        Err(_) => log_rejected("update", &result),
    }
    result
}
