//! Todo List Component
//!
//! Owns the collection and wires the add form and list view to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoView};
use crate::config::AppConfig;
use crate::models::TodoId;
use crate::store::{
    store_add_todo, store_remove_todo, store_toggle_todo, store_update_todo, todos_signal, AppState,
    AppStore,
};
use crate::todos::remaining_count;

#[component]
pub fn TodoList() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store: AppStore = Store::new(AppState::default());
    let todos = todos_signal(store);

    // Rejections are logged by the store helpers
    let add = move |text: String| {
        let _ = store_add_todo(&store, &text);
    };
    let toggle = move |id: TodoId| {
        let _ = store_toggle_todo(&store, id);
    };
    let remove = move |id: TodoId| {
        let _ = store_remove_todo(&store, id);
    };
    let update = move |(id, text): (TodoId, String)| {
        let _ = store_update_todo(&store, id, &text);
    };

    view! {
        <div class="todo-app">
            <h1>{config.title}</h1>
            <TodoForm on_submit=add />
            <TodoView todos=todos on_toggle=toggle on_remove=remove on_update=update />
            <p class="todo-count">
                {move || todos.with(|items| format!("{} of {} left", remaining_count(items), items.len()))}
            </p>
        </div>
    }
}
