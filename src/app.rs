//! Todo App
//!
//! Root component.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::config::AppConfig;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <main class="app-layout">
            <TodoList />
        </main>
    }
}
