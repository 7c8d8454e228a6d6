//! Todo Row Component
//!
//! One item in the list with delete and edit icons.

use leptos::prelude::*;

use crate::rows::TodoRow;
use crate::selection::RowEvent;

#[component]
pub fn TodoRowView(
    row: TodoRow,
    #[prop(into)] on_event: Callback<RowEvent>,
) -> impl IntoView {
    view! {
        <div class=row.class>
            <div class="todo-text" on:click=move |_| on_event.run(RowEvent::Body)>
                {row.text}
            </div>
            <div class="icons">
                <span
                    class="delete-icon"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_event.run(RowEvent::Delete);
                    }
                >
                    "×"
                </span>
                <span
                    class="edit-icon"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_event.run(RowEvent::Edit);
                    }
                >
                    "✎"
                </span>
            </div>
        </div>
    }
}
