//! Todo View Component
//!
//! Renders the collection as rows, or the edit form while one item is being edited.

use leptos::prelude::*;

use crate::actions::TodoCallbacks;
use crate::components::{TodoForm, TodoRowView};
use crate::models::{TodoId, TodoItem};
use crate::rows::ListView;
use crate::selection::{EditSelection, RowEvent};

/// List/edit renderer
///
/// The collection is read-only here; every mutation goes through the callbacks.
#[component]
pub fn TodoView(
    #[prop(into)] todos: Signal<Vec<TodoItem>>,
    #[prop(into)] on_toggle: Callback<TodoId>,
    #[prop(into)] on_remove: Callback<TodoId>,
    #[prop(into)] on_update: Callback<(TodoId, String)>,
) -> impl IntoView {
    let actions = TodoCallbacks { on_toggle, on_remove, on_update };
    let selection = RwSignal::new(EditSelection::Idle);

    let view_state = Memo::new(move |_| todos.with(|items| selection.with(|sel| ListView::of(items, sel))));
    // Changes only on selection transitions, so collection writes never remount the form
    let editing = Memo::new(move |_| view_state.with(|view| view.draft().cloned()));

    let submit_edit = move |text: String| {
        let current = selection.get_untracked();
        selection.set(current.submit(text, &actions));
    };
    let cancel_edit = move |_: ()| {
        log::debug!("[TODO] edit cancelled");
        selection.set(selection.get_untracked().cancel());
    };

    move || match editing.get() {
        Some(draft) => view! {
            <TodoForm edit=draft on_submit=submit_edit on_cancel=cancel_edit />
        }
        .into_any(),
        None => view! {
            <For
                each=move || view_state.with(|view| view.row_ids())
                key=|id| *id
                children=move |id: TodoId| {
                    let row = Memo::new(move |_| view_state.with(|view| view.row(id).cloned()));
                    move || row.get().map(|row| {
                        let target = row.clone();
                        let on_event = move |event: RowEvent| {
                            let next = selection.get_untracked().on_row_event(event, &target, &actions);
                            if next.is_editing() {
                                selection.set(next);
                            }
                        };
                        view! { <TodoRowView row=row on_event=on_event /> }
                    })
                }
            />
        }
        .into_any(),
    }
}
