//! Todo Form Component
//!
//! Single-input form used both to add items and to edit one in place.

use leptos::html;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::selection::EditDraft;
use crate::todos::validate_text;

/// Add form, or edit form when `edit` is given
///
/// # Arguments
/// * `edit` - Draft to pre-fill; switches labels to edit mode and focuses the input
/// * `on_submit` - Called once per accepted submit with the trimmed text
/// * `on_cancel` - Shows a cancel button when set
#[component]
pub fn TodoForm(
    #[prop(optional)] edit: Option<EditDraft>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let is_edit = edit.is_some();
    let (input_text, set_input_text) = signal(edit.map(|draft| draft.text).unwrap_or_default());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_text(&input_text.get_untracked()) {
            Ok(text) => {
                set_input_text.set(String::new());
                on_submit.run(text);
            }
            Err(e) => log::debug!("[FORM] {}", e),
        }
    };

    let placeholder = if is_edit { config.edit_placeholder } else { config.add_placeholder };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                class={if is_edit { "todo-input edit" } else { "todo-input" }}
                placeholder=placeholder
                node_ref=input_ref
                prop:value=move || input_text.get()
                on:input=move |ev| set_input_text.set(event_target_value(&ev))
            />
            <button type="submit" class={if is_edit { "todo-button edit" } else { "todo-button" }}>
                {if is_edit { "Update" } else { "Add todo" }}
            </button>
            {on_cancel.map(|cancel| view! {
                <button type="button" class="cancel-btn" on:click=move |_| cancel.run(())>
                    "Cancel"
                </button>
            })}
        </form>
    }
}
