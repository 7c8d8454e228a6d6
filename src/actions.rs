//! Todo Actions
//!
//! Mutations the list view relays to whoever owns the collection.

use leptos::prelude::*;

use crate::models::TodoId;

/// Mutation interface injected into the list view
pub trait TodoActions {
    /// Flip the completion state of an item
    fn toggle_complete(&self, id: TodoId);
    /// Delete an item
    fn remove(&self, id: TodoId);
    /// Replace an item's text
    fn update(&self, id: TodoId, text: String);
}

/// `TodoActions` backed by component callbacks
#[derive(Clone, Copy)]
pub struct TodoCallbacks {
    pub on_toggle: Callback<TodoId>,
    pub on_remove: Callback<TodoId>,
    pub on_update: Callback<(TodoId, String)>,
}

impl TodoActions for TodoCallbacks {
    fn toggle_complete(&self, id: TodoId) {
        self.on_toggle.run(id);
    }

    fn remove(&self, id: TodoId) {
        self.on_remove.run(id);
    }

    fn update(&self, id: TodoId, text: String) {
        self.on_update.run((id, text));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::TodoActions;
    use crate::models::TodoId;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Toggle(TodoId),
        Remove(TodoId),
        Update(TodoId, String),
    }

    /// Records every invocation in order
    #[derive(Default)]
    pub struct RecordingActions {
        calls: RefCell<Vec<Call>>,
    }

    impl RecordingActions {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl TodoActions for RecordingActions {
        fn toggle_complete(&self, id: TodoId) {
            self.calls.borrow_mut().push(Call::Toggle(id));
        }

        fn remove(&self, id: TodoId) {
            self.calls.borrow_mut().push(Call::Remove(id));
        }

        fn update(&self, id: TodoId, text: String) {
            self.calls.borrow_mut().push(Call::Update(id, text));
        }
    }
}
