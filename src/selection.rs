//! Edit Selection
//!
//! Local state of the list view: which item, if any, is being edited.
//!
//! ```text
//! Idle --[edit item X]--> Editing(X.id, X.text)
//! Editing --[submit]--> Idle   (relays update)
//! Editing --[cancel]--> Idle
//! ```

use crate::actions::TodoActions;
use crate::models::TodoId;
use crate::rows::TodoRow;

/// Item being edited and its starting text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TodoId,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSelection {
    #[default]
    Idle,
    Editing(EditDraft),
}

/// Click targets within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// Row body: toggles completion
    Body,
    Delete,
    Edit,
}

impl EditSelection {
    /// Start editing, replacing any previous draft
    pub fn begin(id: TodoId, text: impl Into<String>) -> Self {
        EditSelection::Editing(EditDraft { id, text: text.into() })
    }

    /// Relay the edited text upward and return to `Idle`
    pub fn submit(self, text: String, actions: &impl TodoActions) -> Self {
        if let EditSelection::Editing(draft) = self {
            log::debug!("[TODO] submit edit for #{}", draft.id);
            actions.update(draft.id, text);
        }
        EditSelection::Idle
    }

    pub fn cancel(self) -> Self {
        EditSelection::Idle
    }

    /// Handle a click on `row`; handlers target the row's id, never its position
    pub fn on_row_event(self, event: RowEvent, row: &TodoRow, actions: &impl TodoActions) -> Self {
        match event {
            RowEvent::Body => {
                actions.toggle_complete(row.id);
                self
            }
            RowEvent::Delete => {
                actions.remove(row.id);
                self
            }
            RowEvent::Edit => Self::begin(row.id, row.text.as_str()),
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSelection::Editing(draft) => Some(draft),
            EditSelection::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSelection::Editing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;
    use crate::actions::testing::{Call, RecordingActions};

    fn milk() -> TodoItem {
        TodoItem::new(TodoId(1), "Buy milk")
    }

    fn row(item: &TodoItem) -> TodoRow {
        TodoRow::from(item)
    }

    #[test]
    fn test_starts_idle() {
        let selection = EditSelection::default();
        assert_eq!(selection, EditSelection::Idle);
        assert_eq!(selection.draft(), None);
        assert!(!selection.is_editing());
    }

    #[test]
    fn test_edit_click_begins_editing() {
        let actions = RecordingActions::default();
        let selection = EditSelection::Idle.on_row_event(RowEvent::Edit, &row(&milk()), &actions);

        assert_eq!(
            selection.draft(),
            Some(&EditDraft { id: TodoId(1), text: "Buy milk".to_string() })
        );
        assert!(selection.is_editing());
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_submit_relays_update_once_then_idle() {
        let actions = RecordingActions::default();
        let selection = EditSelection::begin(TodoId(1), "Buy milk").submit("Buy oat milk".to_string(), &actions);

        assert_eq!(selection, EditSelection::Idle);
        assert_eq!(actions.calls(), vec![Call::Update(TodoId(1), "Buy oat milk".to_string())]);
    }

    #[test]
    fn test_submit_while_idle_is_noop() {
        let actions = RecordingActions::default();
        let selection = EditSelection::Idle.submit("ignored".to_string(), &actions);

        assert_eq!(selection, EditSelection::Idle);
        assert!(actions.calls().is_empty());
    }

    #[test]
    fn test_cancel_returns_idle_without_callbacks() {
        let selection = EditSelection::begin(TodoId(1), "Buy milk").cancel();
        assert_eq!(selection, EditSelection::Idle);
        assert!(!selection.is_editing());
    }

    #[test]
    fn test_body_click_toggles_only() {
        let actions = RecordingActions::default();
        let selection = EditSelection::Idle.on_row_event(RowEvent::Body, &row(&milk()), &actions);

        assert_eq!(selection, EditSelection::Idle);
        assert_eq!(actions.calls(), vec![Call::Toggle(TodoId(1))]);
    }

    #[test]
    fn test_delete_click_removes_only_that_item() {
        let actions = RecordingActions::default();
        let items = vec![
            TodoItem::new(TodoId(1), "a"),
            TodoItem::new(TodoId(5), "b"),
            TodoItem::new(TodoId(9), "c"),
        ];

        EditSelection::Idle.on_row_event(RowEvent::Delete, &row(&items[1]), &actions);
        assert_eq!(actions.calls(), vec![Call::Remove(TodoId(5))]);
    }

    #[test]
    fn test_repeated_body_clicks_are_not_guarded() {
        let actions = RecordingActions::default();
        let row = row(&milk());
        let selection = EditSelection::Idle
            .on_row_event(RowEvent::Body, &row, &actions)
            .on_row_event(RowEvent::Body, &row, &actions);

        assert_eq!(selection, EditSelection::Idle);
        assert_eq!(actions.calls(), vec![Call::Toggle(TodoId(1)), Call::Toggle(TodoId(1))]);
    }
}
