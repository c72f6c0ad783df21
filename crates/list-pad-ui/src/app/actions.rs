//! List actions triggered by buttons, menus, and shortcuts.

use list_pad_core::ListError;

use super::App;

/// One user-facing list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    AddTail,
    PushHead,
    PopTail,
    Remove,
    Undo,
    Redo,
    Traverse,
    PopIndex,
}

impl ListAction {
    /// Button order of the input panel.
    pub const ALL: [ListAction; 8] = [
        ListAction::AddTail,
        ListAction::PushHead,
        ListAction::PopTail,
        ListAction::Remove,
        ListAction::Undo,
        ListAction::Redo,
        ListAction::Traverse,
        ListAction::PopIndex,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ListAction::AddTail => "Add (Tail)",
            ListAction::PushHead => "Push (Head)",
            ListAction::PopTail => "Pop (Tail)",
            ListAction::Remove => "Remove",
            ListAction::Undo => "Undo",
            ListAction::Redo => "Redo",
            ListAction::Traverse => "Traverse",
            ListAction::PopIndex => "Pop Index",
        }
    }

    /// Hover text for the button.
    pub fn tooltip(self) -> &'static str {
        match self {
            ListAction::AddTail => "Append the input at the tail (Enter)",
            ListAction::PushHead => "Insert the input at the head",
            ListAction::PopTail => "Remove the last element",
            ListAction::Remove => "Remove the first element equal to the input",
            ListAction::Undo => "Restore the previous state (Ctrl+Z)",
            ListAction::Redo => "Restore the next state (Ctrl+Y)",
            ListAction::Traverse => "Show the list head to tail (Ctrl+T)",
            ListAction::PopIndex => "Remove the element at the index typed in the input",
        }
    }
}

impl App {
    /// Runs `action` against the session and updates the UI state.
    pub fn perform(&mut self, action: ListAction) {
        match action {
            ListAction::AddTail => {
                let result = self.session.add_tail(&self.input);
                self.finish_input_action(result);
            }
            ListAction::PushHead => {
                let result = self.session.push_head(&self.input);
                self.finish_input_action(result);
            }
            ListAction::Remove => {
                let result = self.session.remove_value(&self.input);
                self.finish_input_action(result);
            }
            ListAction::PopIndex => {
                let result = self.session.pop_index(&self.input);
                self.finish_input_action(result);
            }
            ListAction::PopTail => {
                if let Err(e) = self.session.pop_tail() {
                    self.report(e);
                }
            }
            ListAction::Undo => {
                if !self.session.undo() {
                    tracing::debug!("Nothing to undo");
                }
            }
            ListAction::Redo => {
                if !self.session.redo() {
                    tracing::debug!("Nothing to redo");
                }
            }
            ListAction::Traverse => {
                let text = self.session.traverse();
                self.message.open(text);
            }
        }
    }

    /// Clears the text field on success, reports the error otherwise.
    fn finish_input_action<T>(&mut self, result: Result<T, ListError>) {
        match result {
            Ok(_) => {
                self.input.clear();
                self.focus_input = true;
            }
            Err(e) => self.report(e),
        }
    }

    /// Opens the message dialog for user-facing errors; logs the rest.
    fn report(&mut self, err: ListError) {
        if err.should_notify() {
            self.message.open(err.user_message());
        } else {
            tracing::debug!("Ignored action: {err}");
        }
    }
}
