//! Application state definitions

use super::forms::{cycle_value, FieldKind, FieldName, FormState, Step};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    /// Confirmation shown after a successful submission
    Submitted,
}

/// Details of the last accepted application, for the confirmation view
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedApplication {
    pub display_id: String,
    pub status: u16,
    pub message: Option<String>,
}

/// Global application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormState,
    /// Focused field, as an index into the current screen's fields
    pub active_field: usize,
    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    pub status_message: Option<String>,
    pub submitted: Option<SubmittedApplication>,
}

impl AppState {
    /// Fields of the current screen, in display order
    pub fn screen_fields(&self) -> Vec<FieldName> {
        FieldName::on_screen(self.form.current_step())
    }

    pub fn active_field_name(&self) -> Option<FieldName> {
        self.screen_fields().get(self.active_field).copied()
    }

    pub fn next_field(&mut self) {
        let count = self.screen_fields().len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.screen_fields().len();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Focus a field if it is on the current screen
    pub fn focus_field(&mut self, name: FieldName) {
        if let Some(index) = self.screen_fields().iter().position(|f| *f == name) {
            self.active_field = index;
        }
    }

    /// Type a character into the focused field.
    ///
    /// Space toggles checkboxes; choice fields ignore typed characters.
    pub fn form_input_char(&mut self, c: char) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        match name.kind() {
            FieldKind::Text => {
                let mut text = self.form.text(name).to_string();
                text.push(c);
                self.form.update_field(name, text);
            }
            FieldKind::Checkbox if c == ' ' => self.cycle_active_field(true),
            FieldKind::Checkbox
            | FieldKind::Choice(_)
            | FieldKind::UsState
            | FieldKind::Generation => {}
        }
    }

    pub fn form_backspace(&mut self) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if name.kind() == FieldKind::Text {
            let mut text = self.form.text(name).to_string();
            text.pop();
            self.form.update_field(name, text);
        }
    }

    /// Step a choice field through its options, or toggle a checkbox
    pub fn cycle_active_field(&mut self, forward: bool) {
        if let Some(name) = self.active_field_name() {
            let value = cycle_value(name, self.form.value(name), forward);
            self.form.update_field(name, value);
        }
    }

    /// Reset focus after the step changed
    pub fn on_step_changed(&mut self) {
        self.active_field = 0;
    }

    pub fn current_step(&self) -> Step {
        self.form.current_step()
    }

    /// Push an error message to the queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Start a fresh application
    pub fn clear_form(&mut self) {
        self.form = FormState::new();
        self.active_field = 0;
        self.submitted = None;
        self.status_message = None;
        self.current_view = View::Wizard;
    }
}
