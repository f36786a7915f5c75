//! Application state and core logic

use crate::state::{AppState, Step, SubmitRejection, SubmittedApplication, Transition, View};
use crate::submission::{SubmissionClientTrait, SubmissionError, SubmissionReceipt};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

type SubmissionResult = Result<SubmissionReceipt, SubmissionError>;

/// A submission running on a background task
struct PendingSubmission {
    display_id: String,
    result: oneshot::Receiver<SubmissionResult>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the origination endpoint
    client: Arc<dyn SubmissionClientTrait>,
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn SubmissionClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            client,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.state.form.is_submitting()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // An open error dialog swallows input until dismissed
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key),
            View::Submitted => self.handle_submitted_key(key),
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => self.next_step(),
            KeyCode::Char('p') if ctrl => self.prev_step(),
            KeyCode::Char('s') if ctrl => self.request_submit(),
            KeyCode::PageDown => self.next_step(),
            KeyCode::PageUp => self.prev_step(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.recheck_active_field();
                self.state.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.recheck_active_field();
                self.state.prev_field();
            }
            KeyCode::Left => self.state.cycle_active_field(false),
            KeyCode::Right => self.state.cycle_active_field(true),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c) if !ctrl => self.state.form_input_char(c),
            _ => {}
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.clear_form(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Refresh errors on the field being left, once it has been flagged
    fn recheck_active_field(&mut self) {
        if let Some(name) = self.state.active_field_name() {
            if !self.state.form.field_errors(name).is_empty() {
                self.state
                    .form
                    .revalidate_field(name, Local::now().date_naive());
            }
        }
    }

    /// "Next": advance, or submit from the last step
    pub fn next_step(&mut self) {
        if self.state.current_step().is_last() {
            self.request_submit();
            return;
        }

        match self.state.form.advance(Local::now().date_naive()) {
            Transition::Moved { to, .. } => {
                self.state.on_step_changed();
                self.state.status_message = Some(format!("Step {} of {}", to.number(), Step::COUNT));
            }
            Transition::Blocked(errors) => {
                if let Some(first) = errors.keys().next() {
                    self.state.focus_field(*first);
                }
                self.state.status_message =
                    Some(format!("{} field(s) need attention", errors.len()));
            }
            Transition::Unavailable => {}
        }
    }

    /// "Previous": always allowed past the first step
    pub fn prev_step(&mut self) {
        if self.state.form.retreat().is_moved() {
            self.state.on_step_changed();
            self.state.status_message = None;
        }
    }

    /// Validate and start a background submission
    pub fn request_submit(&mut self) {
        let payload = match self.state.form.begin_submission(&Local::now()) {
            Ok(payload) => payload,
            Err(SubmitRejection::Invalid(errors)) => {
                // Jump to the first screen with a problem
                if let Some(first) = errors.keys().next().copied() {
                    while self.state.current_step() > first.screen() {
                        self.state.form.retreat();
                    }
                    self.state.focus_field(first);
                }
                self.state.status_message =
                    Some(format!("{} field(s) need attention", errors.len()));
                return;
            }
            Err(SubmitRejection::InFlight) => return,
            Err(rejection @ SubmitRejection::WrongStep(_)) => {
                self.state.status_message = Some(rejection.to_string());
                return;
            }
        };

        let display_id = payload.loan.display_id.clone();
        tracing::info!(%display_id, "submitting application");

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let result = client.submit_application(&payload).await;
            // The receiver only goes away if the app is shutting down
            let _ = tx.send(result);
        });

        self.pending = Some(PendingSubmission {
            display_id,
            result: rx,
        });
        self.state.status_message = Some("Submitting... this can take some time".to_string());
    }

    /// Check whether the background submission finished. Call once per frame.
    pub fn poll_submission(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let outcome = match pending.result.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(SubmissionError::Transport(
                "Submission was interrupted".to_string(),
            )),
        };
        if let Some(pending) = self.pending.take() {
            self.complete_submission(pending.display_id, outcome);
        }
    }

    /// Wait for the background submission, if any
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(pending) = self.pending.take() {
            let outcome = pending.result.await.unwrap_or_else(|_| {
                Err(SubmissionError::Transport(
                    "Submission was interrupted".to_string(),
                ))
            });
            self.complete_submission(pending.display_id, outcome);
        }
    }

    fn complete_submission(&mut self, display_id: String, outcome: SubmissionResult) {
        self.state.form.finish_submission();
        match outcome {
            Ok(receipt) => {
                tracing::info!(%display_id, status = receipt.status, "application submitted");
                self.state.submitted = Some(SubmittedApplication {
                    display_id,
                    status: receipt.status,
                    message: receipt.message().map(str::to_string),
                });
                self.state.status_message = Some("Application submitted".to_string());
                self.state.current_view = View::Submitted;
            }
            Err(err) => {
                tracing::warn!(%display_id, error = %err, "application submission failed");
                self.state.status_message = None;
                self.state.push_error(format!("Submission failed: {err}"));
            }
        }
    }
}
