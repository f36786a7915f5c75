//! Wizard state machine for the loan application

use super::field::{FieldName, FieldValue};
use super::step::Step;
use super::validation::{validate_field, validate_fields, FieldError, FieldErrors};
use crate::submission::{
    build_payload, SubmissionClientTrait, SubmissionError, SubmissionPayload, SubmissionReceipt,
};
use chrono::{DateTime, NaiveDate, TimeZone};
use thiserror::Error;

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// The gating fields failed; the step did not change
    Blocked(FieldErrors),
    /// No step exists in the requested direction
    Unavailable,
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Why a submission was not started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("applications can only be submitted from the final step (currently on step {})", .0.number())]
    WrongStep(Step),
    #[error("{} field(s) need attention before submitting", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    InFlight,
}

/// Failure of a full submit round
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmitRejection),
    #[error(transparent)]
    Failed(#[from] SubmissionError),
}

/// The wizard's single source of truth
#[derive(Debug, Clone)]
pub struct FormState {
    current_step: Step,
    values: [FieldValue; 33],
    errors: FieldErrors,
    is_submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            current_step: Step::default(),
            values: FieldName::ALL.map(FieldValue::empty_for),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn value(&self, name: FieldName) -> &FieldValue {
        &self.values[name as usize]
    }

    pub fn text(&self, name: FieldName) -> &str {
        self.value(name).as_text()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_errors(&self, name: FieldName) -> &[FieldError] {
        self.errors.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    /// All fields with their current values, in screen order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        FieldName::ALL.into_iter().zip(self.values.iter())
    }

    /// Set a field. Never validates.
    pub fn update_field(&mut self, name: FieldName, value: impl Into<FieldValue>) {
        self.values[name as usize] = value.into();
    }

    /// Validate the current step's gate and move forward if it passes
    pub fn advance(&mut self, today: NaiveDate) -> Transition {
        let from = self.current_step;
        let Some(to) = from.next() else {
            return Transition::Unavailable;
        };

        let gated = from.gated_fields();
        let failures = validate_fields(gated.iter().map(|f| (*f, self.value(*f))), today);
        for field in gated {
            self.errors.remove(field);
        }

        if failures.is_empty() {
            self.current_step = to;
            tracing::debug!(from = from.number(), to = to.number(), "advanced wizard step");
            Transition::Moved { from, to }
        } else {
            tracing::debug!(
                step = from.number(),
                fields = ?failures.keys().map(FieldName::as_str).collect::<Vec<_>>(),
                "step gate blocked advance"
            );
            self.errors.extend(failures.clone());
            Transition::Blocked(failures)
        }
    }

    /// Move back one step. Never validates.
    pub fn retreat(&mut self) -> Transition {
        let from = self.current_step;
        match from.prev() {
            Some(to) => {
                self.current_step = to;
                tracing::debug!(from = from.number(), to = to.number(), "retreated wizard step");
                Transition::Moved { from, to }
            }
            None => Transition::Unavailable,
        }
    }

    /// Re-check a single field, replacing its recorded errors
    pub fn revalidate_field(&mut self, name: FieldName, today: NaiveDate) -> &[FieldError] {
        let errors = validate_field(name, self.value(name), today);
        if errors.is_empty() {
            self.errors.remove(&name);
        } else {
            self.errors.insert(name, errors);
        }
        self.field_errors(name)
    }

    /// Full-form validation, recording every failure
    pub fn validate_all(&mut self, today: NaiveDate) -> bool {
        self.errors = validate_fields(self.fields(), today);
        self.errors.is_empty()
    }

    /// Gate a submission and build its payload.
    ///
    /// On success `is_submitting` is set; the caller must pair this with
    /// [`FormState::finish_submission`] once the network call resolves.
    pub fn begin_submission<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Result<SubmissionPayload, SubmitRejection> {
        if !self.current_step.is_last() {
            return Err(SubmitRejection::WrongStep(self.current_step));
        }
        if !self.validate_all(now.date_naive()) {
            tracing::warn!(failing = self.errors.len(), "submission blocked by validation");
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }
        if self.is_submitting {
            tracing::warn!("submission already in flight; ignoring");
            return Err(SubmitRejection::InFlight);
        }

        self.is_submitting = true;
        Ok(build_payload(self, now.timestamp_millis()))
    }

    /// Clear the in-flight flag after the network call resolves
    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
    }

    /// Gate, send and settle one submission on the caller's task.
    ///
    /// The terminal front end runs the network call on a spawned task, so it
    /// drives [`FormState::begin_submission`] and
    /// [`FormState::finish_submission`] itself instead.
    #[allow(dead_code)]
    pub async fn submit<C, Tz>(
        &mut self,
        client: &C,
        now: &DateTime<Tz>,
    ) -> Result<SubmissionReceipt, SubmitError>
    where
        C: SubmissionClientTrait + ?Sized,
        Tz: TimeZone,
    {
        let payload = self.begin_submission(now)?;
        tracing::info!(display_id = %payload.loan.display_id, "submitting application");
        let result = client.submit_application(&payload).await;
        self.finish_submission();
        Ok(result?)
    }
}
