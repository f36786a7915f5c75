//! Form domain layer
//!
//! Typed field values, validation rules, step gating and the wizard
//! state machine for the loan application.

mod field;
mod form_state;
mod step;
mod validation;

pub use field::{
    cycle_value, FieldKind, FieldName, FieldValue, GenerationCode, GENDER_CHOICES,
    GENERATION_NONE_CODE, INCOME_FREQUENCY_CHOICES, US_STATES,
};
pub use form_state::{FormState, SubmitError, SubmitRejection, Transition};
pub use step::Step;
pub use validation::{
    is_required, max_length, parse_date, parse_income, validate_field, validate_fields,
    FieldError, FieldErrors, MINIMUM_AGE,
};

#[cfg(test)]
pub(crate) use form_state::tests as fixtures;
