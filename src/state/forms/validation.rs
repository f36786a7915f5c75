//! Field validation rules

use super::field::{FieldKind, FieldName, FieldValue};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Per-field failures, keyed by field. Valid fields have no entry.
pub type FieldErrors = BTreeMap<FieldName, Vec<FieldError>>;

/// A single violated rule. Rendered after the field label,
/// e.g. "First name is required".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("cannot exceed {max} characters")]
    TooLong { max: usize },
    #[error("must be a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("must be at least 18 years old")]
    Underage,
    #[error("cannot be in the future")]
    FutureDate,
    #[error("must be a valid email address")]
    InvalidEmail,
    #[error("must be 5 digits or 5+4 digits")]
    InvalidZip,
    #[error("must be a valid number")]
    InvalidNumber,
    #[error("must be greater than 0")]
    NotPositive,
    #[error("must be a valid 4-digit number")]
    InvalidYear,
    #[error("must be accepted")]
    NotAccepted,
}

pub const MINIMUM_AGE: i32 = 18;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

// WHATWG "valid email address" grammar
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid zip regex"));

static INCOME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("valid income regex"));

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex"));

/// Whether the field must be non-blank
pub fn is_required(name: FieldName) -> bool {
    use FieldName as F;
    matches!(
        name,
        F::FirstName
            | F::LastName
            | F::Ssn
            | F::DriverLicense
            | F::DateOfBirth
            | F::Gender
            | F::Email
            | F::Phone
            | F::Address
            | F::City
            | F::State
            | F::ZipCode
            | F::CompanyName
            | F::Title
            | F::HireDate
            | F::Income
            | F::IncomeFrequency
    )
}

/// Maximum length in characters, if capped
pub fn max_length(name: FieldName) -> Option<usize> {
    use FieldName as F;
    match name {
        F::FirstName | F::LastName | F::City | F::Title => Some(50),
        F::Address | F::CompanyName => Some(100),
        F::DriverLicense => Some(20),
        _ => None,
    }
}

/// Check one field. Returns every violated rule, in rule order.
///
/// Rules follow the field's kind, not the stored variant. A blank required
/// field reports only [`FieldError::Required`]; an optional field is absent
/// only when empty.
pub fn validate_field(name: FieldName, value: &FieldValue, today: NaiveDate) -> Vec<FieldError> {
    use FieldName as F;

    match name.kind() {
        FieldKind::Checkbox => {
            return if matches!(value, FieldValue::Flag(true)) {
                Vec::new()
            } else {
                vec![FieldError::NotAccepted]
            };
        }
        FieldKind::Generation => return Vec::new(),
        FieldKind::Text | FieldKind::Choice(_) | FieldKind::UsState => {}
    }

    let text = value.as_text();
    let absent = if is_required(name) {
        text.trim().is_empty()
    } else {
        text.is_empty()
    };
    if absent {
        return if is_required(name) {
            vec![FieldError::Required]
        } else {
            Vec::new()
        };
    }

    let mut errors = Vec::new();
    if let Some(max) = max_length(name) {
        if text.chars().count() > max {
            errors.push(FieldError::TooLong { max });
        }
    }

    match name {
        F::DateOfBirth => match parse_date(text) {
            Some(dob) => {
                if dob > today || today.year() - dob.year() < MINIMUM_AGE {
                    errors.push(FieldError::Underage);
                }
            }
            None => errors.push(FieldError::InvalidDate),
        },
        F::HireDate => match parse_date(text) {
            Some(hired) if hired > today => errors.push(FieldError::FutureDate),
            Some(_) => {}
            None => errors.push(FieldError::InvalidDate),
        },
        F::Email if !EMAIL_RE.is_match(text) => errors.push(FieldError::InvalidEmail),
        F::ZipCode if !ZIP_RE.is_match(text) => errors.push(FieldError::InvalidZip),
        F::Income => {
            if !INCOME_RE.is_match(text) {
                errors.push(FieldError::InvalidNumber);
            } else if parse_income(text) <= 0.0 {
                errors.push(FieldError::NotPositive);
            }
        }
        F::CollateralYear if !YEAR_RE.is_match(text) => errors.push(FieldError::InvalidYear),
        _ => {}
    }

    errors
}

/// Validate a set of fields, keeping only the failing ones
pub fn validate_fields<'a, I>(fields: I, today: NaiveDate) -> FieldErrors
where
    I: IntoIterator<Item = (FieldName, &'a FieldValue)>,
{
    fields
        .into_iter()
        .filter_map(|(name, value)| {
            let errors = validate_field(name, value, today);
            (!errors.is_empty()).then_some((name, errors))
        })
        .collect()
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parse an income amount; unparsable input reads as zero
pub fn parse_income(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}
