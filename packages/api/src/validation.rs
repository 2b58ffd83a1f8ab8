//! # Field-scoped validation
//!
//! Forms declare their constraints with `validator`'s derive (`length`, `email`).
//! This module turns the resulting [`ValidationErrors`] report into [`FieldErrors`]:
//! at most one [`FieldError`] per input, keyed by the input's name, with a message
//! the views can print next to the field.
//!
//! An empty value on a constrained field is always reported as
//! [`FieldError::Required`], whatever constraint tripped, so an untouched input
//! reads "required" rather than "too short".

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Why a single field is invalid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Must be at least {min} characters")]
    TooShort { min: u64 },
    #[error("Must be at most {max} characters")]
    TooLong { max: u64 },
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Invalid value")]
    Invalid,
}

/// Validation failures of one form, keyed by input name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. The first error recorded for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.entry(field.into()).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(field, error)| (field.as_str(), error))
    }

    /// Message to print under `field`, if it is invalid.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Translate a `validator` report. `value_of` returns the raw input of a field.
    pub fn from_report<'a>(
        report: &ValidationErrors,
        value_of: impl Fn(&str) -> Option<&'a str>,
    ) -> Self {
        let mut errors = Self::new();
        for (field, failures) in report.field_errors() {
            let field = field.to_string();
            let value = value_of(&field).unwrap_or_default();
            if let Some(first) = failures.first() {
                errors.insert(field, classify(first, value));
            }
        }
        errors
    }
}

/// Run `form`'s declared constraints and collect the failures.
pub fn validate_fields<'a, T: Validate>(
    form: &T,
    value_of: impl Fn(&str) -> Option<&'a str>,
) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(report) => FieldErrors::from_report(&report, value_of),
    }
}

fn classify(failure: &ValidationError, value: &str) -> FieldError {
    if value.trim().is_empty() {
        return FieldError::Required;
    }
    if failure.code == "email" {
        return FieldError::InvalidEmail;
    }
    if failure.code == "length" {
        // Same unit as the `length` validator: characters, not bytes.
        let len = value.chars().count() as u64;
        match (bound(failure, "min"), bound(failure, "max")) {
            (Some(min), _) if len < min => return FieldError::TooShort { min },
            (_, Some(max)) if len > max => return FieldError::TooLong { max },
            _ => {}
        }
    }
    FieldError::Invalid
}

fn bound(failure: &ValidationError, name: &str) -> Option<u64> {
    failure.params.get(name).and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, max = 20))]
        username: String,
        #[validate(email)]
        email: String,
    }

    impl Sample {
        fn errors(&self) -> FieldErrors {
            validate_fields(self, |field| match field {
                "username" => Some(self.username.as_str()),
                "email" => Some(self.email.as_str()),
                _ => None,
            })
        }
    }

    fn sample(username: &str, email: &str) -> Sample {
        Sample {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(sample("neffieta", "neffie@example.com").errors().is_empty());
    }

    #[test]
    fn test_empty_is_required_not_too_short() {
        let errors = sample("", "").errors();
        assert_eq!(errors.get("username"), Some(&FieldError::Required));
        assert_eq!(errors.get("email"), Some(&FieldError::Required));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_length_bounds() {
        let errors = sample("ab", "neffie@example.com").errors();
        assert_eq!(errors.get("username"), Some(&FieldError::TooShort { min: 3 }));
        assert!(!errors.contains("email"));

        let errors = sample(&"a".repeat(21), "neffie@example.com").errors();
        assert_eq!(errors.get("username"), Some(&FieldError::TooLong { max: 20 }));
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, six bytes.
        assert!(sample("äöü", "neffie@example.com").errors().is_empty());
    }

    #[test]
    fn test_bad_email() {
        let errors = sample("neffieta", "not-an-email").errors();
        assert_eq!(errors.get("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(
            errors.message("email").as_deref(),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("username", FieldError::Required);
        errors.insert("username", FieldError::TooLong { max: 20 });
        assert_eq!(errors.get("username"), Some(&FieldError::Required));
        assert_eq!(errors.iter().count(), 1);
    }
}
