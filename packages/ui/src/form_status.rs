//! What a form shows besides its inputs: per-field errors, the form-level error
//! line and whether a submission is on the wire.

use api::{visible_error, ApiError, FieldErrors, SubmitOutcome};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormStatus {
    pub field_errors: FieldErrors,
    /// Server `detail` of the last rejection, or a transport/config failure.
    pub error: Option<String>,
    /// Set by the first submit. From then on inputs are revalidated as they change.
    pub submitted: bool,
    /// Submissions awaiting a response. Cosmetic only: nothing stops another click.
    /// When several overlap, only the newest one's result is shown.
    pub pending: usize,
    latest: u64,
}

/// Identifies one submission, handed out by [`FormStatus::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl FormStatus {
    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// A submission has started. Pass the ticket back to [`FormStatus::finish`].
    pub fn begin(&mut self) -> Ticket {
        self.submitted = true;
        self.pending += 1;
        self.latest += 1;
        Ticket(self.latest)
    }

    /// A submission has finished. Results of superseded submissions only
    /// release their pending slot.
    pub fn finish(&mut self, ticket: Ticket, result: &Result<SubmitOutcome, ApiError>) {
        self.pending = self.pending.saturating_sub(1);
        if ticket.0 != self.latest {
            return;
        }
        self.error = visible_error(result);
        self.field_errors = match result {
            Ok(SubmitOutcome::Invalid(errors)) => errors.clone(),
            _ => FieldErrors::new(),
        };
    }

    /// Submission could not even start (e.g. no usable client).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitted = true;
        self.error = Some(message.into());
    }

    /// An input changed. Field errors only refresh after the first submit.
    pub fn revalidate(&mut self, errors: FieldErrors) {
        if self.submitted {
            self.field_errors = errors;
        }
    }

    /// Inline message for `field`, empty when it is valid.
    pub fn field_message(&self, field: &str) -> String {
        self.field_errors.message(field).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{FieldError, ServerReply, StatusCode};

    fn required(field: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.insert(field, FieldError::Required);
        errors
    }

    #[test]
    fn test_invalid_outcome_sets_field_errors() {
        let mut status = FormStatus::default();
        let ticket = status.begin();
        assert!(status.is_pending());

        status.finish(ticket, &Ok(SubmitOutcome::Invalid(required("username"))));
        assert!(!status.is_pending());
        assert_eq!(status.field_message("username"), "This field is required");
        assert_eq!(status.field_message("password"), "");
        assert!(status.error.is_none());
    }

    #[test]
    fn test_rejection_sets_error_line() {
        let mut status = FormStatus::default();
        let ticket = status.begin();
        status.finish(ticket, &Ok(SubmitOutcome::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: "bad credentials".to_string(),
        }));
        assert_eq!(status.error.as_deref(), Some("bad credentials"));
        assert!(status.field_errors.is_empty());
    }

    #[test]
    fn test_acceptance_clears_error_line() {
        let mut status = FormStatus {
            error: Some("bad credentials".to_string()),
            ..FormStatus::default()
        };
        let ticket = status.begin();
        status.finish(ticket, &Ok(SubmitOutcome::Accepted {
            status: StatusCode::OK,
            reply: ServerReply::default(),
        }));
        assert!(status.error.is_none());
    }

    #[test]
    fn test_transport_error_is_shown() {
        let mut status = FormStatus::default();
        let ticket = status.begin();
        status.finish(ticket, &Err(ApiError::Config("bad base_url".to_string())));
        assert_eq!(
            status.error.as_deref(),
            Some("invalid configuration: bad base_url")
        );
    }

    #[test]
    fn test_revalidate_waits_for_first_submit() {
        let mut status = FormStatus::default();
        status.revalidate(required("username"));
        assert!(status.field_errors.is_empty());

        status.fail("no client");
        status.revalidate(required("username"));
        assert!(status.field_errors.contains("username"));
        status.revalidate(FieldErrors::new());
        assert!(status.field_errors.is_empty());
    }

    #[test]
    fn test_overlapping_submissions() {
        let mut status = FormStatus::default();
        let first = status.begin();
        let second = status.begin();
        status.finish(first, &Ok(SubmitOutcome::Invalid(FieldErrors::new())));
        assert!(status.is_pending());
        status.finish(second, &Ok(SubmitOutcome::Invalid(FieldErrors::new())));
        assert!(!status.is_pending());
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newest() {
        let mut status = FormStatus::default();
        let first = status.begin();
        let second = status.begin();

        status.finish(
            second,
            &Ok(SubmitOutcome::Rejected {
                status: StatusCode::BAD_REQUEST,
                detail: "bad credentials".to_string(),
            }),
        );
        status.finish(
            first,
            &Ok(SubmitOutcome::Accepted {
                status: StatusCode::OK,
                reply: ServerReply::default(),
            }),
        );

        assert!(!status.is_pending());
        assert_eq!(status.error.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn test_stale_field_errors_are_dropped() {
        let mut status = FormStatus::default();
        let first = status.begin();
        let second = status.begin();

        status.finish(second, &Err(ApiError::Config("bad base_url".to_string())));
        status.finish(first, &Ok(SubmitOutcome::Invalid(required("username"))));

        assert!(status.field_errors.is_empty());
        assert_eq!(
            status.error.as_deref(),
            Some("invalid configuration: bad base_url")
        );
    }
}
