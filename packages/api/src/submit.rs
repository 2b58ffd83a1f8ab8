//! # Submission handler
//!
//! [`submit`] is what a form's submit button runs:
//!
//! 1. Validate. Any invalid field ends the submission with
//!    [`SubmitOutcome::Invalid`]; nothing is sent.
//! 2. Serialise the wire record and POST it as JSON.
//! 3. Branch on the status. A failure status becomes [`SubmitOutcome::Rejected`]
//!    carrying the server's `detail` for display. A success is logged and
//!    returned as [`SubmitOutcome::Accepted`]; no navigation or token handling
//!    happens here.
//!
//! Submissions are independent: there is no in-flight guard, so two quick clicks
//! send two requests. Transport failures come back as `Err(ApiError)`.

use reqwest::StatusCode;

use crate::client::{AuthClient, HttpReply};
use crate::error::ApiError;
use crate::forms::Form;
use crate::models::ServerReply;
use crate::validation::FieldErrors;

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked before any request was made.
    Invalid(FieldErrors),
    /// The backend answered with a non-success status.
    Rejected { status: StatusCode, detail: String },
    /// The backend answered with a success status.
    Accepted { status: StatusCode, reply: ServerReply },
}

impl SubmitOutcome {
    /// Classify a backend response.
    pub fn from_reply(reply: HttpReply) -> Self {
        let detail = reply.detail();
        if reply.is_success() {
            SubmitOutcome::Accepted {
                status: reply.status,
                reply: reply.body.unwrap_or_default(),
            }
        } else {
            SubmitOutcome::Rejected {
                status: reply.status,
                detail: detail.unwrap_or_else(|| {
                    format!("Request failed with status {}", reply.status.as_u16())
                }),
            }
        }
    }

    /// The form-level error line to show, if any. Validation failures are shown
    /// per field instead, so they have none.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Rejected { detail, .. } => Some(detail),
            SubmitOutcome::Invalid(_) | SubmitOutcome::Accepted { .. } => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Form-level error line for a finished submission, transport failures included.
pub fn visible_error(result: &Result<SubmitOutcome, ApiError>) -> Option<String> {
    match result {
        Ok(outcome) => outcome.error_text().map(str::to_string),
        Err(e) => Some(e.to_string()),
    }
}

/// Validate `form` and, when valid, send it to its endpoint.
pub async fn submit<F: Form>(client: &AuthClient, form: &F) -> Result<SubmitOutcome, ApiError> {
    let endpoint = form.endpoint();
    let request = match form.request() {
        Ok(request) => request,
        Err(errors) => {
            tracing::debug!(endpoint, invalid_fields = errors.len(), "Submission blocked by validation");
            return Ok(SubmitOutcome::Invalid(errors));
        }
    };

    let reply = client.post_json(endpoint, &request).await.map_err(|e| {
        tracing::error!("POST {} failed: {}", endpoint, e);
        e
    })?;

    let outcome = SubmitOutcome::from_reply(reply);
    match &outcome {
        SubmitOutcome::Accepted { status, reply } => {
            tracing::info!(
                endpoint,
                status = status.as_u16(),
                detail = reply.detail_text().unwrap_or_default(),
                "Submission accepted"
            );
        }
        SubmitOutcome::Rejected { status, detail } => {
            tracing::warn!(endpoint, status = status.as_u16(), "Submission rejected: {}", detail);
        }
        SubmitOutcome::Invalid(_) => {}
    }
    Ok(outcome)
}
