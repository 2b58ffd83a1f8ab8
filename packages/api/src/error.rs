//! Errors raised by the client itself.
//!
//! A backend answering with a 4xx/5xx is not an error here: that is a normal
//! [`SubmitOutcome::Rejected`](crate::SubmitOutcome::Rejected) carrying the
//! server's `detail`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("could not reach the server: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}
