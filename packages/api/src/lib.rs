//! # API crate — the webdevcamp client core
//!
//! Everything the frontends need to talk to the webdevcamp backend, with no
//! dependency on Dioxus so it builds the same for `wasm32` and native tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `ApiConfig`: backend base URL, TOML parsing |
//! | [`error`] | `ApiError`, the transport/config failure type |
//! | [`models`] | Wire records (`LoginCredentials`, `RegistrationRequest`, ...) and the decoded `ServerReply` |
//! | [`validation`] | Translates `validator` reports into field-scoped `FieldErrors` |
//! | [`forms`] | Raw form input (`LoginForm`, `RegisterForm`, ...) and the [`Form`] trait |
//! | [`client`] | `AuthClient`: JSON POSTs against the backend |
//! | [`submit`] | The submission handler: validate → serialise → POST → outcome |
//!
//! ## Flow
//!
//! A view holds a form value (e.g. [`LoginForm`]) bound to its inputs. On submit it
//! calls [`submit()`], which validates the form. Invalid input yields
//! [`SubmitOutcome::Invalid`] and no request is made. Valid input is turned into the
//! wire record and POSTed; the server's `detail` ends up either logged (success) or
//! in [`SubmitOutcome::Rejected`] for the view to display.

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod submit;
pub mod validation;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{AuthClient, HttpReply};
pub use config::ApiConfig;
pub use error::ApiError;
pub use forms::{Form, LoginForm, RegisterForm, StudentRegisterForm};
pub use models::{
    AccountType, LoginCredentials, RegistrationRequest, RegistrationSchema, ServerReply,
    StudentAccount, StudentRegistrationRequest,
};
pub use reqwest::StatusCode;
pub use submit::{submit, visible_error, SubmitOutcome};
pub use validation::{FieldError, FieldErrors};
