//! # HTTP client for the webdevcamp backend
//!
//! [`AuthClient`] wraps a `reqwest::Client` and a base URL. It knows one verb:
//! POST a JSON body to a path and hand back the status plus the decoded body.
//! It never retries and sets no timeout of its own. Deciding what a status means
//! is left to [`submit`](crate::submit()).
//!
//! The client is cheap to clone (the inner `reqwest::Client` is reference
//! counted), so views share one through context.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    LoginCredentials, RegistrationRequest, ServerReply, StudentRegistrationRequest,
};

const JSON: &str = "application/json";

/// Status and body of a backend response.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: StatusCode,
    /// `None` when the body was empty or not a JSON object.
    pub body: Option<ServerReply>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn detail(&self) -> Option<String> {
        self.body.as_ref().and_then(ServerReply::detail_text)
    }
}

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    base_url: Url,
}

impl AuthClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.backend.base_url.trim())
            .map_err(|e| ApiError::Config(format!("bad base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "bad base_url: {base_url} cannot take a path"
            )));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `path`, keeping any path prefix of the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("bad endpoint {path}: {e}")))
    }

    /// POST `body` as JSON to `path`.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpReply, ApiError> {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        Ok(HttpReply {
            status,
            body: ServerReply::from_body(&bytes),
        })
    }

    /// `POST /login`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<HttpReply, ApiError> {
        self.post_json("/login", credentials).await
    }

    /// `POST /register`.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<HttpReply, ApiError> {
        self.post_json("/register", request).await
    }

    /// `POST /register/student`.
    pub async fn register_student(
        &self,
        request: &StudentRegistrationRequest,
    ) -> Result<HttpReply, ApiError> {
        self.post_json("/register/student", request).await
    }
}
