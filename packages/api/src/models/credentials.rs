use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
///
/// Built by [`LoginForm`](crate::LoginForm) once its fields validate, sent once,
/// then dropped.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
