//! # Registration records
//!
//! The backend has two registration endpoints:
//!
//! - `POST /register` takes a [`RegistrationRequest`]: a full account with email and
//!   optional phone number. Students are refused there.
//! - `POST /register/student` takes a [`StudentRegistrationRequest`]: a bare account
//!   plus the id of the administrator who teaches the student.
//!
//! The JSON layout is pinned by [`RegistrationSchema`] instead of being whatever the
//! form happens to hold. Note the password travels under `hashed_password`: the
//! backend hashes it on arrival, the key name is historical.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of account being created. Serialised lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Student,
    Administrator,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Student => "student",
            AccountType::Administrator => "administrator",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versions of the `/register` body layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationSchema {
    #[default]
    V1,
}

impl RegistrationSchema {
    pub const CURRENT: RegistrationSchema = RegistrationSchema::V1;

    /// Every top-level JSON key this version may send. `phone_number` is optional.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            RegistrationSchema::V1 => &[
                "given_name",
                "family_name",
                "username",
                "hashed_password",
                "account_type",
                "email",
                "phone_number",
            ],
        }
    }
}

/// Body of `POST /register` (schema [`RegistrationSchema::V1`]).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub given_name: String,
    pub family_name: String,
    pub username: String,
    #[serde(rename = "hashed_password")]
    pub password: String,
    pub account_type: AccountType,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// The account part of a student registration. No contact details.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub given_name: String,
    pub family_name: String,
    pub username: String,
    #[serde(rename = "hashed_password")]
    pub password: String,
    pub account_type: AccountType,
}

impl fmt::Debug for StudentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudentAccount")
            .field("given_name", &self.given_name)
            .field("family_name", &self.family_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .finish()
    }
}

/// Body of `POST /register/student`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRegistrationRequest {
    pub user: StudentAccount,
    pub administrator_id: i64,
}
