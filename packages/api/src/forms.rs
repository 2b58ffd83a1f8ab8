//! # Form input
//!
//! A form value holds exactly what the user typed, one `String` per input. The
//! [`Form`] trait turns it into the wire record for its endpoint, or into
//! [`FieldErrors`] when a constraint fails. Views bind inputs to these structs
//! and hand them to [`submit`](crate::submit()).
//!
//! | Form | Endpoint | Record |
//! |------|----------|--------|
//! | [`LoginForm`] | `/login` | [`LoginCredentials`] |
//! | [`RegisterForm`] | `/register` | [`RegistrationRequest`] |
//! | [`StudentRegisterForm`] | `/register/student` | [`StudentRegistrationRequest`] |

use serde::Serialize;
use validator::Validate;

use crate::models::{
    AccountType, LoginCredentials, RegistrationRequest, StudentAccount,
    StudentRegistrationRequest,
};
use crate::validation::{validate_fields, FieldError, FieldErrors};

/// A form that can be validated and sent to one backend endpoint.
pub trait Form {
    /// JSON body sent when the form is valid.
    type Request: Serialize;

    /// Path relative to the backend base URL, e.g. `"/login"`.
    fn endpoint(&self) -> &'static str;

    /// Build the request, or report every invalid field.
    fn request(&self) -> Result<Self::Request, FieldErrors>;

    /// Current per-field validity. Empty when the form can be submitted.
    fn field_errors(&self) -> FieldErrors {
        self.request().err().unwrap_or_default()
    }
}

/// Login page inputs.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
}

impl LoginForm {
    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "username" => Some(self.username.as_str()),
            "password" => Some(self.password.as_str()),
            _ => None,
        }
    }
}

impl Form for LoginForm {
    type Request = LoginCredentials;

    fn endpoint(&self) -> &'static str {
        "/login"
    }

    fn request(&self) -> Result<LoginCredentials, FieldErrors> {
        let errors = validate_fields(self, |field| self.value(field));
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginCredentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Register page inputs.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1))]
    pub given_name: String,
    #[validate(length(min = 1))]
    pub family_name: String,
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    /// Optional. Blank means "not given".
    pub phone_number: String,
}

impl RegisterForm {
    /// The register page creates administrator accounts; the user never picks this.
    pub const ACCOUNT_TYPE: AccountType = AccountType::Administrator;

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "given_name" => Some(self.given_name.as_str()),
            "family_name" => Some(self.family_name.as_str()),
            "username" => Some(self.username.as_str()),
            "password" => Some(self.password.as_str()),
            "email" => Some(self.email.as_str()),
            "phone_number" => Some(self.phone_number.as_str()),
            _ => None,
        }
    }
}

impl Form for RegisterForm {
    type Request = RegistrationRequest;

    fn endpoint(&self) -> &'static str {
        "/register"
    }

    fn request(&self) -> Result<RegistrationRequest, FieldErrors> {
        let errors = validate_fields(self, |field| self.value(field));
        if !errors.is_empty() {
            return Err(errors);
        }
        let phone = self.phone_number.trim();
        Ok(RegistrationRequest {
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            account_type: Self::ACCOUNT_TYPE,
            email: self.email.clone(),
            phone_number: (!phone.is_empty()).then(|| phone.to_string()),
        })
    }
}

/// Inputs for enrolling a student under an existing administrator.
#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct StudentRegisterForm {
    #[validate(length(min = 1))]
    pub given_name: String,
    #[validate(length(min = 1))]
    pub family_name: String,
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    /// Numeric account id of the teaching administrator.
    pub administrator_id: String,
}

impl StudentRegisterForm {
    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "given_name" => Some(self.given_name.as_str()),
            "family_name" => Some(self.family_name.as_str()),
            "username" => Some(self.username.as_str()),
            "password" => Some(self.password.as_str()),
            "administrator_id" => Some(self.administrator_id.as_str()),
            _ => None,
        }
    }
}

impl Form for StudentRegisterForm {
    type Request = StudentRegistrationRequest;

    fn endpoint(&self) -> &'static str {
        "/register/student"
    }

    fn request(&self) -> Result<StudentRegistrationRequest, FieldErrors> {
        let mut errors = validate_fields(self, |field| self.value(field));
        let administrator_id = self.administrator_id.trim();
        let parsed = administrator_id.parse::<i64>();
        if administrator_id.is_empty() {
            errors.insert("administrator_id", FieldError::Required);
        } else if parsed.is_err() {
            errors.insert("administrator_id", FieldError::Invalid);
        }

        match parsed {
            Ok(administrator_id) if errors.is_empty() => Ok(StudentRegistrationRequest {
                user: StudentAccount {
                    given_name: self.given_name.clone(),
                    family_name: self.family_name.clone(),
                    username: self.username.clone(),
                    password: self.password.clone(),
                    account_type: AccountType::Student,
                },
                administrator_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn register() -> RegisterForm {
        RegisterForm {
            given_name: "Neffie Etta".to_string(),
            family_name: "Denile".to_string(),
            username: "neffieta".to_string(),
            password: "password123".to_string(),
            email: "neffie@example.com".to_string(),
            phone_number: String::new(),
        }
    }

    #[test]
    fn test_login_username_bounds() {
        let rejected = ["", "a", "ab"]
            .map(String::from)
            .into_iter()
            .chain(["x".repeat(21), "x".repeat(40)]);
        for username in rejected {
            let errors = login(&username, "password123").field_errors();
            assert!(errors.contains("username"), "{username:?} should be rejected");
            assert!(!errors.contains("password"));
        }
        let accepted = ["abc", "neffieta"]
            .map(String::from)
            .into_iter()
            .chain(["x".repeat(20)]);
        for username in accepted {
            assert!(login(&username, "password123").request().is_ok());
        }
    }

    #[test]
    fn test_login_password_minimum() {
        for password in ["", "short", "1234567"] {
            let errors = login("neffieta", password).field_errors();
            assert!(errors.contains("password"), "{password:?} should be rejected");
        }
        assert!(login("neffieta", "12345678").request().is_ok());
    }

    #[test]
    fn test_empty_login_reports_required() {
        let errors = LoginForm::default().field_errors();
        assert_eq!(errors.get("username"), Some(&FieldError::Required));
        assert_eq!(errors.get("password"), Some(&FieldError::Required));
    }

    #[test]
    fn test_login_request_copies_input() {
        let creds = login("neffieta", "password123").request().unwrap();
        assert_eq!(creds.username, "neffieta");
        assert_eq!(creds.password, "password123");
        assert_eq!(LoginForm::default().endpoint(), "/login");
    }

    #[test]
    fn test_empty_register_reports_every_required_field() {
        let errors = RegisterForm::default().field_errors();
        for field in ["given_name", "family_name", "username", "password", "email"] {
            assert_eq!(errors.get(field), Some(&FieldError::Required), "{field}");
        }
        assert!(!errors.contains("phone_number"));
    }

    #[test]
    fn test_register_sets_account_type_and_optional_phone() {
        let request = register().request().unwrap();
        assert_eq!(request.account_type, AccountType::Administrator);
        assert_eq!(request.phone_number, None);

        let mut form = register();
        form.phone_number = "  0400 000 000 ".to_string();
        let request = form.request().unwrap();
        assert_eq!(request.phone_number.as_deref(), Some("0400 000 000"));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut form = register();
        form.email = "neffie".to_string();
        assert_eq!(
            form.field_errors().get("email"),
            Some(&FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_student_form_administrator_id() {
        let mut form = StudentRegisterForm {
            given_name: "Neffie Etta".to_string(),
            family_name: "Denile".to_string(),
            username: "neffieta".to_string(),
            password: "password123".to_string(),
            administrator_id: String::new(),
        };
        assert_eq!(
            form.field_errors().get("administrator_id"),
            Some(&FieldError::Required)
        );

        form.administrator_id = "seven".to_string();
        assert_eq!(
            form.field_errors().get("administrator_id"),
            Some(&FieldError::Invalid)
        );

        form.administrator_id = " 7 ".to_string();
        let request = form.request().unwrap();
        assert_eq!(request.administrator_id, 7);
        assert_eq!(request.user.account_type, AccountType::Student);
        assert_eq!(form.endpoint(), "/register/student");
    }
}
