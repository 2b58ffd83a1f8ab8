//! Wire records exchanged with the backend.

mod credentials;
mod registration;
mod reply;

pub use credentials::LoginCredentials;
pub use registration::{
    AccountType, RegistrationRequest, RegistrationSchema, StudentAccount,
    StudentRegistrationRequest,
};
pub use reply::ServerReply;
