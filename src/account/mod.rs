//! Account module.
//!
//! Registered user identities:
//! - Account model and REGISTERED → UNREGISTERED lifecycle
//! - Field validation and Argon2 password hashing
//! - Repository with email/nickname lookups
//! - Service for registration, update, withdrawal and login

mod password;
mod repository;
mod service;
mod types;
mod validation;

pub use password::{hash_password, validate_password, verify_password, PasswordError};
pub use repository::AccountRepository;
pub use service::{AccountService, RegistrationRequest};
pub use types::{Account, AccountStatus, NewAccount};
pub use validation::{
    validate_account_fields, validate_email, validate_nickname, AccountValidationError,
    MAX_EMAIL_LENGTH, MAX_NICKNAME_LENGTH,
};
