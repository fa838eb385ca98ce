//! Field validation for accounts.

use thiserror::Error;

use crate::CommunityError;

/// Maximum nickname length (in characters).
pub const MAX_NICKNAME_LENGTH: usize = 20;

/// Maximum email length (in bytes).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Account field validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Email is empty.
    #[error("email cannot be empty")]
    EmailEmpty,

    /// Email is too long.
    #[error("email must be at most {MAX_EMAIL_LENGTH} characters")]
    EmailTooLong,

    /// Email is not `local@domain.tld`.
    #[error("invalid email format")]
    EmailInvalidFormat,

    /// Nickname is empty.
    #[error("nickname cannot be empty")]
    NicknameEmpty,

    /// Nickname is too long.
    #[error("nickname must be at most {MAX_NICKNAME_LENGTH} characters")]
    NicknameTooLong,

    /// Nickname contains control characters.
    #[error("nickname contains invalid characters")]
    NicknameInvalidChars,

    /// Password is empty.
    #[error("password cannot be empty")]
    PasswordEmpty,
}

impl From<AccountValidationError> for CommunityError {
    fn from(e: AccountValidationError) -> Self {
        CommunityError::Validation(e.to_string())
    }
}

/// Validate an email address.
///
/// Only the shape is checked: one `@`, a non-empty local part, and a dotted
/// domain without empty labels or whitespace.
///
/// ```
/// use community::account::validate_email;
///
/// assert!(validate_email("user@domain.com").is_ok());
/// assert!(validate_email("").is_err());
/// assert!(validate_email("user@localhost").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), AccountValidationError> {
    if email.is_empty() {
        return Err(AccountValidationError::EmailEmpty);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(AccountValidationError::EmailTooLong);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AccountValidationError::EmailInvalidFormat);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(AccountValidationError::EmailInvalidFormat);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(AccountValidationError::EmailInvalidFormat);
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(AccountValidationError::EmailInvalidFormat);
    }

    Ok(())
}

/// Validate a nickname: non-empty, at most 20 characters, no control characters.
pub fn validate_nickname(nickname: &str) -> Result<(), AccountValidationError> {
    if nickname.is_empty() {
        return Err(AccountValidationError::NicknameEmpty);
    }
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(AccountValidationError::NicknameTooLong);
    }
    if nickname.chars().any(char::is_control) {
        return Err(AccountValidationError::NicknameInvalidChars);
    }
    Ok(())
}

/// Validate a password (plain or hashed): it must not be empty.
pub fn validate_password_present(password: &str) -> Result<(), AccountValidationError> {
    if password.is_empty() {
        return Err(AccountValidationError::PasswordEmpty);
    }
    Ok(())
}

/// Validate the identity fields of an account.
pub fn validate_account_fields(
    email: &str,
    nickname: &str,
    password: &str,
) -> Result<(), AccountValidationError> {
    validate_email(email)?;
    validate_nickname(nickname)?;
    validate_password_present(password)?;
    Ok(())
}
