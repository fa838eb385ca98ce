//! Account model.
//!
//! An account is created REGISTERED and can only move to UNREGISTERED.

use std::fmt;
use std::str::FromStr;

use super::validation::{validate_account_fields, AccountValidationError};

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    /// Active member.
    #[default]
    Registered,
    /// Withdrawn member. Terminal state.
    Unregistered,
}

impl AccountStatus {
    /// Convert status to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Registered => "REGISTERED",
            AccountStatus::Unregistered => "UNREGISTERED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "REGISTERED" => Ok(AccountStatus::Registered),
            "UNREGISTERED" => Ok(AccountStatus::Unregistered),
            _ => Err(format!("unknown account status: {s}")),
        }
    }
}

/// A persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account ID.
    pub id: i64,
    /// Login email (unique).
    pub email: String,
    /// Password hash.
    pub password: String,
    /// Display name (unique).
    pub nickname: String,
    /// University name.
    pub university: String,
    /// Student number.
    pub student_id: String,
    /// Lifecycle status.
    pub status: AccountStatus,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl Account {
    /// Replace email, nickname and password in place.
    ///
    /// Field rules are re-checked; uniqueness is left to the caller and the
    /// store. On error the account is unchanged.
    pub fn update_account(
        &mut self,
        email: impl Into<String>,
        nickname: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), AccountValidationError> {
        let (email, nickname, password) = (email.into(), nickname.into(), password.into());
        validate_account_fields(&email, &nickname, &password)?;

        self.email = email;
        self.nickname = nickname;
        self.password = password;
        Ok(())
    }

    /// Mark the account as withdrawn.
    pub fn withdraw_account(&mut self) {
        self.status = AccountStatus::Unregistered;
    }

    /// Check whether the account is still active.
    pub fn is_registered(&self) -> bool {
        self.status == AccountStatus::Registered
    }
}

/// Data for registering a new account.
///
/// Built through [`NewAccount::new`], which enforces the field rules.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Login email.
    pub email: String,
    /// Password (hashed by the service before insert).
    pub password: String,
    /// Display name.
    pub nickname: String,
    /// University name.
    pub university: String,
    /// Student number.
    pub student_id: String,
}

impl NewAccount {
    /// Create a new account draft, validating email, nickname and password.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        university: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Result<Self, AccountValidationError> {
        let account = Self {
            email: email.into(),
            password: password.into(),
            nickname: nickname.into(),
            university: university.into(),
            student_id: student_id.into(),
        };
        validate_account_fields(&account.email, &account.nickname, &account.password)?;
        Ok(account)
    }
}
