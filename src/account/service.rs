//! Account service.
//!
//! Registration, profile updates, withdrawal and login over
//! [`AccountRepository`], with application-level uniqueness checks in front
//! of the store constraints.

use tracing::{info, warn};

use super::password::{hash_password, verify_password};
use super::repository::AccountRepository;
use super::types::{Account, NewAccount};
use crate::db::Database;
use crate::{CommunityError, Result};

/// Registration request data (plain-text password).
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password, 8-128 characters.
    pub password: String,
    /// Display nickname.
    pub nickname: String,
    /// University name.
    pub university: String,
    /// Student number.
    pub student_id: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        nickname: impl Into<String>,
        university: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            nickname: nickname.into(),
            university: university.into(),
            student_id: student_id.into(),
        }
    }
}

/// Service for account lifecycle operations.
pub struct AccountService<'a> {
    db: &'a Database,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// 1. Validates the fields
    /// 2. Rejects a taken email or nickname with `Conflict`
    /// 3. Hashes the password
    /// 4. Inserts the account (the unique columns catch any race)
    pub async fn register(&self, request: RegistrationRequest) -> Result<Account> {
        NewAccount::new(
            &request.email,
            &request.password,
            &request.nickname,
            &request.university,
            &request.student_id,
        )?;

        let repo = AccountRepository::new(self.db.pool());
        if repo.exists_by_email(&request.email).await? {
            return Err(CommunityError::Conflict("email already registered".to_string()));
        }
        if repo.exists_by_nickname(&request.nickname).await? {
            return Err(CommunityError::Conflict("nickname already taken".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let new_account = NewAccount::new(
            request.email,
            password_hash,
            request.nickname,
            request.university,
            request.student_id,
        )?;
        let account = repo.create(&new_account).await?;

        info!(
            account_id = account.id,
            nickname = %account.nickname,
            "New account registered"
        );

        Ok(account)
    }

    /// Get an account by ID, failing with `NotFound` when absent.
    pub async fn get_account(&self, account_id: i64) -> Result<Account> {
        AccountRepository::new(self.db.pool())
            .get_by_id(account_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("account".to_string()))
    }

    /// Change email, nickname and password of an account.
    ///
    /// A new email or nickname already owned by another account is rejected
    /// with `Conflict`. The password is re-hashed.
    pub async fn update_account(
        &self,
        account_id: i64,
        email: &str,
        nickname: &str,
        password: &str,
    ) -> Result<Account> {
        let repo = AccountRepository::new(self.db.pool());
        let mut account = self.get_account(account_id).await?;

        if let Some(owner) = repo.find_by_email(email).await? {
            if owner.id != account.id {
                return Err(CommunityError::Conflict("email already registered".to_string()));
            }
        }
        if let Some(owner) = repo.find_by_nickname(nickname).await? {
            if owner.id != account.id {
                return Err(CommunityError::Conflict("nickname already taken".to_string()));
            }
        }

        let password_hash = hash_password(password)?;
        account.update_account(email, nickname, password_hash)?;
        let saved = repo.save(&account).await?;

        info!(account_id = saved.id, "Account updated");
        Ok(saved)
    }

    /// Withdraw an account (status becomes UNREGISTERED).
    pub async fn withdraw_account(&self, account_id: i64) -> Result<Account> {
        let repo = AccountRepository::new(self.db.pool());
        let mut account = self.get_account(account_id).await?;

        account.withdraw_account();
        let saved = repo.save(&account).await?;

        info!(account_id = saved.id, "Account withdrawn");
        Ok(saved)
    }

    /// Check login credentials.
    ///
    /// Unknown email, wrong password and withdrawn accounts all fail with
    /// the same `NotFound` error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let rejected = || CommunityError::NotFound("account with these credentials".to_string());

        let account = AccountRepository::new(self.db.pool())
            .find_by_email(email)
            .await?
            .ok_or_else(rejected)?;

        if verify_password(password, &account.password).is_err() {
            warn!(account_id = account.id, "Login failed: wrong password");
            return Err(rejected());
        }
        if !account.is_registered() {
            warn!(account_id = account.id, "Login failed: account withdrawn");
            return Err(rejected());
        }

        Ok(account)
    }
}
