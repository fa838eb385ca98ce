//! Account repository.
//!
//! Lookup and existence queries for accounts. The unique email/nickname
//! columns are the final guard against duplicates.

use super::types::{Account, AccountStatus, NewAccount};
use crate::db::DbPool;
use crate::{CommunityError, Result};

const ACCOUNT_COLUMNS: &str =
    "id, email, password, nickname, university, student_id, status, created_at, updated_at";

/// Repository for account persistence.
pub struct AccountRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new AccountRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new account.
    ///
    /// Returns the stored account with its assigned ID and REGISTERED status.
    /// Empty email/nickname fail with `Validation`, duplicates with `Conflict`.
    pub async fn create(&self, new_account: &NewAccount) -> Result<Account> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (email, password, nickname, university, student_id, status)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&new_account.email)
        .bind(&new_account.password)
        .bind(&new_account.nickname)
        .bind(&new_account.university)
        .bind(&new_account.student_id)
        .bind(AccountStatus::Registered.as_str())
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("account".to_string()))
    }

    /// Persist the mutable fields of an existing account.
    ///
    /// Returns the reloaded account, or `NotFound` if the ID is unknown.
    pub async fn save(&self, account: &Account) -> Result<Account> {
        let result = sqlx::query(
            "UPDATE accounts
             SET email = $1, password = $2, nickname = $3, university = $4,
                 student_id = $5, status = $6, updated_at = datetime('now')
             WHERE id = $7",
        )
        .bind(&account.email)
        .bind(&account.password)
        .bind(&account.nickname)
        .bind(&account.university)
        .bind(&account.student_id)
        .bind(account.status.as_str())
        .bind(account.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CommunityError::NotFound("account".to_string()));
        }

        self.get_by_id(account.id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("account".to_string()))
    }

    /// Get an account by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(AccountRow::into_account))
    }

    /// Find an account by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(AccountRow::into_account))
    }

    /// Find an account by exact nickname.
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Account>> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE nickname = $1");
        let row: Option<AccountRow> = sqlx::query_as(&query)
            .bind(nickname)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(AccountRow::into_account))
    }

    /// Check whether an email is already taken.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
                .bind(email)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }

    /// Check whether a nickname is already taken.
    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE nickname = $1)")
                .bind(nickname)
                .fetch_one(self.pool)
                .await?;
        Ok(exists)
    }

    /// Count all accounts, withdrawn ones included.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// Internal struct for mapping database rows to Account.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password: String,
    nickname: String,
    university: String,
    student_id: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            id: self.id,
            email: self.email,
            password: self.password,
            nickname: self.nickname,
            university: self.university,
            student_id: self.student_id,
            status: self.status.parse().unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn new_account(email: &str, nickname: &str) -> NewAccount {
        NewAccount::new(email, "password123", nickname, "Test University", "1234").unwrap()
    }

    #[tokio::test]
    async fn test_create_account() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());

        let account = repo
            .create(&new_account("testuser@domain.com", "testuser"))
            .await
            .unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(account.email, "testuser@domain.com");
        assert_eq!(account.nickname, "testuser");
        assert_eq!(account.status, AccountStatus::Registered);
        assert!(!account.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        repo.create(&new_account("dup@domain.com", "first"))
            .await
            .unwrap();

        let result = repo.create(&new_account("dup@domain.com", "second")).await;

        assert!(matches!(result, Err(CommunityError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_nickname() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        repo.create(&new_account("one@domain.com", "same"))
            .await
            .unwrap();

        let result = repo.create(&new_account("two@domain.com", "same")).await;

        assert!(matches!(result, Err(CommunityError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_store_rejects_empty_nickname() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());

        // Bypass the constructor to reach the store constraint.
        let draft = NewAccount {
            email: "testuser@domain.com".to_string(),
            password: "password123".to_string(),
            nickname: String::new(),
            university: "Test University".to_string(),
            student_id: "12345678".to_string(),
        };
        let result = repo.create(&draft).await;

        assert!(matches!(result, Err(CommunityError::Validation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_persists_update_and_withdraw() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        let mut account = repo
            .create(&new_account("testuser@domain.com", "testuser"))
            .await
            .unwrap();

        account
            .update_account("newemail@domain.com", "newnickname", "newpassword123")
            .unwrap();
        account.withdraw_account();
        let saved = repo.save(&account).await.unwrap();

        assert_eq!(saved.email, "newemail@domain.com");
        assert_eq!(saved.nickname, "newnickname");
        assert_eq!(saved.password, "newpassword123");
        assert_eq!(saved.status, AccountStatus::Unregistered);
        assert!(!repo.exists_by_email("testuser@domain.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_conflicting_email() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        repo.create(&new_account("taken@domain.com", "first"))
            .await
            .unwrap();
        let mut second = repo
            .create(&new_account("second@domain.com", "second"))
            .await
            .unwrap();

        second
            .update_account("taken@domain.com", "second", "password123")
            .unwrap();
        let result = repo.save(&second).await;

        assert!(matches!(result, Err(CommunityError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_save_unknown_account() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        let mut ghost = repo
            .create(&new_account("ghost@domain.com", "ghost"))
            .await
            .unwrap();
        ghost.id = 999;

        let result = repo.save(&ghost).await;
        assert!(matches!(result, Err(CommunityError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = setup_db().await;
        let repo = AccountRepository::new(db.pool());
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }
}
