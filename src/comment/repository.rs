//! Comment repository.

use super::types::{Comment, NewComment};
use crate::db::DbPool;
use crate::{CommunityError, Result};

/// Repository for comment persistence.
pub struct CommentRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new comment.
    ///
    /// Unknown post or account IDs fail with `Validation` (foreign key).
    pub async fn create(&self, new_comment: &NewComment) -> Result<Comment> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, account_id, content) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(new_comment.post_id)
        .bind(new_comment.account_id)
        .bind(&new_comment.content)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("comment".to_string()))
    }

    /// Persist the content of an existing comment.
    pub async fn save(&self, comment: &Comment) -> Result<Comment> {
        let result = sqlx::query(
            "UPDATE comments SET content = $1, updated_at = datetime('now') WHERE id = $2",
        )
        .bind(&comment.content)
        .bind(comment.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CommunityError::NotFound("comment".to_string()));
        }

        self.get_by_id(comment.id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("comment".to_string()))
    }

    /// Get a comment by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, account_id, content, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(comment)
    }

    /// List comments on a post in creation order.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, account_id, content, created_at, updated_at
             FROM comments WHERE post_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    /// List comments written by an account, newest first.
    pub async fn list_by_writer(&self, account_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, account_id, content, created_at, updated_at
             FROM comments WHERE account_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(account_id)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    /// Count comments on a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Delete a comment by ID.
    ///
    /// Returns true if a comment was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
