//! Post heart repository.
//!
//! `create` is a plain insert for callers that checked
//! `exists_by_writer_and_post` first. `create_if_absent` folds the check into
//! the insert statement. Either way the UNIQUE(writer_id, post_id) constraint
//! is the last guard.

use super::heart::{NewPostHeart, PostHeart};
use crate::db::DbPool;
use crate::{CommunityError, Result};

/// Repository for post heart persistence.
pub struct PostHeartRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostHeartRepository<'a> {
    /// Create a new PostHeartRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a heart.
    ///
    /// A duplicate pair fails with `Conflict`, an unknown post or writer with
    /// `Validation`.
    pub async fn create(&self, new_heart: &NewPostHeart) -> Result<PostHeart> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO post_hearts (post_id, writer_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(new_heart.post_id)
        .bind(new_heart.writer_id)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("post heart".to_string()))
    }

    /// Insert a heart unless the pair already exists, in a single statement.
    ///
    /// Returns `None` when the writer already hearted the post.
    pub async fn create_if_absent(&self, new_heart: &NewPostHeart) -> Result<Option<PostHeart>> {
        let id: Option<i64> = sqlx::query_scalar(
            "INSERT INTO post_hearts (post_id, writer_id)
             SELECT $1, $2
             WHERE NOT EXISTS (
                 SELECT 1 FROM post_hearts WHERE post_id = $1 AND writer_id = $2
             )
             RETURNING id",
        )
        .bind(new_heart.post_id)
        .bind(new_heart.writer_id)
        .fetch_optional(self.pool)
        .await?;

        match id {
            Some(id) => self.get_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Get a heart by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<PostHeart>> {
        let heart = sqlx::query_as::<_, PostHeart>(
            "SELECT id, post_id, writer_id, created_at FROM post_hearts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(heart)
    }

    /// Count hearts on a post.
    pub async fn count_by_post(&self, post_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_hearts WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// All hearts given by an account, oldest first.
    pub async fn find_by_writer(&self, writer_id: i64) -> Result<Vec<PostHeart>> {
        let hearts = sqlx::query_as::<_, PostHeart>(
            "SELECT id, post_id, writer_id, created_at FROM post_hearts
             WHERE writer_id = $1 ORDER BY id ASC",
        )
        .bind(writer_id)
        .fetch_all(self.pool)
        .await?;
        Ok(hearts)
    }

    /// All hearts on a post, oldest first.
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<PostHeart>> {
        let hearts = sqlx::query_as::<_, PostHeart>(
            "SELECT id, post_id, writer_id, created_at FROM post_hearts
             WHERE post_id = $1 ORDER BY id ASC",
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;
        Ok(hearts)
    }

    /// Find the heart of a writer on a post.
    pub async fn find_by_writer_and_post(
        &self,
        writer_id: i64,
        post_id: i64,
    ) -> Result<Option<PostHeart>> {
        let heart = sqlx::query_as::<_, PostHeart>(
            "SELECT id, post_id, writer_id, created_at FROM post_hearts
             WHERE writer_id = $1 AND post_id = $2",
        )
        .bind(writer_id)
        .bind(post_id)
        .fetch_optional(self.pool)
        .await?;
        Ok(heart)
    }

    /// Check whether a writer already hearted a post.
    pub async fn exists_by_writer_and_post(&self, writer_id: i64, post_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM post_hearts WHERE writer_id = $1 AND post_id = $2)",
        )
        .bind(writer_id)
        .bind(post_id)
        .fetch_one(self.pool)
        .await?;
        Ok(exists)
    }

    /// Delete a heart by ID.
    ///
    /// Returns true if a heart was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM post_hearts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
