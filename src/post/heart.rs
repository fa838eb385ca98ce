//! Post heart model.

use crate::account::Account;

use super::types::Post;

/// A like from one account on one post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostHeart {
    /// Unique heart ID.
    pub id: i64,
    /// ID of the liked post.
    pub post_id: i64,
    /// ID of the account that reacted.
    pub writer_id: i64,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating a new heart.
///
/// Built from a persisted post and account, so neither reference can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPostHeart {
    /// ID of the liked post.
    pub post_id: i64,
    /// ID of the reacting account.
    pub writer_id: i64,
}

impl NewPostHeart {
    /// Create a heart of `writer` on `post`.
    pub fn new(post: &Post, writer: &Account) -> Self {
        Self {
            post_id: post.id,
            writer_id: writer.id,
        }
    }
}
