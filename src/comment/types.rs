//! Comment model.

use crate::{CommunityError, Result};

/// A reply to a post.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: i64,
    /// ID of the parent post.
    pub post_id: i64,
    /// ID of the writing account.
    pub account_id: i64,
    /// Comment body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl Comment {
    /// Replace the comment body.
    pub fn update_content(&mut self, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        validate_content(&content)?;
        self.content = content;
        Ok(())
    }

    /// Check whether the given account wrote this comment.
    pub fn is_written_by(&self, account_id: i64) -> bool {
        self.account_id == account_id
    }
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(CommunityError::Validation("comment cannot be empty".to_string()));
    }
    Ok(())
}

/// Data for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// ID of the parent post.
    pub post_id: i64,
    /// ID of the writing account.
    pub account_id: i64,
    /// Comment body.
    pub content: String,
}

impl NewComment {
    /// Create a new comment draft with a non-empty body.
    pub fn new(post_id: i64, account_id: i64, content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        validate_content(&content)?;
        Ok(Self {
            post_id,
            account_id,
            content,
        })
    }
}
