//! Response shapes for posts and their comments.

use serde::Serialize;

use crate::account::Account;
use crate::comment::Comment;

use super::types::Post;

/// Display name used for writers of PRIVATE posts.
pub const ANONYMOUS_WRITER: &str = "anonymous";

/// Summary of one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    /// Comment ID.
    pub comment_id: i64,
    /// Parent post ID.
    pub post_id: i64,
    /// Writer account ID.
    pub writer_id: i64,
    /// Comment body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl CommentResponse {
    /// Build a summary from a comment.
    pub fn of(comment: &Comment) -> Self {
        Self {
            comment_id: comment.id,
            post_id: comment.post_id,
            writer_id: comment.account_id,
            content: comment.content.clone(),
            created_at: comment.created_at.clone(),
            updated_at: comment.updated_at.clone(),
        }
    }
}

/// A post ID with its comments.
///
/// `count` always equals `post_comment_list.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCommentResponse {
    /// Post ID.
    pub post_id: i64,
    /// Comment summaries in creation order.
    pub post_comment_list: Vec<CommentResponse>,
    /// Number of comments.
    pub count: i64,
}

impl PostCommentResponse {
    /// Bundle the comments of a post.
    pub fn of(post_id: i64, comments: &[Comment]) -> Self {
        let post_comment_list: Vec<CommentResponse> =
            comments.iter().map(CommentResponse::of).collect();
        Self {
            post_id,
            count: post_comment_list.len() as i64,
            post_comment_list,
        }
    }
}

/// Detailed view of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub post_id: i64,
    /// Board ID.
    pub board_id: i64,
    /// Writer nickname, or [`ANONYMOUS_WRITER`] for PRIVATE posts.
    pub writer_name: String,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// `PUBLIC` or `PRIVATE`.
    pub writer_open: String,
    /// Number of hearts.
    pub heart_count: i64,
    /// Number of comments.
    pub comment_count: i64,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl PostResponse {
    /// Build the view of `post`, hiding the writer if the post is PRIVATE.
    pub fn of(post: &Post, writer: &Account, heart_count: i64, comment_count: i64) -> Self {
        let writer_name = if post.writer_open.is_public() {
            writer.nickname.clone()
        } else {
            ANONYMOUS_WRITER.to_string()
        };

        Self {
            post_id: post.id,
            board_id: post.board_id,
            writer_name,
            title: post.title.clone(),
            content: post.content.clone(),
            writer_open: post.writer_open.as_str().to_string(),
            heart_count,
            comment_count,
            created_at: post.created_at.clone(),
            updated_at: post.updated_at.clone(),
        }
    }
}
