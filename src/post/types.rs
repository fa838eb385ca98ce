//! Post model.

use std::fmt;
use std::str::FromStr;

/// Whether the writer of a post is shown to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterOpen {
    /// Writer nickname is shown.
    #[default]
    Public,
    /// Writer is shown as anonymous.
    Private,
}

impl WriterOpen {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterOpen::Public => "PUBLIC",
            WriterOpen::Private => "PRIVATE",
        }
    }

    /// Check whether the writer is shown.
    pub fn is_public(&self) -> bool {
        *self == WriterOpen::Public
    }
}

impl fmt::Display for WriterOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WriterOpen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PUBLIC" => Ok(WriterOpen::Public),
            "PRIVATE" => Ok(WriterOpen::Private),
            _ => Err(format!("unknown writer visibility: {s}")),
        }
    }
}

/// A post on a board.
///
/// Comments and hearts are not held in memory; they are loaded by query
/// (see `CommentRepository::list_by_post` and `PostHeartRepository::list_by_post`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// ID of the writing account.
    pub account_id: i64,
    /// ID of the board this post belongs to.
    pub board_id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Writer visibility.
    pub writer_open: WriterOpen,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl Post {
    /// Replace title and content. Everything else is unchanged.
    pub fn update(&mut self, update: &PostUpdate) {
        self.title = update.title.clone();
        self.content = update.content.clone();
    }

    /// Check whether the given account wrote this post.
    pub fn is_written_by(&self, account_id: i64) -> bool {
        self.account_id == account_id
    }
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// ID of the writing account.
    pub account_id: i64,
    /// ID of the board.
    pub board_id: i64,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Writer visibility.
    pub writer_open: WriterOpen,
}

impl NewPost {
    /// Create a new post draft.
    pub fn new(
        account_id: i64,
        board_id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        writer_open: WriterOpen,
    ) -> Self {
        Self {
            account_id,
            board_id,
            title: title.into(),
            content: content.into(),
            writer_open,
        }
    }
}

/// New title and content for a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
}

impl PostUpdate {
    /// Create an update replacing both fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
