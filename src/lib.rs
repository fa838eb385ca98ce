//! Community - a board, post and comment backend for university communities.
//!
//! Accounts own boards, write posts and comments, and heart posts.
//! Everything is persisted in SQLite through sqlx.

pub mod account;
pub mod board;
pub mod comment;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod post;

pub use account::{
    hash_password, validate_password, verify_password, Account, AccountRepository, AccountService,
    AccountStatus, AccountValidationError, NewAccount, PasswordError, RegistrationRequest,
};
pub use board::{Board, BoardRepository, BoardUpdate, NewBoard};
pub use comment::{Comment, CommentRepository, NewComment};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{CommunityError, Result};
pub use post::{
    CommentResponse, NewPost, NewPostHeart, Post, PostCommentResponse, PostHeart,
    PostHeartRepository, PostRepository, PostResponse, PostService, PostUpdate, WriterOpen,
};
