//! Post module.
//!
//! This module provides:
//! - Posts written by an account on a board
//! - Hearts (one per account and post)
//! - Response bundles for a post and its comments
//! - A service tying posts, comments and hearts together

mod heart;
mod heart_repository;
mod repository;
mod response;
mod service;
mod types;

pub use heart::{NewPostHeart, PostHeart};
pub use heart_repository::PostHeartRepository;
pub use repository::PostRepository;
pub use response::{CommentResponse, PostCommentResponse, PostResponse, ANONYMOUS_WRITER};
pub use service::PostService;
pub use types::{NewPost, Post, PostUpdate, WriterOpen};
