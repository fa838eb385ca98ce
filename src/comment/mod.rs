//! Comment module.
//!
//! Replies attached to posts. A post's comments are always loaded by query.

mod repository;
mod types;

pub use repository::CommentRepository;
pub use types::{Comment, NewComment};
