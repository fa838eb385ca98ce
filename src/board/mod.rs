//! Board module.
//!
//! Named forum spaces, each owned by an account.

mod repository;
mod types;

pub use repository::BoardRepository;
pub use types::{Board, BoardUpdate, NewBoard};
