//! Test helpers for integration tests.
//!
//! Provides an in-memory database and fixture accounts, boards and posts.

#![allow(dead_code)]

use std::sync::Arc;

use community::{
    Account, AccountRepository, Board, BoardRepository, Database, NewAccount, NewBoard, Post,
    PostService, WriterOpen,
};

/// Open a fresh in-memory database.
pub async fn setup_test_db() -> Arc<Database> {
    Arc::new(Database::open_in_memory().await.unwrap())
}

/// Create a registered account with a `@domain.com` address.
pub async fn create_test_account(db: &Database, nickname: &str) -> Account {
    let new_account = NewAccount::new(
        format!("{nickname}@domain.com"),
        "password123",
        nickname,
        "Test University",
        "20240001",
    )
    .unwrap();
    AccountRepository::new(db.pool())
        .create(&new_account)
        .await
        .unwrap()
}

/// Create a board owned by `owner`.
pub async fn create_test_board(db: &Database, owner: &Account) -> Board {
    let new_board = NewBoard::new(owner.id, "Test Board", "A test board", "Be kind").unwrap();
    BoardRepository::new(db.pool())
        .create(&new_board)
        .await
        .unwrap()
}

/// Create a public post on `board` written by `writer`.
pub async fn create_test_post(db: &Database, writer: &Account, board: &Board) -> Post {
    PostService::new(db)
        .create_post(
            writer.id,
            board.id,
            "Test Title",
            "This is test content.",
            WriterOpen::Public,
        )
        .await
        .unwrap()
}
