//! Board repository.

use super::types::{Board, NewBoard};
use crate::db::DbPool;
use crate::{CommunityError, Result};

const BOARD_COLUMNS: &str =
    "id, account_id, board_name, board_description, board_notice, created_at, updated_at";

/// Repository for board persistence.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new board.
    ///
    /// An unknown owner fails with `Validation` (foreign key).
    pub async fn create(&self, new_board: &NewBoard) -> Result<Board> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (account_id, board_name, board_description, board_notice)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(new_board.account_id)
        .bind(&new_board.board_name)
        .bind(&new_board.board_description)
        .bind(&new_board.board_notice)
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("board".to_string()))
    }

    /// Persist name, description and notice of an existing board.
    pub async fn save(&self, board: &Board) -> Result<Board> {
        let result = sqlx::query(
            "UPDATE boards
             SET board_name = $1, board_description = $2, board_notice = $3,
                 updated_at = datetime('now')
             WHERE id = $4",
        )
        .bind(&board.board_name)
        .bind(&board.board_description)
        .bind(&board.board_notice)
        .bind(board.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CommunityError::NotFound("board".to_string()));
        }

        self.get_by_id(board.id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("board".to_string()))
    }

    /// Get a board by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Board>> {
        let query = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1");
        let board = sqlx::query_as::<_, BoardRow>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(board.map(Board::from))
    }

    /// Find the first board with the given name.
    pub async fn find_by_name(&self, board_name: &str) -> Result<Option<Board>> {
        let query = format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE board_name = $1 ORDER BY id ASC LIMIT 1"
        );
        let board = sqlx::query_as::<_, BoardRow>(&query)
            .bind(board_name)
            .fetch_optional(self.pool)
            .await?;
        Ok(board.map(Board::from))
    }

    /// List boards owned by an account, oldest first.
    pub async fn list_by_account(&self, account_id: i64) -> Result<Vec<Board>> {
        let query =
            format!("SELECT {BOARD_COLUMNS} FROM boards WHERE account_id = $1 ORDER BY id ASC");
        let rows = sqlx::query_as::<_, BoardRow>(&query)
            .bind(account_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(Board::from).collect())
    }

    /// List all boards, oldest first.
    pub async fn list_all(&self) -> Result<Vec<Board>> {
        let query = format!("SELECT {BOARD_COLUMNS} FROM boards ORDER BY id ASC");
        let rows = sqlx::query_as::<_, BoardRow>(&query)
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(Board::from).collect())
    }

    /// Delete a board and, by cascade, its posts.
    ///
    /// Returns true if a board was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all boards.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[derive(sqlx::FromRow)]
struct BoardRow {
    id: i64,
    account_id: i64,
    board_name: String,
    board_description: String,
    board_notice: String,
    created_at: String,
    updated_at: String,
}

impl From<BoardRow> for Board {
    fn from(row: BoardRow) -> Self {
        Board {
            id: row.id,
            account_id: row.account_id,
            board_name: row.board_name,
            board_description: row.board_description,
            board_notice: row.board_notice,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
