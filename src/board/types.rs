//! Board model.

use crate::{CommunityError, Result};

/// A forum space owned by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Unique board ID.
    pub id: i64,
    /// ID of the owning account.
    pub account_id: i64,
    /// Board name.
    pub board_name: String,
    /// Short description.
    pub board_description: String,
    /// Notice pinned to the board.
    pub board_notice: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modification timestamp.
    pub updated_at: String,
}

impl Board {
    /// Replace the board notice.
    pub fn update_notice(&mut self, notice: impl Into<String>) {
        self.board_notice = notice.into();
    }

    /// Apply the fields set in `update`.
    pub fn apply(&mut self, update: BoardUpdate) -> Result<()> {
        if let Some(name) = update.board_name {
            validate_board_name(&name)?;
            self.board_name = name;
        }
        if let Some(description) = update.board_description {
            self.board_description = description;
        }
        if let Some(notice) = update.board_notice {
            self.board_notice = notice;
        }
        Ok(())
    }

    /// Check whether the given account owns this board.
    pub fn is_owned_by(&self, account_id: i64) -> bool {
        self.account_id == account_id
    }
}

fn validate_board_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CommunityError::Validation("board name cannot be empty".to_string()));
    }
    Ok(())
}

/// Data for creating a new board.
#[derive(Debug, Clone)]
pub struct NewBoard {
    /// ID of the owning account.
    pub account_id: i64,
    /// Board name.
    pub board_name: String,
    /// Short description.
    pub board_description: String,
    /// Notice pinned to the board.
    pub board_notice: String,
}

impl NewBoard {
    /// Create a new board draft owned by `account_id`.
    pub fn new(
        account_id: i64,
        board_name: impl Into<String>,
        board_description: impl Into<String>,
        board_notice: impl Into<String>,
    ) -> Result<Self> {
        let board_name = board_name.into();
        validate_board_name(&board_name)?;
        Ok(Self {
            account_id,
            board_name,
            board_description: board_description.into(),
            board_notice: board_notice.into(),
        })
    }
}

/// Partial update for a board.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdate {
    /// New name.
    pub board_name: Option<String>,
    /// New description.
    pub board_description: Option<String>,
    /// New notice.
    pub board_notice: Option<String>,
}

impl BoardUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new name.
    pub fn board_name(mut self, name: impl Into<String>) -> Self {
        self.board_name = Some(name.into());
        self
    }

    /// Set new description.
    pub fn board_description(mut self, description: impl Into<String>) -> Self {
        self.board_description = Some(description.into());
        self
    }

    /// Set new notice.
    pub fn board_notice(mut self, notice: impl Into<String>) -> Self {
        self.board_notice = Some(notice.into());
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.board_name.is_none() && self.board_description.is_none() && self.board_notice.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board {
            id: 1,
            account_id: 1,
            board_name: "Test Board".to_string(),
            board_description: "A board for testing".to_string(),
            board_notice: "This is a test notice".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
            updated_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_new_board() {
        let board = NewBoard::new(3, "Test Board", "A board for testing", "Notice").unwrap();
        assert_eq!(board.account_id, 3);
        assert_eq!(board.board_name, "Test Board");
        assert_eq!(board.board_description, "A board for testing");
        assert_eq!(board.board_notice, "Notice");
    }

    #[test]
    fn test_new_board_blank_name() {
        let result = NewBoard::new(1, "   ", "desc", "notice");
        assert!(matches!(result, Err(CommunityError::Validation(_))));
    }

    #[test]
    fn test_update_notice() {
        let mut board = sample_board();
        board.update_notice("New notice");
        assert_eq!(board.board_notice, "New notice");
        assert_eq!(board.board_name, "Test Board");
    }

    #[test]
    fn test_apply_partial_update() {
        let mut board = sample_board();
        board
            .apply(BoardUpdate::new().board_description("Updated"))
            .unwrap();
        assert_eq!(board.board_description, "Updated");
        assert_eq!(board.board_notice, "This is a test notice");
    }

    #[test]
    fn test_apply_rejects_blank_name() {
        let mut board = sample_board();
        let result = board.apply(BoardUpdate::new().board_name(""));
        assert!(result.is_err());
        assert_eq!(board.board_name, "Test Board");
    }

    #[test]
    fn test_board_update_empty() {
        assert!(BoardUpdate::new().is_empty());
        assert!(!BoardUpdate::new().board_notice("x").is_empty());
    }

    #[test]
    fn test_is_owned_by() {
        let board = sample_board();
        assert!(board.is_owned_by(1));
        assert!(!board.is_owned_by(2));
    }
}
