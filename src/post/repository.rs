//! Post repository.

use super::types::{NewPost, Post, WriterOpen};
use crate::db::DbPool;
use crate::{CommunityError, Result};

const POST_COLUMNS: &str =
    "id, account_id, board_id, title, content, writer_open, created_at, updated_at";

/// Repository for post persistence.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new post.
    ///
    /// Unknown account or board IDs fail with `Validation` (foreign key).
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (account_id, board_id, title, content, writer_open)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(new_post.account_id)
        .bind(new_post.board_id)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.writer_open.as_str())
        .fetch_one(self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("post".to_string()))
    }

    /// Persist title, content and visibility of an existing post.
    pub async fn save(&self, post: &Post) -> Result<Post> {
        let result = sqlx::query(
            "UPDATE posts
             SET title = $1, content = $2, writer_open = $3, updated_at = datetime('now')
             WHERE id = $4",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.writer_open.as_str())
        .bind(post.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CommunityError::NotFound("post".to_string()));
        }

        self.get_by_id(post.id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("post".to_string()))
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.map(PostRow::into_post))
    }

    /// List posts on a board, newest first.
    pub async fn list_by_board(&self, board_id: i64) -> Result<Vec<Post>> {
        let query = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE board_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(board_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    /// List posts written by an account, newest first.
    pub async fn list_by_account(&self, account_id: i64) -> Result<Vec<Post>> {
        let query = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE account_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(account_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    /// Delete a post together with its comments and hearts.
    ///
    /// Returns true if a post was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    account_id: i64,
    board_id: i64,
    title: String,
    content: String,
    writer_open: String,
    created_at: String,
    updated_at: String,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            account_id: self.account_id,
            board_id: self.board_id,
            title: self.title,
            content: self.content,
            writer_open: self.writer_open.parse().unwrap_or(WriterOpen::Public),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountRepository, NewAccount};
    use crate::board::{BoardRepository, NewBoard};
    use crate::post::PostUpdate;
    use crate::Database;

    async fn setup() -> (Database, i64, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let draft = NewAccount::new("user@domain.com", "password123", "nickname", "U", "1");
        let account = AccountRepository::new(db.pool())
            .create(&draft.unwrap())
            .await
            .unwrap();
        let board = BoardRepository::new(db.pool())
            .create(&NewBoard::new(account.id, "Test Board", "", "").unwrap())
            .await
            .unwrap();
        (db, account.id, board.id)
    }

    #[tokio::test]
    async fn test_create_post() {
        let (db, account_id, board_id) = setup().await;
        let repo = PostRepository::new(db.pool());

        let post = repo
            .create(&NewPost::new(
                account_id,
                board_id,
                "Test Title",
                "This is the content of the post.",
                WriterOpen::Public,
            ))
            .await
            .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.account_id, account_id);
        assert_eq!(post.board_id, board_id);
        assert_eq!(post.title, "Test Title");
        assert_eq!(post.writer_open, WriterOpen::Public);
    }

    #[tokio::test]
    async fn test_create_post_unknown_board() {
        let (db, account_id, _) = setup().await;
        let repo = PostRepository::new(db.pool());

        let result = repo
            .create(&NewPost::new(account_id, 999, "T", "C", WriterOpen::Public))
            .await;

        assert!(matches!(result, Err(CommunityError::Validation(_))));
    }

    #[tokio::test]
    async fn test_save_updated_post() {
        let (db, account_id, board_id) = setup().await;
        let repo = PostRepository::new(db.pool());
        let mut post = repo
            .create(&NewPost::new(
                account_id,
                board_id,
                "Original Title",
                "Original content.",
                WriterOpen::Private,
            ))
            .await
            .unwrap();

        post.update(&PostUpdate::new("Updated Title", "Updated content."));
        let saved = repo.save(&post).await.unwrap();

        assert_eq!(saved.title, "Updated Title");
        assert_eq!(saved.content, "Updated content.");
        assert_eq!(saved.writer_open, WriterOpen::Private);
        assert_eq!(saved.created_at, post.created_at);
    }

    #[tokio::test]
    async fn test_list_by_board_newest_first() {
        let (db, account_id, board_id) = setup().await;
        let repo = PostRepository::new(db.pool());
        for title in ["first", "second", "third"] {
            repo.create(&NewPost::new(account_id, board_id, title, "body", WriterOpen::Public))
                .await
                .unwrap();
        }

        let posts = repo.list_by_board(board_id).await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
        assert_eq!(repo.list_by_account(account_id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_board_cascades_posts() {
        let (db, account_id, board_id) = setup().await;
        let repo = PostRepository::new(db.pool());
        repo.create(&NewPost::new(account_id, board_id, "T", "C", WriterOpen::Public))
            .await
            .unwrap();

        let boards = BoardRepository::new(db.pool());
        boards.delete(board_id).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
