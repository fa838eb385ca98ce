//! Post service.
//!
//! Post, comment and heart operations that need more than one repository:
//! existence of the referenced account/board/post, writer-only edits,
//! content limits, and the one-heart-per-account rule.

use tracing::info;

use crate::account::{Account, AccountRepository};
use crate::board::BoardRepository;
use crate::comment::{Comment, CommentRepository, NewComment};
use crate::config::CommunityConfig;
use crate::db::Database;
use crate::{CommunityError, Result};

use super::heart::{NewPostHeart, PostHeart};
use super::heart_repository::PostHeartRepository;
use super::repository::PostRepository;
use super::response::{PostCommentResponse, PostResponse};
use super::types::{NewPost, Post, PostUpdate, WriterOpen};

fn validate_text(field: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CommunityError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(CommunityError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(())
}

/// Service for post, comment and heart operations.
pub struct PostService<'a> {
    db: &'a Database,
    limits: CommunityConfig,
}

impl<'a> PostService<'a> {
    /// Create a new PostService with default content limits.
    pub fn new(db: &'a Database) -> Self {
        Self::with_limits(db, CommunityConfig::default())
    }

    /// Create a new PostService with the given content limits.
    pub fn with_limits(db: &'a Database, limits: CommunityConfig) -> Self {
        Self { db, limits }
    }

    async fn registered_account(&self, account_id: i64) -> Result<Account> {
        let account = AccountRepository::new(self.db.pool())
            .get_by_id(account_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("account".to_string()))?;
        if !account.is_registered() {
            return Err(CommunityError::Validation("withdrawn accounts cannot write".to_string()));
        }
        Ok(account)
    }

    /// Get a post by ID, failing with `NotFound` when absent.
    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        PostRepository::new(self.db.pool())
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("post".to_string()))
    }

    /// Create a post on a board.
    pub async fn create_post(
        &self,
        writer_id: i64,
        board_id: i64,
        title: &str,
        content: &str,
        writer_open: WriterOpen,
    ) -> Result<Post> {
        validate_text("title", title, self.limits.max_title_length)?;
        validate_text("content", content, self.limits.max_content_length)?;

        let writer = self.registered_account(writer_id).await?;
        BoardRepository::new(self.db.pool())
            .get_by_id(board_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("board".to_string()))?;

        let post = PostRepository::new(self.db.pool())
            .create(&NewPost::new(writer.id, board_id, title, content, writer_open))
            .await?;

        info!(post_id = post.id, board_id, writer_id, "Post created");
        Ok(post)
    }

    /// Replace title and content. Only the writer may do this.
    pub async fn update_post(
        &self,
        post_id: i64,
        writer_id: i64,
        update: &PostUpdate,
    ) -> Result<Post> {
        validate_text("title", &update.title, self.limits.max_title_length)?;
        validate_text("content", &update.content, self.limits.max_content_length)?;

        let mut post = self.get_post(post_id).await?;
        if !post.is_written_by(writer_id) {
            return Err(CommunityError::Permission(
                "only the writer can edit this post".to_string(),
            ));
        }

        post.update(update);
        let saved = PostRepository::new(self.db.pool()).save(&post).await?;

        info!(post_id, "Post updated");
        Ok(saved)
    }

    /// Delete a post with its comments and hearts. Only the writer may do this.
    pub async fn delete_post(&self, post_id: i64, writer_id: i64) -> Result<()> {
        let post = self.get_post(post_id).await?;
        if !post.is_written_by(writer_id) {
            return Err(CommunityError::Permission(
                "only the writer can delete this post".to_string(),
            ));
        }

        PostRepository::new(self.db.pool()).delete(post_id).await?;
        info!(post_id, "Post deleted");
        Ok(())
    }

    /// Heart a post.
    ///
    /// The existence check and the insert are a single statement, so two
    /// concurrent reactions of the same account produce one heart and one
    /// `Conflict`.
    pub async fn react(&self, post_id: i64, account_id: i64) -> Result<PostHeart> {
        let account = self.registered_account(account_id).await?;
        let post = self.get_post(post_id).await?;

        let heart = PostHeartRepository::new(self.db.pool())
            .create_if_absent(&NewPostHeart::new(&post, &account))
            .await?
            .ok_or_else(|| CommunityError::Conflict("post already hearted".to_string()))?;

        info!(post_id, account_id, "Post hearted");
        Ok(heart)
    }

    /// Remove an account's heart from a post.
    pub async fn unreact(&self, post_id: i64, account_id: i64) -> Result<()> {
        let repo = PostHeartRepository::new(self.db.pool());
        let heart = repo
            .find_by_writer_and_post(account_id, post_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("post heart".to_string()))?;

        repo.delete(heart.id).await?;
        info!(post_id, account_id, "Post heart removed");
        Ok(())
    }

    /// Add a comment to a post.
    pub async fn add_comment(
        &self,
        post_id: i64,
        account_id: i64,
        content: &str,
    ) -> Result<Comment> {
        validate_text("comment", content, self.limits.max_comment_length)?;

        let account = self.registered_account(account_id).await?;
        let post = self.get_post(post_id).await?;

        let comment = CommentRepository::new(self.db.pool())
            .create(&NewComment::new(post.id, account.id, content)?)
            .await?;

        info!(
            comment_id = comment.id,
            post_id,
            account_id,
            "Comment created"
        );
        Ok(comment)
    }

    /// Edit a comment. Only its writer may do this.
    pub async fn update_comment(
        &self,
        comment_id: i64,
        account_id: i64,
        content: &str,
    ) -> Result<Comment> {
        validate_text("comment", content, self.limits.max_comment_length)?;

        let repo = CommentRepository::new(self.db.pool());
        let mut comment = repo
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("comment".to_string()))?;
        if !comment.is_written_by(account_id) {
            return Err(CommunityError::Permission(
                "only the writer can edit this comment".to_string(),
            ));
        }

        comment.update_content(content)?;
        repo.save(&comment).await
    }

    /// Delete a comment. Only its writer may do this.
    pub async fn delete_comment(&self, comment_id: i64, account_id: i64) -> Result<()> {
        let repo = CommentRepository::new(self.db.pool());
        let comment = repo
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("comment".to_string()))?;
        if !comment.is_written_by(account_id) {
            return Err(CommunityError::Permission(
                "only the writer can delete this comment".to_string(),
            ));
        }

        repo.delete(comment_id).await?;
        info!(comment_id, "Comment deleted");
        Ok(())
    }

    /// Comments of a post in creation order.
    pub async fn comments_of(&self, post_id: i64) -> Result<Vec<Comment>> {
        CommentRepository::new(self.db.pool())
            .list_by_post(post_id)
            .await
    }

    /// Hearts of a post, oldest first.
    pub async fn hearts_of(&self, post_id: i64) -> Result<Vec<PostHeart>> {
        PostHeartRepository::new(self.db.pool())
            .list_by_post(post_id)
            .await
    }

    /// Bundle a post ID with its comments and their count.
    pub async fn comment_bundle(&self, post_id: i64) -> Result<PostCommentResponse> {
        let post = self.get_post(post_id).await?;
        let comments = self.comments_of(post.id).await?;
        Ok(PostCommentResponse::of(post.id, &comments))
    }

    /// Detailed view of a post with heart and comment counts.
    pub async fn post_detail(&self, post_id: i64) -> Result<PostResponse> {
        let post = self.get_post(post_id).await?;
        let writer = AccountRepository::new(self.db.pool())
            .get_by_id(post.account_id)
            .await?
            .ok_or_else(|| CommunityError::NotFound("account".to_string()))?;
        let heart_count = PostHeartRepository::new(self.db.pool())
            .count_by_post(post.id)
            .await?;
        let comment_count = CommentRepository::new(self.db.pool())
            .count_by_post(post.id)
            .await?;

        Ok(PostResponse::of(&post, &writer, heart_count, comment_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::NewAccount;
    use crate::board::NewBoard;

    struct Fixture {
        db: Database,
        writer: Account,
        reader: Account,
        board_id: i64,
    }

    async fn setup() -> Fixture {
        let db = Database::open_in_memory().await.unwrap();
        let accounts = AccountRepository::new(db.pool());
        let draft = NewAccount::new("writer@domain.com", "password123", "writer", "Univ", "1");
        let writer = accounts.create(&draft.unwrap()).await.unwrap();
        let draft = NewAccount::new("reader@domain.com", "password123", "reader", "Univ", "2");
        let reader = accounts.create(&draft.unwrap()).await.unwrap();
        let board = BoardRepository::new(db.pool())
            .create(&NewBoard::new(writer.id, "Test Board", "", "").unwrap())
            .await
            .unwrap();
        Fixture {
            db,
            writer,
            reader,
            board_id: board.id,
        }
    }

    #[tokio::test]
    async fn test_new_post_has_no_comments_or_hearts() {
        let f = setup().await;
        let service = PostService::new(&f.db);

        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();

        assert!(service.comments_of(post.id).await.unwrap().is_empty());
        assert!(service.hearts_of(post.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_limits() {
        let f = setup().await;
        let limits = CommunityConfig {
            max_title_length: 5,
            ..CommunityConfig::default()
        };
        let service = PostService::with_limits(&f.db, limits);
        let (writer_id, board_id) = (f.writer.id, f.board_id);

        let err = service
            .create_post(writer_id, board_id, "Too long", "Body", WriterOpen::Public)
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Validation(_)));

        let err = service
            .create_post(writer_id, board_id, "Ok", "  ", WriterOpen::Public)
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_post_unknown_board() {
        let f = setup().await;
        let service = PostService::new(&f.db);

        let err = service
            .create_post(f.writer.id, 999, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_post_only_by_writer() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();
        let update = PostUpdate::new("Updated Title", "Updated content.");

        let err = service
            .update_post(post.id, f.reader.id, &update)
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Permission(_)));

        let updated = service
            .update_post(post.id, f.writer.id, &update)
            .await
            .unwrap();
        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, "Updated content.");
    }

    #[tokio::test]
    async fn test_react_once_per_account() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();

        let heart = service.react(post.id, f.reader.id).await.unwrap();
        assert_eq!(heart.writer_id, f.reader.id);

        let err = service.react(post.id, f.reader.id).await.unwrap_err();
        assert!(matches!(err, CommunityError::Conflict(_)));

        service.react(post.id, f.writer.id).await.unwrap();
        assert_eq!(service.hearts_of(post.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unreact() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();
        service.react(post.id, f.reader.id).await.unwrap();

        service.unreact(post.id, f.reader.id).await.unwrap();
        assert!(service.hearts_of(post.id).await.unwrap().is_empty());

        let err = service.unreact(post.id, f.reader.id).await.unwrap_err();
        assert!(matches!(err, CommunityError::NotFound(_)));

        // Hearting again after un-reacting is allowed.
        service.react(post.id, f.reader.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_withdrawn_account_cannot_comment() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();

        let mut reader = f.reader.clone();
        reader.withdraw_account();
        let accounts = AccountRepository::new(f.db.pool());
        accounts.save(&reader).await.unwrap();

        let err = service
            .add_comment(post.id, reader.id, "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Validation(_)));
    }

    #[tokio::test]
    async fn test_comment_edit_and_delete_by_writer_only() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();
        let comment = service
            .add_comment(post.id, f.reader.id, "first")
            .await
            .unwrap();

        let err = service
            .update_comment(comment.id, f.writer.id, "hijack")
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Permission(_)));

        let edited = service
            .update_comment(comment.id, f.reader.id, "edited")
            .await
            .unwrap();
        assert_eq!(edited.content, "edited");

        let err = service.delete_comment(comment.id, f.writer.id).await;
        assert!(err.is_err());
        service
            .delete_comment(comment.id, f.reader.id)
            .await
            .unwrap();
        assert!(service.comments_of(post.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_bundle() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();
        service
            .add_comment(post.id, f.reader.id, "one")
            .await
            .unwrap();
        service
            .add_comment(post.id, f.writer.id, "two")
            .await
            .unwrap();

        let bundle = service.comment_bundle(post.id).await.unwrap();

        assert_eq!(bundle.post_id, post.id);
        assert_eq!(bundle.count, 2);
        assert_eq!(bundle.post_comment_list.len(), 2);
        assert_eq!(bundle.post_comment_list[0].content, "one");

        let err = service.comment_bundle(999).await.unwrap_err();
        assert!(matches!(err, CommunityError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_post_detail_hides_private_writer() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let private = WriterOpen::Private;
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", private)
            .await
            .unwrap();
        service.react(post.id, f.reader.id).await.unwrap();
        service
            .add_comment(post.id, f.reader.id, "hi")
            .await
            .unwrap();

        let detail = service.post_detail(post.id).await.unwrap();

        assert_eq!(detail.writer_name, crate::post::ANONYMOUS_WRITER);
        assert_eq!(detail.heart_count, 1);
        assert_eq!(detail.comment_count, 1);
    }

    #[tokio::test]
    async fn test_delete_post_cascades() {
        let f = setup().await;
        let service = PostService::new(&f.db);
        let post = service
            .create_post(f.writer.id, f.board_id, "Title", "Body", WriterOpen::Public)
            .await
            .unwrap();
        service
            .add_comment(post.id, f.reader.id, "hi")
            .await
            .unwrap();
        service.react(post.id, f.reader.id).await.unwrap();

        let err = service.delete_post(post.id, f.reader.id).await.unwrap_err();
        assert!(matches!(err, CommunityError::Permission(_)));

        service.delete_post(post.id, f.writer.id).await.unwrap();

        assert!(service.comments_of(post.id).await.unwrap().is_empty());
        assert!(service.hearts_of(post.id).await.unwrap().is_empty());
        assert!(matches!(
            service.get_post(post.id).await,
            Err(CommunityError::NotFound(_))
        ));
    }
}
