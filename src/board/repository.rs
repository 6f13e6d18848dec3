//! Message repository for corkboard.
//!
//! Persists messages and enforces the body-length and ownership rules at
//! the store boundary.

use sqlx::SqlitePool;

use super::message::{Message, NewMessage};
use crate::{BoardError, Result};

/// Minimum message body length (in characters).
pub const MIN_BODY_LENGTH: usize = 5;

/// Maximum message body length (in characters).
pub const MAX_BODY_LENGTH: usize = 140;

/// Validate a message body string.
///
/// Checked at creation and at every edit; no persisted message ever
/// violates the bounds.
pub fn validate_body(body: &str) -> Result<()> {
    let char_count = body.chars().count();
    if char_count < MIN_BODY_LENGTH || char_count > MAX_BODY_LENGTH {
        return Err(BoardError::Validation(format!(
            "message body must be between {MIN_BODY_LENGTH} and {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Repository for message CRUD operations.
pub struct MessageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new MessageRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new message.
    ///
    /// Fails with `Validation` if the body is outside the length bounds.
    /// The creation timestamp is assigned by the database.
    pub async fn create(&self, new_message: &NewMessage) -> Result<Message> {
        validate_body(&new_message.body)?;

        let result = sqlx::query("INSERT INTO messages (body, author_id) VALUES (?, ?)")
            .bind(&new_message.body)
            .bind(new_message.author_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("message".to_string()))
    }

    /// Get a message by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Message>> {
        let result = sqlx::query_as::<_, Message>(
            "SELECT id, body, author_id, created_at FROM messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List the most recent messages, newest first.
    ///
    /// Ordered by creation time descending, ties broken by ID descending
    /// (insertion order). Each call recomputes from current state.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, body, author_id, created_at FROM messages
             ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(messages)
    }

    /// Replace the body of a message owned by the caller.
    ///
    /// Fails with `NotFound` if no message has the ID, `Forbidden` if the
    /// caller is not the author, and `Validation` if the new body violates
    /// the length bounds. Ownership is checked before validation, and the
    /// write itself is guarded by the author check so a concurrent delete
    /// cannot produce a partial update. `created_at` is never touched.
    pub async fn update(&self, id: i64, caller_id: i64, new_body: &str) -> Result<Message> {
        self.check_ownership(id, caller_id).await?;
        validate_body(new_body)?;

        let result = sqlx::query("UPDATE messages SET body = ? WHERE id = ? AND author_id = ?")
            .bind(new_body)
            .bind(id)
            .bind(caller_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            // Deleted between the ownership check and the write
            return Err(BoardError::NotFound("message".to_string()));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("message".to_string()))
    }

    /// Permanently delete a message owned by the caller.
    ///
    /// Same existence and ownership checks as `update`.
    pub async fn delete(&self, id: i64, caller_id: i64) -> Result<()> {
        self.check_ownership(id, caller_id).await?;

        let result = sqlx::query("DELETE FROM messages WHERE id = ? AND author_id = ?")
            .bind(id)
            .bind(caller_id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BoardError::NotFound("message".to_string()));
        }

        Ok(())
    }

    /// Count all messages.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(count)
    }

    /// Verify that the message exists and the caller is its author.
    ///
    /// An authorless message has no owner, so mutation is always forbidden.
    async fn check_ownership(&self, id: i64, caller_id: i64) -> Result<()> {
        let message = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| BoardError::NotFound("message".to_string()))?;

        if message.author_id != Some(caller_id) {
            return Err(BoardError::Forbidden(
                "only the author may modify a message".to_string(),
            ));
        }

        Ok(())
    }
}
