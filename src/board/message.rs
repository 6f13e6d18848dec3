//! Message model for corkboard.

/// Message entity representing one post on the board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    /// Unique message ID.
    pub id: i64,
    /// Message text.
    pub body: String,
    /// ID of the user who posted the message, if any.
    ///
    /// A lookup-only weak reference; it does not own the user's lifecycle.
    pub author_id: Option<i64>,
    /// Creation timestamp, immutable, the sole ordering key.
    pub created_at: String,
}

/// Data for creating a new message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Message text.
    pub body: String,
    /// Author, if the message is posted by an authenticated user.
    pub author_id: Option<i64>,
}

impl NewMessage {
    /// Create a new message with required fields.
    pub fn new(body: impl Into<String>, author_id: Option<i64>) -> Self {
        Self {
            body: body.into(),
            author_id,
        }
    }
}
