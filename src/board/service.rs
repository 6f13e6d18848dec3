//! Board service for corkboard.
//!
//! Transport-agnostic orchestration of registration, sign-in, and message
//! operations. Mutating and reading message operations authenticate the
//! bearer token first and never touch the message store on failure.

use sqlx::SqlitePool;

use crate::auth::{self, hash_password, verify_password};
use crate::db::{NewUser, UserRepository};
use crate::{BoardError, Result};

use super::message::{Message, NewMessage};
use super::repository::MessageRepository;

/// Default number of messages returned by the feed.
pub const DEFAULT_FEED_LIMIT: i64 = 20;

/// Upper bound on the feed limit a caller may request.
pub const MAX_FEED_LIMIT: i64 = 100;

/// Credentials returned by registration and sign-in.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// User ID.
    pub id: i64,
    /// Opaque bearer token for subsequent requests.
    pub access_token: String,
}

/// Service for board operations.
pub struct BoardService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BoardService<'a> {
    /// Create a new BoardService with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new user and return their credentials.
    ///
    /// All three fields are required. The password is hashed before it
    /// reaches the store; registering an already-used email fails with
    /// `Duplicate`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Credentials> {
        if name.trim().is_empty() {
            return Err(BoardError::Validation("name is required".to_string()));
        }
        if email.trim().is_empty() {
            return Err(BoardError::Validation("email is required".to_string()));
        }
        if password.is_empty() {
            return Err(BoardError::Validation("password is required".to_string()));
        }

        let password_hash = hash_password(password)?;

        let user = UserRepository::new(self.pool)
            .create(&NewUser::new(name, email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "registered new user");

        Ok(Credentials {
            id: user.id,
            access_token: user.access_token,
        })
    }

    /// Sign in with email and password.
    ///
    /// Returns the same generic `Auth` error whether the email is unknown
    /// or the password is wrong, so the response never reveals which.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Credentials> {
        let user = UserRepository::new(self.pool)
            .get_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        verify_password(password, &user.password).map_err(|_| invalid_credentials())?;

        Ok(Credentials {
            id: user.id,
            access_token: user.access_token,
        })
    }

    /// List the most recent messages, newest first.
    ///
    /// Requires a valid bearer token. A missing or nonpositive `limit`
    /// falls back to [`DEFAULT_FEED_LIMIT`]; values above
    /// [`MAX_FEED_LIMIT`] are truncated. At most `limit` messages are
    /// returned.
    pub async fn list_messages(
        &self,
        token: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<Message>> {
        auth::authenticate(self.pool, token).await?;

        let limit = match limit {
            Some(l) if l > 0 => l.min(MAX_FEED_LIMIT),
            _ => DEFAULT_FEED_LIMIT,
        };
        MessageRepository::new(self.pool).list_recent(limit).await
    }

    /// Post a new message as the authenticated caller.
    pub async fn post_message(&self, token: Option<&str>, body: &str) -> Result<Message> {
        let user = auth::authenticate(self.pool, token).await?;

        MessageRepository::new(self.pool)
            .create(&NewMessage::new(body, Some(user.id)))
            .await
    }

    /// Edit a message owned by the authenticated caller.
    pub async fn edit_message(
        &self,
        token: Option<&str>,
        id: i64,
        new_body: &str,
    ) -> Result<Message> {
        let user = auth::authenticate(self.pool, token).await?;

        MessageRepository::new(self.pool)
            .update(id, user.id, new_body)
            .await
    }

    /// Delete a message owned by the authenticated caller.
    pub async fn delete_message(&self, token: Option<&str>, id: i64) -> Result<()> {
        let user = auth::authenticate(self.pool, token).await?;

        MessageRepository::new(self.pool).delete(id, user.id).await
    }
}

fn invalid_credentials() -> BoardError {
    BoardError::Auth("invalid email or password".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    async fn register_bob(service: &BoardService<'_>) -> Credentials {
        service
            .register("Bob", "bob@bob.com", "secret")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_credentials() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        assert!(creds.id > 0);
        assert_eq!(creds.access_token.len(), crate::auth::TOKEN_LENGTH);
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        register_bob(&service).await;

        let user = UserRepository::new(db.pool())
            .get_by_email("bob@bob.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(user.password, "secret");
        assert!(user.password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        register_bob(&service).await;

        let result = service.register("Robert", "bob@bob.com", "other").await;
        assert!(matches!(result, Err(BoardError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        assert!(matches!(
            service.register("", "a@a.com", "pw").await,
            Err(BoardError::Validation(_))
        ));
        assert!(matches!(
            service.register("A", "", "pw").await,
            Err(BoardError::Validation(_))
        ));
        assert!(matches!(
            service.register("A", "a@a.com", "").await,
            Err(BoardError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let registered = register_bob(&service).await;
        let signed_in = service.sign_in("bob@bob.com", "secret").await.unwrap();

        assert_eq!(signed_in.id, registered.id);
        // The token is issued once at registration, never regenerated
        assert_eq!(signed_in.access_token, registered.access_token);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        register_bob(&service).await;

        let result = service.sign_in("bob@bob.com", "wrong").await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_sign_in_failure_does_not_reveal_which_case() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        register_bob(&service).await;

        let wrong_password = service.sign_in("bob@bob.com", "wrong").await.unwrap_err();
        let unknown_email = service.sign_in("nobody@bob.com", "secret").await.unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_post_and_list_messages() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        let posted = service.post_message(token, "hello!").await.unwrap();
        assert_eq!(posted.body, "hello!");
        assert_eq!(posted.author_id, Some(creds.id));

        let feed = service.list_messages(token, None).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].body, "hello!");
    }

    #[tokio::test]
    async fn test_post_message_requires_token() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let result = service.post_message(None, "hello!").await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_list_messages_requires_token() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let result = service.list_messages(Some("bogus-token"), None).await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_invalid_token_never_touches_message_store() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let result = service.post_message(Some("bogus-token"), "hello!").await;
        assert!(matches!(result, Err(BoardError::Auth(_))));

        // Short-circuited before the store: nothing was written
        assert_eq!(
            MessageRepository::new(db.pool()).count().await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_post_message_validation() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        let result = service.post_message(token, "hi").await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[tokio::test]
    async fn test_feed_limit_defaults_to_twenty() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        for i in 0..25 {
            service
                .post_message(token, &format!("message number {i}"))
                .await
                .unwrap();
        }

        let feed = service.list_messages(token, None).await.unwrap();
        assert_eq!(feed.len() as i64, DEFAULT_FEED_LIMIT);

        let small = service.list_messages(token, Some(5)).await.unwrap();
        assert_eq!(small.len(), 5);
        assert_eq!(small[0].body, "message number 24");
    }

    #[tokio::test]
    async fn test_feed_limit_out_of_range() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        for i in 0..25 {
            service
                .post_message(token, &format!("message number {i}"))
                .await
                .unwrap();
        }

        // Nonpositive limits fall back to the default
        let feed = service.list_messages(token, Some(0)).await.unwrap();
        assert_eq!(feed.len() as i64, DEFAULT_FEED_LIMIT);
        let feed = service.list_messages(token, Some(-5)).await.unwrap();
        assert_eq!(feed.len() as i64, DEFAULT_FEED_LIMIT);

        // Oversized limits are truncated, never rejected
        let feed = service.list_messages(token, Some(10_000)).await.unwrap();
        assert_eq!(feed.len(), 25);
    }

    #[tokio::test]
    async fn test_edit_message_roundtrip() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        let posted = service.post_message(token, "first draft").await.unwrap();
        let edited = service
            .edit_message(token, posted.id, "final draft")
            .await
            .unwrap();

        assert_eq!(edited.id, posted.id);
        assert_eq!(edited.body, "final draft");
    }

    #[tokio::test]
    async fn test_edit_message_of_another_user_is_forbidden() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let bob = register_bob(&service).await;
        let eve = service
            .register("Eve", "eve@eve.com", "hunter2")
            .await
            .unwrap();

        let posted = service
            .post_message(Some(bob.access_token.as_str()), "bob's message")
            .await
            .unwrap();

        let result = service
            .edit_message(Some(eve.access_token.as_str()), posted.id, "eve's edit")
            .await;
        assert!(matches!(result, Err(BoardError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_delete_message_roundtrip() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let creds = register_bob(&service).await;
        let token = Some(creds.access_token.as_str());

        let posted = service.post_message(token, "ephemeral note").await.unwrap();
        service.delete_message(token, posted.id).await.unwrap();

        let feed = service.list_messages(token, None).await.unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_delete_message_of_another_user_is_forbidden() {
        let db = setup_db().await;
        let service = BoardService::new(db.pool());

        let bob = register_bob(&service).await;
        let eve = service
            .register("Eve", "eve@eve.com", "hunter2")
            .await
            .unwrap();

        let posted = service
            .post_message(Some(bob.access_token.as_str()), "bob's message")
            .await
            .unwrap();

        let result = service
            .delete_message(Some(eve.access_token.as_str()), posted.id)
            .await;
        assert!(matches!(result, Err(BoardError::Forbidden(_))));
    }
}
