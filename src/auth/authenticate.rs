//! Token-based request authentication.

use sqlx::SqlitePool;

use crate::db::{User, UserRepository};
use crate::{BoardError, Result};

/// Resolve a bearer token to the user that owns it.
///
/// A missing token and an unknown token produce the same error, so callers
/// cannot tell which case occurred. Store failures propagate as `Database`
/// errors and are not mistaken for bad credentials.
pub async fn authenticate(pool: &SqlitePool, token: Option<&str>) -> Result<User> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(unauthenticated)?;

    UserRepository::new(pool)
        .get_by_token(token)
        .await?
        .ok_or_else(unauthenticated)
}

fn unauthenticated() -> BoardError {
    BoardError::Auth("invalid or missing access token".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::NewUser;
    use crate::Database;

    async fn setup() -> (Database, User) {
        let db = Database::open_in_memory().await.unwrap();
        let user = UserRepository::new(db.pool())
            .create(&NewUser::new("Bob", "bob@bob.com", "hash"))
            .await
            .unwrap();
        (db, user)
    }

    #[tokio::test]
    async fn test_authenticate_valid_token() {
        let (db, user) = setup().await;

        let resolved = authenticate(db.pool(), Some(&user.access_token))
            .await
            .unwrap();
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.email, "bob@bob.com");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let (db, _user) = setup().await;

        let result = authenticate(db.pool(), Some("definitely-not-a-token")).await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_authenticate_missing_token() {
        let (db, _user) = setup().await;

        let result = authenticate(db.pool(), None).await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_authenticate_empty_token() {
        let (db, _user) = setup().await;

        let result = authenticate(db.pool(), Some("")).await;
        assert!(matches!(result, Err(BoardError::Auth(_))));
    }

    #[tokio::test]
    async fn test_missing_and_unknown_yield_same_error() {
        let (db, _user) = setup().await;

        let missing = authenticate(db.pool(), None).await.unwrap_err();
        let unknown = authenticate(db.pool(), Some("bogus")).await.unwrap_err();

        assert_eq!(missing.to_string(), unknown.to_string());
    }
}
