//! User repository for corkboard.
//!
//! This module provides the credential store: user creation with access
//! token issuance, plus lookups by id, email, and token.

use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::auth::issue_token;
use crate::{BoardError, Result};

/// How many fresh tokens to try before giving up on a collision.
///
/// Tokens carry 256 bits of entropy, so a single retry is already
/// vanishingly unlikely; the loop exists to uphold the uniqueness
/// invariant, not because collisions are expected.
const TOKEN_RETRY_LIMIT: usize = 3;

/// Repository for user credential operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user with a freshly issued access token.
    ///
    /// Fails with `Duplicate("email")` if the email is already registered.
    /// On the (negligible-probability) token collision, a new token is
    /// generated and the insert retried. Uniqueness of both columns is
    /// enforced by the database, so concurrent registrations with the same
    /// email cannot both succeed.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        for _ in 0..TOKEN_RETRY_LIMIT {
            let token = issue_token();

            let result = sqlx::query(
                "INSERT INTO users (name, email, password, access_token) VALUES (?, ?, ?, ?)",
            )
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .bind(&token)
            .execute(self.pool)
            .await;

            match result {
                Ok(done) => {
                    let id = done.last_insert_rowid();
                    return self
                        .get_by_id(id)
                        .await?
                        .ok_or_else(|| BoardError::NotFound("user".to_string()));
                }
                Err(e) if is_unique_violation(&e, "users.email") => {
                    return Err(BoardError::Duplicate("email".to_string()));
                }
                Err(e) if is_unique_violation(&e, "users.access_token") => {
                    // Token collision: retry with a fresh token
                    continue;
                }
                Err(e) => return Err(BoardError::Database(e.to_string())),
            }
        }

        Err(BoardError::Database(
            "could not allocate a unique access token".to_string(),
        ))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, access_token, created_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, access_token, created_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by access token.
    pub async fn get_by_token(&self, token: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, access_token, created_at
             FROM users WHERE access_token = ?",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;
        Ok(count)
    }
}

/// Check whether a sqlx error is a UNIQUE violation on the given column.
fn is_unique_violation(e: &sqlx::Error, column: &str) -> bool {
    match e.as_database_error() {
        Some(db_err) => {
            let msg = db_err.message();
            msg.contains("UNIQUE constraint failed") && msg.contains(column)
        }
        None => false,
    }
}
