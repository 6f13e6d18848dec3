//! User model for corkboard.

/// User entity representing a registered identity.
///
/// Users are created once at registration and never mutated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name (no uniqueness constraint).
    pub name: String,
    /// Email address, globally unique, used only for sign-in lookup.
    pub email: String,
    /// Argon2 hash of the password. The plaintext is never stored.
    pub password: String,
    /// Opaque bearer token, globally unique, generated once at creation.
    pub access_token: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash (already hashed by the caller).
    pub password: String,
}

impl NewUser {
    /// Create a new user record with required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password_hash.into(),
        }
    }
}
