//! Database schema and migrations for corkboard.
//!
//! Migrations are applied sequentially when the database is opened.
//! The schema_version table tracks which migrations have been applied.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Users table
    r#"
-- Registered identities with credentials and opaque access tokens
CREATE TABLE users (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    email        TEXT NOT NULL UNIQUE,
    password     TEXT NOT NULL,                      -- Argon2 hash, never plaintext
    access_token TEXT NOT NULL UNIQUE,
    created_at   TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_email ON users(email);
CREATE INDEX idx_users_access_token ON users(access_token);
"#,
    // v2: Messages table
    r#"
-- Posted messages, ordered by creation time
CREATE TABLE messages (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    body       TEXT NOT NULL,
    author_id  INTEGER REFERENCES users(id),         -- lookup-only weak reference
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_messages_author_id ON messages(author_id);
CREATE INDEX idx_messages_created_at ON messages(created_at);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_migrations_are_valid_sql_fragments() {
        for migration in MIGRATIONS {
            assert!(migration.contains("CREATE"));
        }
    }
}
