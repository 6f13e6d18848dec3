//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::Validate;

/// User registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password (hashed before storage, never logged).
    pub password: String,
}

/// Sign-in request.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// New message request.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    /// Message text.
    pub body: String,
}

/// Message edit request.
#[derive(Debug, Deserialize)]
pub struct EditMessageRequest {
    /// Replacement message text.
    pub body: String,
}

/// Query parameters for the message feed.
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    /// Maximum number of messages to return.
    #[serde(default)]
    pub limit: Option<i64>,
}
