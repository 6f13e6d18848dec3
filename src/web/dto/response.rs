//! Response DTOs for the Web API.

use serde::Serialize;

use crate::board::{Credentials, Message};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Credentials returned by register and sign-in.
#[derive(Debug, Serialize)]
pub struct CredentialsResponse {
    /// User ID.
    pub id: i64,
    /// Opaque bearer token for subsequent requests.
    pub access_token: String,
}

impl From<Credentials> for CredentialsResponse {
    fn from(creds: Credentials) -> Self {
        Self {
            id: creds.id,
            access_token: creds.access_token,
        }
    }
}

/// A message in feed and mutation responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Message ID.
    pub id: i64,
    /// Message text.
    pub body: String,
    /// Author's user ID, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            body: message.body,
            author_id: message.author_id,
            created_at: message.created_at,
        }
    }
}
