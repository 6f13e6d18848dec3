//! Board module for corkboard.
//!
//! Message persistence plus the service layer orchestrating
//! authentication, validation, and ownership checks.

mod message;
mod repository;
mod service;

pub use message::{Message, NewMessage};
pub use repository::{validate_body, MessageRepository, MAX_BODY_LENGTH, MIN_BODY_LENGTH};
pub use service::{BoardService, Credentials, DEFAULT_FEED_LIMIT, MAX_FEED_LIMIT};
