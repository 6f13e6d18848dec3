//! corkboard - a small message board API server
//!
//! Users register, receive an opaque bearer access token, and use it to
//! read, post, edit, and delete short text messages.

pub mod auth;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    authenticate, hash_password, issue_token, verify_password, PasswordError, TOKEN_LENGTH,
};
pub use board::{
    BoardService, Credentials, Message, MessageRepository, NewMessage, DEFAULT_FEED_LIMIT,
    MAX_BODY_LENGTH, MIN_BODY_LENGTH,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{BoardError, Result};
pub use web::WebServer;
