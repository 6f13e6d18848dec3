//! Authentication for corkboard.
//!
//! Password hashing, access token issuance, and token-based request
//! authentication.

mod authenticate;
pub mod password;
pub mod token;

pub use authenticate::authenticate;
pub use password::{hash_password, verify_password, PasswordError};
pub use token::{issue_token, TOKEN_LENGTH};
