//! Web API module for corkboard.
//!
//! The dispatch layer: binds the board service's operations to HTTP
//! routes, parses bearer tokens out of request headers, and maps core
//! errors to status codes. All invariants live in the core.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
