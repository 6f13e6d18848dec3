//! Bearer token extraction.
//!
//! The dispatch layer only parses the token out of the request; whether it
//! is valid is decided by the core, so this extractor never rejects.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::convert::Infallible;

/// Extractor for the bearer token of a request, if any.
///
/// Accepts both `Authorization: Bearer <token>` and a bare
/// `Authorization: <token>` header. A missing or empty header yields
/// `None`; the core treats that the same as an unknown token.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    /// The token as an optional string slice.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(|header| header.strip_prefix("Bearer ").unwrap_or(header).trim())
                .filter(|t| !t.is_empty())
                .map(|t| t.to_string());

            Ok(BearerToken(token))
        })
    }
}
