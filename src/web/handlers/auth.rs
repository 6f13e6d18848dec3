//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::board::BoardService;
use crate::web::dto::{ApiResponse, CredentialsResponse, RegisterRequest, SignInRequest};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/auth/register - Register a new user.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CredentialsResponse>>), ApiError> {
    // Required fields first, then email shape
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }
    if req.email.trim().is_empty() {
        return Err(ApiError::bad_request("Email is required"));
    }
    if req.password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }
    req.validate().map_err(ApiError::from_validation_errors)?;

    let service = BoardService::new(state.db.pool());
    let creds = service.register(&req.name, &req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(creds.into())),
    ))
}

/// POST /api/auth/sign-in - Sign in with email and password.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<CredentialsResponse>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let service = BoardService::new(state.db.pool());
    let creds = service.sign_in(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::new(creds.into())))
}
