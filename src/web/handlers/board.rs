//! Message handlers for the Web API.
//!
//! Every handler forwards the raw bearer token to the board service, which
//! authenticates before touching the message store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    ApiResponse, EditMessageRequest, FeedQuery, MessageResponse, PostMessageRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::BearerToken;

/// GET /api/messages - List the most recent messages, newest first.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Query(query): Query<FeedQuery>,
) -> Result<Json<ApiResponse<Vec<MessageResponse>>>, ApiError> {
    let service = BoardService::new(state.db.pool());
    let messages = service.list_messages(token.as_deref(), query.limit).await?;

    let responses: Vec<MessageResponse> =
        messages.into_iter().map(MessageResponse::from).collect();

    Ok(Json(ApiResponse::new(responses)))
}

/// POST /api/messages - Post a new message.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Json(req): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    let service = BoardService::new(state.db.pool());
    let message = service.post_message(token.as_deref(), &req.body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(message.into())),
    ))
}

/// PUT /api/messages/:id - Edit an owned message.
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Path(id): Path<i64>,
    Json(req): Json<EditMessageRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let service = BoardService::new(state.db.pool());
    let message = service.edit_message(token.as_deref(), id, &req.body).await?;

    Ok(Json(ApiResponse::new(message.into())))
}

/// DELETE /api/messages/:id - Delete an owned message.
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    token: BearerToken,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let service = BoardService::new(state.db.pool());
    service.delete_message(token.as_deref(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
