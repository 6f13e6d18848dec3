//! Router configuration for the Web API.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    delete_message, edit_message, list_messages, post_message, register, sign_in, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/sign-in", post(sign_in));

    let message_routes = Router::new()
        .route("/", get(list_messages).post(post_message))
        .route("/:id", put(edit_message).delete(delete_message));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/messages", message_routes);

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Root handler.
async fn index() -> &'static str {
    "Hello message board"
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
