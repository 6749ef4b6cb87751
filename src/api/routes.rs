//! API Routes
//!
//! Configures the Axum router with all word service endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_word_handler, delete_word_handler, health_handler, list_words_handler,
    redact_handler, stats_handler, update_word_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/words",
            get(list_words_handler).post(create_word_handler),
        )
        .route("/api/words/redact", get(redact_handler))
        .route(
            "/api/words/:id",
            put(update_word_handler).delete(delete_word_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
