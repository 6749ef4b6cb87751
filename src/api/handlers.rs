//! API Handlers
//!
//! HTTP request handlers for each word service endpoint. Handlers validate
//! and marshal; all policy lives in `WordService`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::WordCache;
use crate::error::{Result, WordError};
use crate::models::{
    parse_word_id, HealthResponse, ListQuery, MessageResponse, RedactQuery, ResourceResponse,
    SaveWordRequest, StatsResponse, WordResource,
};
use crate::service::WordService;
use crate::store::WordStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: WordService,
}

impl AppState {
    /// Creates a new AppState around the given store and cache.
    pub fn new(store: Arc<dyn WordStore>, cache: WordCache) -> Self {
        Self {
            service: WordService::new(store, cache),
        }
    }
}

/// Handler for GET /api/words?id=<uuid>
pub async fn list_words_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ResourceResponse<Vec<WordResource>>>> {
    let id = query.id.as_deref().map(parse_word_id).transpose()?;
    let response = state.service.get_words(id).await?;
    Ok(Json(response))
}

/// Handler for POST /api/words
pub async fn create_word_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveWordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let req = validated(payload)?;
    let response = state.service.save_word(&req, None).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT /api/words/:id
pub async fn update_word_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<SaveWordRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let id = parse_word_id(&id)?;
    let req = validated(payload)?;
    let response = state.service.save_word(&req, Some(id)).await?;
    Ok(Json(response))
}

/// Handler for DELETE /api/words/:id
pub async fn delete_word_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_word_id(&id)?;
    let response = state.service.delete_word(id).await?;
    Ok(Json(response))
}

/// Handler for GET /api/words/redact?sentence=...
pub async fn redact_handler(
    State(state): State<AppState>,
    Query(query): Query<RedactQuery>,
) -> Result<Json<ResourceResponse<String>>> {
    let sentence = query.into_sentence()?;
    Ok(Json(state.service.redact_sentence(&sentence).await))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache().stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

fn validated(
    payload: std::result::Result<Json<SaveWordRequest>, JsonRejection>,
) -> Result<SaveWordRequest> {
    let Json(req) = payload.map_err(|e| WordError::invalid(e.body_text()))?;
    match req.validate() {
        Some(msg) => Err(WordError::invalid(msg)),
        None => Ok(req),
    }
}
