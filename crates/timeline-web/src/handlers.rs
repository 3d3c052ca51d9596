//! JSON API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/events` | Filtered events and summary (`year`, `actors`, `topic`) |
//! | `GET` | `/api/events/{id}` | Single event |
//! | `GET` | `/api/history` | History page content |
//! | `GET` | `/api/map/overlays` | Static map layers |
//! | `POST` | `/api/chat` | Ask the chat gateway |
//! | `GET` | `/api/health` | Liveness and active chat backend |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use timeline_core::{MapQuery, filter_events, summarize};
use timeline_types::{ChatExchange, EventRecord, FilterSummary, HistoryContent, MapOverlay};
use tracing::info;

use crate::error::SiteError;
use crate::state::AppState;

/// Response body for `GET /api/events`.
#[derive(Debug, Serialize)]
pub struct EventsResponse<'a> {
    /// Matching events in catalog order.
    pub events: Vec<&'a EventRecord>,
    /// Counts for the statistics panel.
    pub summary: FilterSummary,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The question to ask.
    pub question: String,
    /// Overrides the configured preamble when present.
    #[serde(default)]
    pub system_preamble: Option<String>,
}

/// Response body for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Name of the active chat backend.
    pub chat_backend: &'static str,
    /// Number of events in the catalog.
    pub events: usize,
}

/// List events matching the map query. An unknown topic is rejected.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<serde_json::Value>, SiteError> {
    let criteria = query.to_criteria()?;
    let events = filter_events(state.catalog.events(), &criteria);
    let summary = summarize(state.catalog.len(), events.len(), &criteria);
    let body = serde_json::to_value(EventsResponse { events, summary })?;
    Ok(Json(body))
}

/// Fetch one event by id.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EventRecord>, SiteError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| SiteError::NotFound(format!("event {id} not found")))
}

/// History page content.
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryContent> {
    Json(state.history.clone())
}

/// Static map overlays.
pub async fn list_overlays(State(state): State<Arc<AppState>>) -> Json<Vec<MapOverlay>> {
    Json(state.overlays.clone())
}

/// Ask the chat gateway and return the full exchange.
///
/// Without a `system_preamble` in the body the configured one is used.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatExchange>, SiteError> {
    let preamble = request.system_preamble.as_deref().or_else(|| state.preamble());
    let exchange = state.gateway.exchange(&request.question, preamble).await?;
    info!(
        backend = state.gateway.name(),
        answer_chars = exchange.answer.chars().count(),
        "chat answered"
    );
    Ok(Json(exchange))
}

/// Liveness check.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        chat_backend: state.gateway.name(),
        events: state.catalog.len(),
    })
}
