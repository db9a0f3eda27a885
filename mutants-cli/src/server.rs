//! HTTP API.
//!
//! Two endpoints, mirroring the service contract:
//!
//! - `POST /mutant` with `{"dna": ["ATGCGA", ...]}` classifies a DNA
//!   matrix. Mutants get `200 OK`, humans `403 Forbidden`, both with a
//!   `{"is_mutant": bool}` body; a malformed matrix gets `400`.
//! - `GET /stats` reports the running mutant/human counters and their
//!   ratio.
//!
//! Results are cached by a content hash of the matrix, so a previously
//! seen sample is answered without rescanning and without touching the
//! counters. The scanner is deterministic, which keeps the cache sound.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use mutants::{DnaGrid, GridError, identify};

/// Shared state behind the router: the result cache and the aggregate
/// classification counters. Counters only ever increase.
#[derive(Debug, Default)]
pub struct AppState {
    cache: RwLock<HashMap<Uuid, bool>>,
    mutant_count: AtomicU64,
    human_count: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct DnaRequest {
    dna: Vec<String>,
}

#[derive(Debug, Serialize)]
struct IdentifyResponse {
    is_mutant: bool,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    count_human_dna: u64,
    count_mutant_dna: u64,
    ratio: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Handler-level error: a malformed DNA matrix maps to `400` with an
/// `{"error": ...}` body.
#[derive(Debug)]
struct ApiError(GridError);

impl From<GridError> for ApiError {
    fn from(e: GridError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the application router over the given state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/mutant", post(identify_mutant))
        .route("/stats", get(dna_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(AppState::default());
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Content hash of a DNA matrix: UUIDv5 (SHA-1) over the concatenated rows.
fn dna_hash(rows: &[String]) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, rows.concat().as_bytes())
}

// axum extractors are taken by value.
#[allow(clippy::needless_pass_by_value)]
async fn identify_mutant(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DnaRequest>,
) -> Result<Response, ApiError> {
    // Validate before consulting the cache: the hash concatenates rows,
    // so a malformed matrix could otherwise collide with a cached valid
    // one and be served its classification instead of a 400.
    let grid = DnaGrid::parse(&request.dna)?;
    let hash = dna_hash(&request.dna);

    if let Some(cached) = state.cache.read().await.get(&hash).copied() {
        return Ok(classification_response(cached));
    }

    let is_mutant = match state.cache.write().await.entry(hash) {
        // Lost a race with an identical request; its result stands and
        // the counters were already bumped once.
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            let is_mutant = identify(&grid);
            if is_mutant {
                state.mutant_count.fetch_add(1, Ordering::Relaxed);
            } else {
                state.human_count.fetch_add(1, Ordering::Relaxed);
            }
            entry.insert(is_mutant);
            is_mutant
        }
    };

    Ok(classification_response(is_mutant))
}

fn classification_response(is_mutant: bool) -> Response {
    let status = if is_mutant {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };
    (status, Json(IdentifyResponse { is_mutant })).into_response()
}

// axum handlers must be async even when nothing awaits.
#[allow(clippy::unused_async, clippy::needless_pass_by_value)]
async fn dna_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let count_mutant_dna = state.mutant_count.load(Ordering::Relaxed);
    let count_human_dna = state.human_count.load(Ordering::Relaxed);

    Json(StatsResponse {
        count_human_dna,
        count_mutant_dna,
        ratio: mutant_ratio(count_mutant_dna, count_human_dna),
    })
}

/// Mutant/human ratio rounded to two decimals; zero whenever either
/// counter is still zero.
#[allow(clippy::cast_precision_loss)]
fn mutant_ratio(mutants: u64, humans: u64) -> f64 {
    if mutants == 0 || humans == 0 {
        return 0.0;
    }
    let ratio = mutants as f64 / humans as f64;
    (ratio * 100.0).round() / 100.0
}
