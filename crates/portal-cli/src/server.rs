//! HTTP surface: the search page, the JSON lookup API and a health probe.
//!
//! The record store is shared read-only behind an `Arc`; each lookup runs on
//! the blocking pool so a slow request never stalls the accept loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use portal_core::{RecordStore, log_outcome, resolve_request};
use portal_model::{LookupError, StudentRecord};

use crate::render::{Outcome, render_page};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

/// Fields posted by the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_type: String,
    #[serde(default)]
    pub search_value: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
struct ApiFailure {
    kind: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    records: usize,
}

pub fn router(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/result", post(search_result))
        .route("/api/lookup", get(api_lookup))
        .route("/health", get(health))
        .with_state(AppState::new(store))
}

/// Binds `addr` and serves until Ctrl-C.
pub async fn serve(addr: SocketAddr, store: Arc<RecordStore>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, records = store.len(), "portal listening");
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("portal stopped");
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed the server simply runs until killed.
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

async fn home() -> Html<String> {
    Html(render_page("id", "", &Outcome::Blank))
}

async fn search_result(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Html<String> {
    let result = lookup(&state, &form.search_type, &form.search_value).await;
    let outcome = match &result {
        Ok(record) => Outcome::Found(record),
        Err(err) => Outcome::Failed(err),
    };
    Html(render_page(&form.search_type, &form.search_value, &outcome))
}

async fn api_lookup(State(state): State<AppState>, Query(params): Query<LookupParams>) -> Response {
    match lookup(&state, &params.mode, &params.q).await {
        Ok(record) => Json(record).into_response(),
        Err(err) => (
            status_for(&err),
            Json(ApiFailure {
                kind: err.kind(),
                message: err.user_message(),
            }),
        )
            .into_response(),
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.store.len(),
    })
}

/// Runs one lookup on the blocking pool.
///
/// A task that dies before answering is reported as an unexpected failure
/// instead of tearing down the connection.
async fn lookup(state: &AppState, mode: &str, query: &str) -> Result<StudentRecord, LookupError> {
    let store = Arc::clone(&state.store);
    let (task_mode, task_query) = (mode.to_string(), query.to_string());
    let task = tokio::task::spawn_blocking(move || {
        resolve_request(&store, &task_mode, &task_query).cloned()
    });
    match task.await {
        Ok(result) => result,
        Err(join_err) => {
            let err = LookupError::Unexpected {
                detail: join_err.to_string(),
            };
            log_outcome(mode, query, &Err(err.clone()));
            Err(err)
        }
    }
}

pub fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
        LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
        LookupError::Ambiguous { .. } => StatusCode::CONFLICT,
        LookupError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
