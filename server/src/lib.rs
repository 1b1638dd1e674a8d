use axum::{extract::{Path, Query, State}, http::{HeaderMap, HeaderValue, StatusCode}, routing::{get, post}, Json, Router};
use engine::{paginate, remove_duplicates, DocId, Document, DocumentStatus, RequestQueue, SearchEngine, SearchError};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}
fn default_page_size() -> usize { 5 }

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub page: usize,
    pub pages: usize,
    pub results: Vec<Document>,
    /// Empty results among the last requests of the window, this one included.
    pub no_result_requests: usize,
}

#[derive(Deserialize)]
pub struct MatchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub doc_id: DocId,
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

#[derive(Serialize)]
pub struct DocResponse {
    pub doc_id: DocId,
    pub frequencies: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
pub struct NewDocument {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

/// The engine has no internal locking: readers share it, mutations take it exclusively.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<SearchEngine>>,
    pub requests: Arc<Mutex<RequestQueue>>,
    pub admin_token: Option<String>,
    pub cors_origins: Option<String>,
}

impl AppState {
    pub fn new(engine: SearchEngine, admin_token: Option<String>) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            requests: Arc::new(Mutex::new(RequestQueue::new())),
            admin_token,
            cors_origins: None,
        }
    }

    pub fn with_cors_origins(mut self, origins: Option<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}

pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

type ApiError = (StatusCode, String);

fn api_error(err: SearchError) -> ApiError {
    let status = match err {
        SearchError::InvalidTerm(_) | SearchError::MalformedQueryTerm(_) => StatusCode::BAD_REQUEST,
        SearchError::DuplicateDocumentId(_) => StatusCode::CONFLICT,
        SearchError::UnknownDocumentId(_) => StatusCode::NOT_FOUND,
    };
    (status, err.to_string())
}

/// Comma-separated allowed origins; anything unparsable or empty allows every origin.
pub fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .into_iter()
        .flat_map(|val| val.split(','))
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let allow_origin = if origins.is_empty() { AllowOrigin::from(Any) } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(state.cors_origins.as_deref());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/doc/:doc_id", get(doc_handler).delete(delete_doc))
        .route("/doc/:doc_id/match", get(match_handler))
        .route("/index/batch", post(index_batch))
        .route("/index/dedup", post(index_dedup))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Json<SearchResponse>, ApiError> {
    let start = std::time::Instant::now();
    let engine = state.engine.read();
    let mut requests = state.requests.lock();
    let hits = requests
        .add_find_request_by_status(&engine, &params.q, params.status)
        .map_err(api_error)?;
    let no_result_requests = requests.no_result_requests();
    drop(requests);
    drop(engine);

    let pages = paginate(&hits, params.page_size);
    let results = pages.page(params.page).map(<[Document]>::to_vec).unwrap_or_default();
    let elapsed = start.elapsed();
    Ok(Json(SearchResponse {
        query: params.q,
        took_s: elapsed.as_secs_f64(),
        total_hits: hits.len(),
        page: params.page,
        pages: pages.len(),
        results,
        no_result_requests,
    }))
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>) -> Result<Json<DocResponse>, ApiError> {
    let engine = state.engine.read();
    if !engine.contains(doc_id) {
        return Err(api_error(SearchError::UnknownDocumentId(doc_id)));
    }
    Ok(Json(DocResponse { doc_id, frequencies: engine.word_frequencies(doc_id).clone() }))
}

pub async fn match_handler(State(state): State<AppState>, Path(doc_id): Path<DocId>, Query(params): Query<MatchParams>) -> Result<Json<MatchResponse>, ApiError> {
    let (words, status) = state.engine.read().match_document(&params.q, doc_id).map_err(api_error)?;
    Ok(Json(MatchResponse { doc_id, words, status }))
}

// --- Admin endpoints ---
async fn index_batch(State(state): State<AppState>, headers: HeaderMap, Json(docs): Json<Vec<NewDocument>>) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    let mut engine = state.engine.write();
    let mut added = 0usize;
    for doc in docs {
        if let Err(err) = engine.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
            tracing::warn!(added, error = %err, "batch stopped");
            let (status, msg) = api_error(err);
            return Err((status, format!("{msg} (added {added} documents before the failure)")));
        }
        added += 1;
    }
    tracing::info!(added, num_docs = engine.document_count(), "batch indexed");
    Ok(Json(serde_json::json!({ "added": added, "num_docs": engine.document_count() })))
}

async fn delete_doc(State(state): State<AppState>, headers: HeaderMap, Path(doc_id): Path<DocId>) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    let mut engine = state.engine.write();
    let removed = engine.contains(doc_id);
    engine.remove_document(doc_id);
    Ok(Json(serde_json::json!({ "doc_id": doc_id, "removed": removed })))
}

async fn index_dedup(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, ApiError> {
    authorize(&state, &headers)?;
    let mut engine = state.engine.write();
    let removed = remove_duplicates(&mut engine);
    Ok(Json(serde_json::json!({ "removed": removed, "num_docs": engine.document_count() })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(required) = state.admin_token.as_deref() else {
        return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into()));
    };
    match headers.get(ADMIN_TOKEN_HEADER) {
        Some(provided) if provided.as_bytes() == required.as_bytes() => Ok(()),
        _ => Err((StatusCode::UNAUTHORIZED, "invalid admin token".into())),
    }
}
