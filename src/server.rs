//! JSON HTTP API over the catalog and the guided flows.
//!
//! One immutable [`Catalog`] is loaded at startup and shared by every
//! handler through [`AppState`]. Search endpoints take a criteria record as
//! the request body; fields left out are inactive.
//!
//! # Endpoints
//!
//! | Method | Path | Body | Description |
//! |--------|------|------|-------------|
//! | `GET`  | `/health` | | Status and version |
//! | `GET`  | `/emergency?facility=` | | Helplines and hospitals, nearest first |
//! | `POST` | `/doctors/search` | `DoctorCriteria` | Filtered doctor directory |
//! | `POST` | `/articles/search` | `ArticleCriteria` | Filtered articles |
//! | `POST` | `/videos/search` | `VideoCriteria` | Filtered videos |
//! | `POST` | `/records/search` | `RecordCriteria` | Filtered health records |
//! | `POST` | `/symptoms/search` | `{search, selected}` | Symptom suggestions |
//! | `POST` | `/symptoms/assess` | `{age, gender, location, symptoms}` | Run the symptom checker |
//! | `POST` | `/register/validate` | registration form | Step-by-step validation |
//!
//! Search responses are `{ "count": n, "results": [...] }` in catalog order.
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "unknown specialty: 'dermatology'" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a browser front-end
//! can call the API directly.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use healthsathi_core::criteria::{ArticleCriteria, DoctorCriteria, RecordCriteria, VideoCriteria};
use healthsathi_core::filter::{filter, Criteria};
use healthsathi_core::registration::{submit, RegistrationForm};
use healthsathi_core::symptom::search_symptoms;
use healthsathi_core::wizard::Wizard;
use healthsathi_core::Catalog;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::emergency::emergency_info;
use crate::symptoms::{check_symptoms, resolve_symptoms, CheckRequest};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the router with all routes and middleware attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/emergency", get(handle_emergency))
        .route("/doctors/search", post(handle_doctors))
        .route("/articles/search", post(handle_articles))
        .route("/videos/search", post(handle_videos))
        .route("/records/search", post(handle_records))
        .route("/symptoms/search", post(handle_symptom_search))
        .route("/symptoms/assess", post(handle_assess))
        .route("/register/validate", post(handle_register))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `[server].bind` until the process is terminated.
pub async fn run_server(config: Config, catalog: Catalog) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let app = router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "HealthSathi API listening");
    println!("HealthSathi API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Error type that converts into a JSON error response.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = %self.code, "{}", self.message);
        } else {
            tracing::debug!(code = %self.code, "{}", self.message);
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

/// Unwrap a JSON body, reporting malformed input in the error contract.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| bad_request(rejection.body_text()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| internal(e.to_string()))
}

/// Apply `criteria` and wrap the hits as `{ count, results }`.
fn search_response<T, C>(items: &[T], criteria: &C) -> Result<Json<Value>, AppError>
where
    T: Serialize,
    C: Criteria<T>,
{
    let hits = filter(items, criteria);
    Ok(Json(json!({
        "count": hits.len(),
        "results": to_json(&hits)?,
    })))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn handle_not_found() -> AppError {
    not_found("no such endpoint")
}

// ============ GET /emergency ============

#[derive(Deserialize)]
struct EmergencyQuery {
    facility: Option<String>,
}

async fn handle_emergency(
    State(state): State<AppState>,
    Query(query): Query<EmergencyQuery>,
) -> Result<Json<Value>, AppError> {
    let info = emergency_info(&state.catalog, query.facility.as_deref());
    Ok(Json(to_json(&info)?))
}

// ============ POST /<collection>/search ============

async fn handle_doctors(
    State(state): State<AppState>,
    payload: Result<Json<DoctorCriteria>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let criteria = body(payload)?;
    search_response(&state.catalog.doctors, &criteria)
}

async fn handle_articles(
    State(state): State<AppState>,
    payload: Result<Json<ArticleCriteria>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let criteria = body(payload)?;
    search_response(&state.catalog.articles, &criteria)
}

async fn handle_videos(
    State(state): State<AppState>,
    payload: Result<Json<VideoCriteria>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let criteria = body(payload)?;
    search_response(&state.catalog.videos, &criteria)
}

async fn handle_records(
    State(state): State<AppState>,
    payload: Result<Json<RecordCriteria>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let criteria = body(payload)?;
    search_response(&state.catalog.records, &criteria)
}

// ============ POST /symptoms/* ============

#[derive(Deserialize, Default)]
#[serde(default)]
struct SymptomSearchRequest {
    search: String,
    /// Ids or names of symptoms already picked; these are left out.
    selected: Vec<String>,
}

async fn handle_symptom_search(
    State(state): State<AppState>,
    payload: Result<Json<SymptomSearchRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = body(payload)?;
    let selected = resolve_symptoms(&state.catalog, &request.selected)
        .map_err(|e| bad_request(e.to_string()))?;
    let hits = search_symptoms(&state.catalog.symptoms, &request.search, &selected);
    Ok(Json(json!({
        "count": hits.len(),
        "results": to_json(&hits)?,
    })))
}

async fn handle_assess(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = body(payload)?;
    let assessment =
        check_symptoms(&state.catalog, &request).map_err(|e| bad_request(format!("{:#}", e)))?;
    Ok(Json(to_json(&assessment)?))
}

// ============ POST /register/validate ============

/// Walks the registration flow as far as the form allows.
///
/// Always `200`: an incomplete form is a normal answer, reported with the
/// blocking step and its missing fields.
async fn handle_register(
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let form = body(payload)?;
    let mut wizard = Wizard::new(form);
    while wizard.advance().is_ok() {}

    match submit(&wizard) {
        Ok(registration) => Ok(Json(json!({
            "complete": true,
            "step": wizard.step(),
            "progress": wizard.progress(),
            "registration": to_json(&registration)?,
        }))),
        Err(_) => Ok(Json(json!({
            "complete": false,
            "step": wizard.step(),
            "progress": wizard.progress(),
            "missing": wizard.missing(),
            "password_mismatch": wizard.form().password_mismatch(),
        }))),
    }
}
