//! Axum router and request handlers.

use crate::error::ApiError;
use crate::models::ListParams;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use dowel::domain::{Issue, IssueDraft, IssueId, IssueList, IssueQuery};
use dowel::storage::IssueStorage;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The issue store behind the API.
    pub store: Arc<dyn IssueStorage>,
}

/// Build the application router.
///
/// CORS is permissive so a browser frontend on another origin can talk
/// to the API directly.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/issues", get(list_issues).post(create_issue))
        .route("/issues/{id}", get(get_issue).put(update_issue))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_issues(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<IssueList>, ApiError> {
    let query = IssueQuery::from(params);
    let list = state.store.query(&query).await?;
    Ok(Json(list))
}

async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state
        .store
        .get(IssueId::new(id))
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(issue))
}

async fn create_issue(
    State(state): State<AppState>,
    Json(draft): Json<IssueDraft>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let issue = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(issue)))
}

async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<IssueDraft>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state.store.update(IssueId::new(id), draft).await?;
    Ok(Json(issue))
}
