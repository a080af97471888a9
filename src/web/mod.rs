// Web server — Axum-based dashboard backend.
//
// Serves the same operations as the CLI over JSON: insights aggregation,
// check/report proxies to the TrustLens backend, and a status endpoint.
// Report routes are gated by the local dedup log (409 on a duplicate).

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::dedup::ReportLog;
use crate::insights::DatasetSource;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: Arc<ApiClient>,
    pub report_log: Arc<ReportLog>,
    pub datasets: Arc<dyn DatasetSource>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("TrustLens dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/status", get(handlers::status::get_status))
        .route("/api/insights", get(handlers::insights::get_insights))
        .route("/api/check/url", post(handlers::checks::check_url))
        .route("/api/check/email", post(handlers::checks::check_email))
        .route("/api/check/mobile", post(handlers::checks::check_mobile))
        .route("/api/report/url", post(handlers::checks::report_url))
        .route("/api/report/email", post(handlers::checks::report_email))
        .route("/api/report/mobile", post(handlers::checks::report_mobile))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
