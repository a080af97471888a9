// GET /api/status — configuration and report-log summary.
//
// Enough for the dashboard to show whether the backend is configured and
// how many unexpired entries the local report log holds.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let report_entries = state.report_log.entry_count(Utc::now()).await;
    let data_source = match &state.config.data_url {
        Some(url) => serde_json::json!({ "http": url }),
        None => serde_json::json!({ "dir": state.config.data_dir }),
    };

    Json(serde_json::json!({
        "api_configured": !state.config.api_url.is_empty(),
        "data_source": data_source,
        "report_log_entries": report_entries,
        "timeout_secs": state.config.timeout_secs,
    }))
}
