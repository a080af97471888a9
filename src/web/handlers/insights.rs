// GET /api/insights — ranked scam themes and high-risk domains.
//
// Loads all three datasets on each request (they're small and the source
// may have been updated); the all-or-nothing join means a failed dataset
// surfaces as a single 503, never a partial summary.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::insights::{aggregate, load_datasets, InsightsParams};
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct InsightsQuery {
    /// Trailing window in days (default 14).
    pub days: Option<u32>,
    /// Cap on each ranked list (default 10, max 50).
    pub limit: Option<usize>,
}

pub async fn get_insights(
    State(state): State<AppState>,
    Query(params): Query<InsightsQuery>,
) -> Response {
    let defaults = InsightsParams::default();
    let params = InsightsParams {
        days: params.days.unwrap_or(defaults.days).max(1),
        limit: params.limit.unwrap_or(defaults.limit).clamp(1, 50),
    };

    let datasets = match load_datasets(state.datasets.as_ref()).await {
        Ok(datasets) => datasets,
        Err(e) => {
            tracing::error!(error = %e, "insights datasets failed to load");
            return api_error(StatusCode::SERVICE_UNAVAILABLE, "could not load insights");
        }
    };

    let summary = aggregate(
        &datasets.urls,
        &datasets.emails,
        &datasets.mobiles,
        &params,
        Utc::now(),
    );
    Json(summary).into_response()
}
