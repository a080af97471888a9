// Check and report proxy handlers.
//
// POST /api/check/{url,email,mobile}  — validate, forward to the backend
// POST /api/report/{url,email,mobile} — same, gated by the local dedup log
//
// Validation failures are 422 and never reach the backend. Backend
// failures map onto the gateway: the server's own status and detail pass
// through, transport failures become 502.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::{ApiError, CheckResult};
use crate::risk::{risk_ui, CheckKind};
use crate::validate;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct UrlBody {
    url: String,
}

#[derive(Deserialize)]
pub struct EmailBody {
    address: String,
}

#[derive(Deserialize)]
pub struct MobileBody {
    number: String,
}

pub async fn check_url(State(state): State<AppState>, Json(body): Json<UrlBody>) -> Response {
    let url = match validate::validate_url(&body.url) {
        Ok(url) => url,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    match state.api.check_url(&url).await {
        Ok(data) => result_json(CheckResult::Url(data)),
        Err(e) => backend_error(e),
    }
}

pub async fn check_email(State(state): State<AppState>, Json(body): Json<EmailBody>) -> Response {
    let address = match validate::validate_email(&body.address) {
        Ok(address) => address,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    match state.api.check_email(&address).await {
        Ok(data) => result_json(CheckResult::Email(data)),
        Err(e) => backend_error(e),
    }
}

pub async fn check_mobile(State(state): State<AppState>, Json(body): Json<MobileBody>) -> Response {
    let number = match validate::parse_mobile(&body.number) {
        Ok(number) => number,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    match state.api.check_mobile(&number).await {
        Ok(data) => result_json(CheckResult::Mobile(data)),
        Err(e) => backend_error(e),
    }
}

pub async fn report_url(State(state): State<AppState>, Json(body): Json<UrlBody>) -> Response {
    let url = match validate::validate_url(&body.url) {
        Ok(url) => url,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    if state
        .report_log
        .is_already_reported(CheckKind::Url, &url)
        .await
    {
        return already_reported();
    }
    match state.api.report_url(&url).await {
        Ok(data) => {
            state.report_log.mark_reported(CheckKind::Url, &url).await;
            result_json(CheckResult::Url(data))
        }
        Err(e) => backend_error(e),
    }
}

pub async fn report_email(State(state): State<AppState>, Json(body): Json<EmailBody>) -> Response {
    let address = match validate::validate_email(&body.address) {
        Ok(address) => address,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    if state
        .report_log
        .is_already_reported(CheckKind::Email, &address)
        .await
    {
        return already_reported();
    }
    match state.api.report_email(&address).await {
        Ok(data) => {
            state
                .report_log
                .mark_reported(CheckKind::Email, &address)
                .await;
            result_json(CheckResult::Email(data))
        }
        Err(e) => backend_error(e),
    }
}

pub async fn report_mobile(State(state): State<AppState>, Json(body): Json<MobileBody>) -> Response {
    let number = match validate::parse_mobile(&body.number) {
        Ok(number) => number,
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    if state
        .report_log
        .is_already_reported(CheckKind::Mobile, &number.e164)
        .await
    {
        return already_reported();
    }
    match state.api.report_mobile(&number).await {
        Ok(data) => {
            state
                .report_log
                .mark_reported(CheckKind::Mobile, &number.e164)
                .await;
            result_json(CheckResult::Mobile(data))
        }
        Err(e) => backend_error(e),
    }
}

// --- Helpers ---

/// Serialize a check outcome together with its display bundle so the
/// dashboard doesn't duplicate the presentation mapping.
fn result_json(result: CheckResult) -> Response {
    let ui = risk_ui(result.kind(), result.level());
    Json(serde_json::json!({
        "kind": result.kind().as_str(),
        "subject": result.subject(),
        "risk_level": result.level().as_str(),
        "report_count": result.report_count(),
        "source": result.source(),
        "notes": result.notes(),
        "ui": {
            "label": ui.label,
            "advice": ui.advice,
            "actions": ui.actions,
            "tone": ui.tone.as_str(),
        },
    }))
    .into_response()
}

fn already_reported() -> Response {
    api_error(
        StatusCode::CONFLICT,
        "You've already reported this today. Thanks for keeping an eye out!",
    )
}

fn backend_error(e: ApiError) -> Response {
    match e {
        ApiError::Transport(_) => api_error(StatusCode::BAD_GATEWAY, &e.to_string()),
        ApiError::Status { status, .. } => {
            let code =
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            api_error(code, &e.to_string())
        }
        ApiError::UnexpectedPayload => api_error(StatusCode::BAD_GATEWAY, &e.to_string()),
    }
}
