use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;

use crate::modules::attendance::use_cases::check_in::command::CheckIn;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

// A body that is not declared as JSON, or is empty, reads as `{}` so it ends
// up with the same "Name is required" answer as a blank name. Only a JSON
// body that fails to parse is reported as such.
pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = if is_json_content_type(&headers) && !body.is_empty() {
        match Json::<Value>::from_bytes(&body) {
            Ok(Json(value)) => value,
            Err(rejection) => {
                tracing::debug!(%rejection, "check-in body rejected");
                return bad_request(rejection.body_text());
            }
        }
    } else {
        Value::Null
    };

    let command = CheckIn {
        name: body.get("name").and_then(Value::as_str).map(str::to_owned),
    };

    match state.check_in_handler.handle(command).await {
        Ok(checked_in) => (StatusCode::OK, Json(checked_in)).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            tracing::debug!(%reason, "check-in rejected");
            bad_request(reason.to_string())
        }
        Err(ApplicationError::Store(e)) => {
            tracing::error!(error = %e, "check-in failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
