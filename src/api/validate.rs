//! Response validation.
//!
//! Every response passes through [`validate_response`] before any field is
//! read. Public market-data endpoints return bare data and skip the envelope
//! check; private endpoints wrap their data in `{"result": true, ...}` and
//! report failures through `error_code`.

use crate::api::error::{ApiError, ApiResult, Rejection};
use crate::api::transport::HttpResponse;

/// Check a raw response and return its decoded JSON payload.
///
/// - A failing HTTP status is always an [`ApiError::HttpStatus`].
/// - A body that is not JSON is an [`ApiError::Deserialize`].
/// - With `check_result`, an `error_code` field or a missing / non-`true`
///   `result` field is an [`ApiError::Rejected`].
pub fn validate_response(response: HttpResponse, check_result: bool) -> ApiResult<serde_json::Value> {
    if !response.is_ok() {
        return Err(ApiError::HttpStatus {
            status: response.status,
            reason: response.reason,
        });
    }

    let data: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialize(format!("Failed to decode response body: {}", e)))?;

    if check_result {
        if let Some(code) = data.get("error_code") {
            return Err(ApiError::Rejected(Rejection::ErrorCode(render_code(code))));
        }

        if data.get("result") != Some(&serde_json::Value::Bool(true)) {
            return Err(ApiError::Rejected(Rejection::NegativeResult(data.to_string())));
        }
    }

    Ok(data)
}

/// Error codes arrive as numbers or strings; render both without quotes.
fn render_code(code: &serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
