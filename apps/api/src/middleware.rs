use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use concierge_core::{AppError, SystemIdentity};

use crate::error::ApiResult;

pub const SYSTEM_ID_HEADER: &str = "x-system-id";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Resolves the calling system from identity headers.
///
/// Both headers must be present and non-empty.
pub async fn require_system_auth(mut request: Request, next: Next) -> ApiResult<Response> {
    let headers = request.headers();
    let system_id = required_header(headers, SYSTEM_ID_HEADER)?;
    // TODO: verify the key against per-system credentials once a credential store exists.
    required_header(headers, API_KEY_HEADER)?;

    let identity = SystemIdentity::new(system_id)?;
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn required_header(headers: &HeaderMap, name: &str) -> Result<String, AppError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(|| AppError::Unauthorized(format!("missing {name} header")))
}
