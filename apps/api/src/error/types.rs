use serde::Serialize;
use ts_rs::TS;

/// Error body returned by every failing request.
///
/// `code` is stable for clients to branch on; `message` is for humans.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl ErrorResponse {
    pub(super) fn new(code: &'static str, message: String) -> Self {
        Self { code, message }
    }
}
