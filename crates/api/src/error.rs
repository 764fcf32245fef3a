use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relay_compute::ComputeClientError;
use serde_json::json;

/// Failures the `/calculate` handler can encounter.
///
/// Both variants deliberately map to the same opaque 500 response: the
/// client must not be able to distinguish an upstream failure from a
/// persistence failure, and no internal detail may leak. The underlying
/// cause is logged server-side instead.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The compute collaborator call failed (network error, timeout,
    /// non-2xx status, or malformed body).
    #[error("Upstream compute call failed: {0}")]
    Upstream(#[from] ComputeClientError),

    /// The process log insert failed.
    #[error("Process log insert failed: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type RelayResult<T> = Result<T, RelayError>;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream compute call failed");
            }
            RelayError::Persistence(err) => {
                tracing::error!(error = %err, "Process log insert failed");
            }
        }

        // Fixed payload, identical for every failure kind.
        let body = json!({ "error": "Failed to process calculation" });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
