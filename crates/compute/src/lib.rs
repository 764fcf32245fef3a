//! HTTP client for the compute collaborator.
//!
//! Wraps the collaborator's `GET /compute` endpoint using [`reqwest`].
//! The relay never interprets the computation result; a successful
//! response body is parsed as JSON and relayed verbatim.

use std::time::Duration;

/// HTTP client for a single compute collaborator instance.
pub struct ComputeClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the compute collaborator client.
#[derive(Debug, thiserror::Error)]
pub enum ComputeClientError {
    /// The HTTP request itself failed (network, DNS, timeout, or a body
    /// that could not be decoded as JSON).
    #[error("Compute request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collaborator returned a non-2xx status code.
    #[error("Compute service error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ComputeClient {
    /// Create a new client for a compute collaborator.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://go-server:8086`.
    /// * `timeout`  - Upper bound on the full request round trip. The
    ///   collaborator performs real work per request, so an unbounded
    ///   wait would tie up the relay indefinitely.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ComputeClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Trigger one computation via `GET /compute`.
    ///
    /// Returns the raw JSON body on success. The contract only promises
    /// that the body contains a `time` field (the collaborator's
    /// self-reported duration); no schema validation is applied here.
    pub async fn compute(&self) -> Result<serde_json::Value, ComputeClientError> {
        let response = self
            .client
            .get(format!("{}/compute", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Compute service returned an error");
            return Err(ComputeClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}
