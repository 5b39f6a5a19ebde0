// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The adoption-request API seam used by checkout.
//!
//! Checkout talks to a trait so tests can drive it without a server; the
//! HTTP implementation targets POST /api/adoptions with bearer auth and a
//! 10-second request timeout.

use async_trait::async_trait;
use pawhaven_core::PawhavenError;
use serde::Deserialize;

/// What the server returned for one submitted adoption request.
#[derive(Debug, Clone)]
pub struct AdoptionReceipt {
    pub request_id: String,
    pub status: String,
}

/// Client-side view of the adoption-request creation operation.
#[async_trait]
pub trait AdoptionApi: Send + Sync {
    /// Submit one adoption request for one pet.
    async fn submit_request(
        &self,
        pet_id: &str,
        notes: Option<&str>,
    ) -> Result<AdoptionReceipt, PawhavenError>;
}

/// HTTP implementation of [`AdoptionApi`].
pub struct HttpAdoptionApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct CreateResponseBody {
    request: CreatedRequestBody,
}

#[derive(Debug, Deserialize)]
struct CreatedRequestBody {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpAdoptionApi {
    /// Build a client for the given API base URL and bearer token.
    pub fn new(base_url: &str, token: &str) -> Result<Self, PawhavenError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| PawhavenError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl AdoptionApi for HttpAdoptionApi {
    async fn submit_request(
        &self,
        pet_id: &str,
        notes: Option<&str>,
    ) -> Result<AdoptionReceipt, PawhavenError> {
        let response = self
            .client
            .post(format!("{}/api/adoptions", self.base_url))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "pet_id": pet_id, "notes": notes }))
            .send()
            .await
            .map_err(|e| PawhavenError::Internal(format!("adoption request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            let body: CreateResponseBody = response.json().await.map_err(|e| {
                PawhavenError::Internal(format!("malformed adoption response: {e}"))
            })?;
            return Ok(AdoptionReceipt {
                request_id: body.request.id,
                status: body.request.status,
            });
        }

        // Surface the server's message text directly, per the API contract.
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed with status {status}"));

        Err(match status.as_u16() {
            400 => PawhavenError::Conflict(message),
            401 => PawhavenError::Unauthorized(message),
            403 => PawhavenError::Forbidden(message),
            404 => PawhavenError::NotFound(message),
            _ => PawhavenError::Internal(message),
        })
    }
}
