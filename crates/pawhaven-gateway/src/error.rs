// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain-error to HTTP translation.
//!
//! Every handler returns `Result<_, ApiError>`; the conversion here is the
//! single place status codes are assigned. Conflict maps to 400 -- that is
//! this API's convention, clients match on the message text.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pawhaven_core::PawhavenError;
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Wrapper adapting [`PawhavenError`] to an axum response.
#[derive(Debug)]
pub struct ApiError(pub PawhavenError);

impl From<PawhavenError> for ApiError {
    fn from(err: PawhavenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PawhavenError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            PawhavenError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            PawhavenError::Forbidden(message) => (StatusCode::FORBIDDEN, message.clone()),
            PawhavenError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            PawhavenError::Conflict(message) => (StatusCode::BAD_REQUEST, message.clone()),
            PawhavenError::Config(_) | PawhavenError::Storage { .. } | PawhavenError::Internal(_) => {
                // Details stay in the log; the client gets a generic body.
                tracing::error!(error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: PawhavenError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn domain_errors_map_to_their_status() {
        assert_eq!(status_of(PawhavenError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(PawhavenError::Unauthorized("x".into())), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(PawhavenError::Forbidden("x".into())), StatusCode::FORBIDDEN);
        assert_eq!(status_of(PawhavenError::NotFound("x".into())), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_400_by_convention() {
        assert_eq!(status_of(PawhavenError::Conflict("x".into())), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_hide_their_detail() {
        let response = ApiError(PawhavenError::Storage {
            source: Box::new(std::io::Error::other("disk exploded at /var/lib")),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serializes() {
        let body = serde_json::to_string(&ErrorResponse {
            error: "Pet not found".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"Pet not found"}"#);
    }
}
