// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pawhaven marketplace.

use thiserror::Error;

/// The primary error type used across all Pawhaven crates.
///
/// The first five variants carry messages that are surfaced verbatim to API
/// clients; the gateway maps each variant to its HTTP status. `Config`,
/// `Storage`, and `Internal` are logged server-side and surface as a generic
/// 500 body.
#[derive(Debug, Error)]
pub enum PawhavenError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Valid credentials, insufficient role.
    #[error("{0}")]
    Forbidden(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness invariant was violated.
    #[error("{0}")]
    Conflict(String),

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
