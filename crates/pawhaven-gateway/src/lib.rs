// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP/JSON REST gateway for the Pawhaven marketplace.
//!
//! Every handler is stateless between invocations: it validates input,
//! checks authorization, runs one or a few awaited storage calls, and
//! translates the outcome into a JSON response. The only cross-request
//! coordination lives in the storage layer's unique indexes.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;
pub mod validate;

use std::sync::Arc;

use pawhaven_auth::TokenSigner;
use pawhaven_storage::Database;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Single-writer database handle.
    pub db: Arc<Database>,
    /// Bearer token signer/verifier.
    pub signer: Arc<TokenSigner>,
}
