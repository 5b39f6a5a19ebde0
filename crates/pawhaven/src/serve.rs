// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawhaven serve` command implementation.
//!
//! Opens the SQLite store (running migrations), wires the token signer, and
//! starts the gateway. Fails closed when no token secret is configured --
//! an unauthenticated marketplace API is never the right default.

use std::sync::Arc;

use pawhaven_auth::TokenSigner;
use pawhaven_config::PawhavenConfig;
use pawhaven_core::PawhavenError;
use pawhaven_gateway::AppState;
use pawhaven_gateway::server::{ServerConfig, start_server};
use pawhaven_storage::Database;
use tracing::info;

/// Runs the `pawhaven serve` command.
pub async fn run_serve(config: PawhavenConfig) -> Result<(), PawhavenError> {
    init_tracing(&config.server.log_level);

    info!("starting pawhaven serve");

    let token_secret = config.auth.token_secret.as_deref().ok_or_else(|| {
        PawhavenError::Config(
            "auth.token_secret is not set. Configure it in pawhaven.toml or via \
             PAWHAVEN_AUTH_TOKEN_SECRET."
                .to_string(),
        )
    })?;

    let db = Database::open(&config.storage.database_path).await?;
    info!(path = %config.storage.database_path, "SQLite storage initialized");

    let state = AppState {
        db: Arc::new(db),
        signer: Arc::new(TokenSigner::new(
            token_secret,
            chrono::Duration::days(config.auth.token_ttl_days),
        )),
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        max_concurrency: config.server.max_concurrency,
    };

    start_server(&server_config, state).await?;

    info!("pawhaven serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pawhaven={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
