// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware layers, and shared state. Authentication is
//! enforced per-handler through the [`crate::auth::AuthUser`] extractor, so
//! public and protected methods can share a path.

use axum::Router;
use axum::routing::{delete, get, post, put};
use pawhaven_core::PawhavenError;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers;

/// Gateway server configuration (mirrors `ServerConfig` from
/// `pawhaven-config`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Maximum in-flight requests.
    pub max_concurrency: usize,
}

/// Build the full application router.
pub fn build_router(state: AppState, max_concurrency: usize) -> Router {
    Router::new()
        // Health.
        .route("/health", get(handlers::content::health))
        .route("/api/health", get(handlers::content::health))
        // Auth.
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/auth/profile", put(handlers::auth::update_profile))
        // Catalog: reads are public, writes check the admin role in-handler.
        .route(
            "/api/products",
            get(handlers::pets::list_pets).post(handlers::pets::create_pet),
        )
        .route(
            "/api/products/{id}",
            get(handlers::pets::get_pet)
                .put(handlers::pets::update_pet)
                .delete(handlers::pets::delete_pet),
        )
        // Adoption requests: one creation flow behind two paths.
        .route("/api/adoptions", post(handlers::adoptions::create))
        .route(
            "/api/user/adoption-requests",
            get(handlers::adoptions::list_mine).post(handlers::adoptions::create),
        )
        // Favorites.
        .route(
            "/api/user/favorites",
            get(handlers::favorites::list).post(handlers::favorites::add),
        )
        .route("/api/user/favorites/{id}", delete(handlers::favorites::remove))
        // Reviews.
        .route(
            "/api/user/reviews",
            get(handlers::reviews::list_mine).post(handlers::reviews::create),
        )
        // Messages.
        .route(
            "/api/messages",
            get(handlers::messages::list).post(handlers::messages::send),
        )
        .route(
            "/api/messages/conversation/{user_id}",
            get(handlers::messages::conversation),
        )
        .route("/api/messages/{id}/read", put(handlers::messages::mark_read))
        // Notifications.
        .route("/api/notifications", get(handlers::notifications::list))
        .route("/api/notifications/unread", get(handlers::notifications::unread))
        .route(
            "/api/notifications/mark-all-read",
            put(handlers::notifications::mark_all_read),
        )
        .route(
            "/api/notifications/{id}/read",
            put(handlers::notifications::mark_read),
        )
        // Preferences.
        .route(
            "/api/preferences",
            get(handlers::preferences::get).put(handlers::preferences::update),
        )
        // Site content.
        .route("/api/settings", get(handlers::content::settings))
        .route("/api/team", get(handlers::content::team))
        .route("/api/history", get(handlers::content::history))
        .route("/api/categories", get(handlers::content::categories))
        .route("/api/about/team", get(handlers::content::about_team))
        .route("/api/about/history", get(handlers::content::history))
        .route("/api/contact", post(handlers::content::contact))
        .layer(TraceLayer::new_for_http())
        .layer(ConcurrencyLimitLayer::new(max_concurrency))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server. Runs until shutdown is signalled.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), PawhavenError> {
    let app = build_router(state, config.max_concurrency);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| PawhavenError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PawhavenError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    } else {
        tracing::info!("shutdown signal received");
    }
}
