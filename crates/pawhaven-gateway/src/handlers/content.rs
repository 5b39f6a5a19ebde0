// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public content handlers: health, settings, team, history, categories,
//! and the contact form.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use pawhaven_storage::models::{Category, HistoryEvent, TeamMember};
use pawhaven_storage::queries::content;

use crate::AppState;
use crate::error::ApiError;
use crate::validate::{require_email, require_len, sanitize};

/// Response body for the health endpoints.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Request body for POST /api/contact.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Response body for POST /api/contact.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// GET /health and GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Pawhaven API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/settings
pub async fn settings(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pairs = content::settings(&state.db).await?;
    let map: serde_json::Map<String, serde_json::Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, serde_json::Value::String(value)))
        .collect();
    Ok(Json(serde_json::Value::Object(map)))
}

/// GET /api/team -- active members only.
pub async fn team(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let members = content::list_team(&state.db, true).await?;
    Ok(Json(members))
}

/// GET /api/about/team -- everyone, including retired members.
pub async fn about_team(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let members = content::list_team(&state.db, false).await?;
    Ok(Json(members))
}

/// GET /api/history and GET /api/about/history
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<HistoryEvent>>, ApiError> {
    let events = content::list_history(&state.db).await?;
    Ok(Json(events))
}

/// GET /api/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = content::list_categories(&state.db).await?;
    Ok(Json(categories))
}

/// POST /api/contact
pub async fn contact(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    require_len("name", &body.name, 1, 255)?;
    require_email(&body.email)?;
    require_len("message", &body.message, 10, 10_000)?;
    let subject = body
        .subject
        .map(|s| sanitize(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "General Inquiry".to_string());

    let id = content::submit_contact(
        &state.db,
        &sanitize(&body.name),
        body.email.trim(),
        &subject,
        &sanitize(&body.message),
    )
    .await?;

    tracing::info!(submission_id = %id, "new contact submission");
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Thank you for contacting us! We will get back to you soon.".to_string(),
            id,
        }),
    ))
}
