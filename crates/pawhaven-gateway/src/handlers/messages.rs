// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Messaging handlers. Sending a message creates a best-effort notification
//! for the receiver; only the receiver may flip a message's read flag.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use pawhaven_core::{NotificationKind, PawhavenError};
use pawhaven_storage::models::{Message, MessageWithNames};
use pawhaven_storage::queries::{messages, notifications};

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::{require_len, require_uuid, sanitize};

/// Request body for POST /api/messages.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: String,
    pub message: String,
    #[serde(default)]
    pub adoption_request_id: Option<String>,
}

/// GET /api/messages
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<MessageWithNames>>, ApiError> {
    let messages = messages::list_for_user(&state.db, &auth.id).await?;
    Ok(Json(messages))
}

/// GET /api/messages/conversation/{user_id}
pub async fn conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MessageWithNames>>, ApiError> {
    require_uuid("user_id", &user_id)?;
    let messages = messages::conversation(&state.db, &auth.id, &user_id).await?;
    Ok(Json(messages))
}

/// POST /api/messages
pub async fn send(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    require_uuid("receiver_id", &body.receiver_id)?;
    require_len("message", &body.message, 1, 5000)?;
    if let Some(request_id) = &body.adoption_request_id {
        require_uuid("adoption_request_id", request_id)?;
    }

    let message = messages::send_message(
        &state.db,
        &auth.id,
        &body.receiver_id,
        &sanitize(&body.message),
        body.adoption_request_id,
    )
    .await?;

    // Best-effort: the receiver's notification never fails the send.
    if let Err(e) = notifications::notify(
        &state.db,
        &body.receiver_id,
        "New Message",
        "You have a new message",
        NotificationKind::Info,
        Some("/messages".to_string()),
    )
    .await
    {
        tracing::warn!(error = %e, message_id = %message.id, "receiver notification failed");
    }

    tracing::info!(sender_id = %auth.id, receiver_id = %body.receiver_id, "message sent");
    Ok((StatusCode::CREATED, Json(message)))
}

/// PUT /api/messages/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    require_uuid("id", &id)?;
    let message = messages::mark_read(&state.db, &id, &auth.id)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("Message not found".to_string()))?;
    Ok(Json(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_deserializes() {
        let json = r#"{
            "receiver_id": "550e8400-e29b-41d4-a716-446655440000",
            "message": "Is Biscuit still available?"
        }"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert!(req.adoption_request_id.is_none());
        assert_eq!(req.message, "Is Biscuit still available?");
    }
}
