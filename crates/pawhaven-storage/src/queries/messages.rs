// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directed user-to-user message operations.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::{Message, MessageWithNames};

const MESSAGE_COLUMNS: &str =
    "id, sender_id, receiver_id, body, adoption_request_id, is_read, created_at";

fn map_message_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        sender_id: row.get(1)?,
        receiver_id: row.get(2)?,
        body: row.get(3)?,
        adoption_request_id: row.get(4)?,
        is_read: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn map_message_with_names_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MessageWithNames> {
    Ok(MessageWithNames {
        id: row.get(0)?,
        sender_id: row.get(1)?,
        receiver_id: row.get(2)?,
        body: row.get(3)?,
        adoption_request_id: row.get(4)?,
        is_read: row.get(5)?,
        created_at: row.get(6)?,
        sender_name: row.get(7)?,
        receiver_name: row.get(8)?,
    })
}

/// Send a message, optionally tied to an adoption request.
///
/// A missing receiver or adoption request surfaces as `NotFound` via the
/// foreign keys.
pub async fn send_message(
    db: &Database,
    sender_id: &str,
    receiver_id: &str,
    body: &str,
    adoption_request_id: Option<String>,
) -> Result<Message, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let sender_id = sender_id.to_string();
    let receiver_id = receiver_id.to_string();
    let body = body.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO messages (id, sender_id, receiver_id, body, adoption_request_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, sender_id, receiver_id, body, adoption_request_id],
            )?;
            let message = conn.query_row(
                &format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = ?1"),
                params![id],
                map_message_row,
            )?;
            Ok(message)
        })
        .await
        .map_err(|e| map_write_err(e, "Message already exists"))
}

/// List messages a user sent or received, newest first, capped at 100, with
/// both display names joined.
pub async fn list_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<MessageWithNames>, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT m.id, m.sender_id, m.receiver_id, m.body, m.adoption_request_id,
                        m.is_read, m.created_at,
                        sender.full_name, receiver.full_name
                 FROM messages m
                 LEFT JOIN users sender ON m.sender_id = sender.id
                 LEFT JOIN users receiver ON m.receiver_id = receiver.id
                 WHERE m.sender_id = ?1 OR m.receiver_id = ?1
                 ORDER BY m.created_at DESC
                 LIMIT 100",
            )?;
            let rows = stmt.query_map(params![user_id], map_message_with_names_row)?;
            let mut messages = Vec::new();
            for row in rows {
                messages.push(row?);
            }
            Ok(messages)
        })
        .await
        .map_err(map_tr_err)
}

/// List the conversation between two users, oldest first.
pub async fn conversation(
    db: &Database,
    user_id: &str,
    other_id: &str,
) -> Result<Vec<MessageWithNames>, PawhavenError> {
    let user_id = user_id.to_string();
    let other_id = other_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT m.id, m.sender_id, m.receiver_id, m.body, m.adoption_request_id,
                        m.is_read, m.created_at,
                        sender.full_name, receiver.full_name
                 FROM messages m
                 LEFT JOIN users sender ON m.sender_id = sender.id
                 LEFT JOIN users receiver ON m.receiver_id = receiver.id
                 WHERE (m.sender_id = ?1 AND m.receiver_id = ?2)
                    OR (m.sender_id = ?2 AND m.receiver_id = ?1)
                 ORDER BY m.created_at ASC",
            )?;
            let rows = stmt.query_map(params![user_id, other_id], map_message_with_names_row)?;
            let mut messages = Vec::new();
            for row in rows {
                messages.push(row?);
            }
            Ok(messages)
        })
        .await
        .map_err(map_tr_err)
}

/// Mark one message read, scoped to its receiver.
///
/// Returns `None` when no row matches id and receiver -- the sender cannot
/// flip the flag.
pub async fn mark_read(
    db: &Database,
    id: &str,
    receiver_id: &str,
) -> Result<Option<Message>, PawhavenError> {
    let id = id.to_string();
    let receiver_id = receiver_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE messages SET is_read = 1 WHERE id = ?1 AND receiver_id = ?2",
                params![id, receiver_id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let message = conn.query_row(
                &format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = ?1"),
                params![id],
                map_message_row,
            )?;
            Ok(Some(message))
        })
        .await
        .map_err(map_tr_err)
}
