// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification operations.
//!
//! Rows are only ever created by the system (adoption fan-out, message
//! alerts); clients can only flip the read flag on their own rows. Callers
//! treat the create operations as best-effort: a fan-out failure is logged
//! and must never fail the action that triggered it.

use pawhaven_core::{NotificationKind, PawhavenError, Role};
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::Notification;

const NOTIFICATION_COLUMNS: &str = "id, user_id, title, message, kind, link, is_read, created_at";

fn map_notification_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Notification> {
    Ok(Notification {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        message: row.get(3)?,
        kind: row.get(4)?,
        link: row.get(5)?,
        is_read: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Create one notification for one user.
pub async fn notify(
    db: &Database,
    user_id: &str,
    title: &str,
    message: &str,
    kind: NotificationKind,
    link: Option<String>,
) -> Result<(), PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let user_id = user_id.to_string();
    let title = title.to_string();
    let message = message.to_string();
    let kind = kind.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO notifications (id, user_id, title, message, kind, link)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, user_id, title, message, kind, link],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| map_write_err(e, "Notification already exists"))
}

/// Fan out one `info` notification to every admin user.
///
/// Runs as a single storage call: the admin set is read and all rows are
/// inserted on the writer thread, so the count returned is exact. Order
/// across admins is not observable.
pub async fn notify_admins(
    db: &Database,
    title: &str,
    message: &str,
) -> Result<usize, PawhavenError> {
    let title = title.to_string();
    let message = message.to_string();
    let admin_role = Role::Admin.to_string();
    let kind = NotificationKind::Info.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare("SELECT id FROM users WHERE role = ?1")?;
            let admin_ids = stmt
                .query_map(params![admin_role], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;

            for admin_id in &admin_ids {
                conn.execute(
                    "INSERT INTO notifications (id, user_id, title, message, kind)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        uuid::Uuid::new_v4().to_string(),
                        admin_id,
                        title,
                        message,
                        kind,
                    ],
                )?;
            }
            Ok(admin_ids.len())
        })
        .await
        .map_err(map_tr_err)
}

/// List a user's notifications, newest first, capped at 50.
pub async fn list_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<Notification>, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {NOTIFICATION_COLUMNS} FROM notifications
                 WHERE user_id = ?1
                 ORDER BY created_at DESC
                 LIMIT 50"
            ))?;
            let rows = stmt.query_map(params![user_id], map_notification_row)?;
            let mut notifications = Vec::new();
            for row in rows {
                notifications.push(row?);
            }
            Ok(notifications)
        })
        .await
        .map_err(map_tr_err)
}

/// Count a user's unread notifications.
pub async fn unread_count(db: &Database, user_id: &str) -> Result<i64, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM notifications WHERE user_id = ?1 AND is_read = 0",
                params![user_id],
                |row| row.get(0),
            )?;
            Ok(count)
        })
        .await
        .map_err(map_tr_err)
}

/// Mark one notification read, scoped to its owner.
///
/// Idempotent: marking an already-read notification succeeds and returns the
/// row again. Returns `None` when no row matches id and owner.
pub async fn mark_read(
    db: &Database,
    id: &str,
    user_id: &str,
) -> Result<Option<Notification>, PawhavenError> {
    let id = id.to_string();
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE notifications SET is_read = 1 WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let notification = conn.query_row(
                &format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?1"),
                params![id],
                map_notification_row,
            )?;
            Ok(Some(notification))
        })
        .await
        .map_err(map_tr_err)
}

/// Mark all of a user's notifications read. Returns the number of rows
/// touched.
pub async fn mark_all_read(db: &Database, user_id: &str) -> Result<usize, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE notifications SET is_read = 1 WHERE user_id = ?1",
                params![user_id],
            )?;
            Ok(changed)
        })
        .await
        .map_err(map_tr_err)
}
