// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user notification preference operations.
//!
//! Lazy-create-on-read: the row is inserted with its SQL defaults the first
//! time it is needed. The flags are stored and editable but no dispatch
//! logic consults them.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::UserPreferences;

/// Partial preference update; `None` flags are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub marketing_emails: Option<bool>,
    pub adoption_updates: Option<bool>,
    pub message_alerts: Option<bool>,
}

impl PreferencesUpdate {
    /// True when no flag is set; callers reject such updates up front.
    pub fn is_empty(&self) -> bool {
        self.email_notifications.is_none()
            && self.push_notifications.is_none()
            && self.sms_notifications.is_none()
            && self.marketing_emails.is_none()
            && self.adoption_updates.is_none()
            && self.message_alerts.is_none()
    }
}

const PREFERENCE_COLUMNS: &str = "user_id, email_notifications, push_notifications, \
                                  sms_notifications, marketing_emails, adoption_updates, \
                                  message_alerts, created_at, updated_at";

fn map_preferences_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserPreferences> {
    Ok(UserPreferences {
        user_id: row.get(0)?,
        email_notifications: row.get(1)?,
        push_notifications: row.get(2)?,
        sms_notifications: row.get(3)?,
        marketing_emails: row.get(4)?,
        adoption_updates: row.get(5)?,
        message_alerts: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Fetch a user's preferences, creating the default row if absent.
pub async fn get_or_create(db: &Database, user_id: &str) -> Result<UserPreferences, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT OR IGNORE INTO user_preferences (user_id) VALUES (?1)",
                params![user_id],
            )?;
            let preferences = conn.query_row(
                &format!("SELECT {PREFERENCE_COLUMNS} FROM user_preferences WHERE user_id = ?1"),
                params![user_id],
                map_preferences_row,
            )?;
            Ok(preferences)
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial preference update, creating the row first when absent so
/// unspecified flags take their defaults.
pub async fn update(
    db: &Database,
    user_id: &str,
    update: PreferencesUpdate,
) -> Result<UserPreferences, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT OR IGNORE INTO user_preferences (user_id) VALUES (?1)",
                params![user_id],
            )?;
            conn.execute(
                "UPDATE user_preferences SET
                 email_notifications = COALESCE(?1, email_notifications),
                 push_notifications = COALESCE(?2, push_notifications),
                 sms_notifications = COALESCE(?3, sms_notifications),
                 marketing_emails = COALESCE(?4, marketing_emails),
                 adoption_updates = COALESCE(?5, adoption_updates),
                 message_alerts = COALESCE(?6, message_alerts),
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE user_id = ?7",
                params![
                    update.email_notifications,
                    update.push_notifications,
                    update.sms_notifications,
                    update.marketing_emails,
                    update.adoption_updates,
                    update.message_alerts,
                    user_id,
                ],
            )?;
            let preferences = conn.query_row(
                &format!("SELECT {PREFERENCE_COLUMNS} FROM user_preferences WHERE user_id = ?1"),
                params![user_id],
                map_preferences_row,
            )?;
            Ok(preferences)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testutil::{seed_user, setup_db};

    #[tokio::test]
    async fn first_read_creates_the_default_row() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;

        let preferences = get_or_create(&db, &user.id).await.unwrap();
        assert!(preferences.email_notifications);
        assert!(preferences.push_notifications);
        assert!(!preferences.sms_notifications);
        assert!(!preferences.marketing_emails);
        assert!(preferences.adoption_updates);
        assert!(preferences.message_alerts);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn second_read_returns_the_same_row() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;

        let first = get_or_create(&db, &user.id).await.unwrap();
        let second = get_or_create(&db, &user.id).await.unwrap();
        assert_eq!(first.created_at, second.created_at);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn update_is_partial_and_creates_when_absent() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;

        // No prior read: update must still land on a defaulted row.
        let updated = update(
            &db,
            &user.id,
            PreferencesUpdate {
                sms_notifications: Some(true),
                ..PreferencesUpdate::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.sms_notifications);
        // Untouched flags keep their defaults.
        assert!(updated.email_notifications);
        assert!(!updated.marketing_emails);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn flags_can_be_turned_off() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;

        let updated = update(
            &db,
            &user.id,
            PreferencesUpdate {
                email_notifications: Some(false),
                adoption_updates: Some(false),
                ..PreferencesUpdate::default()
            },
        )
        .await
        .unwrap();

        assert!(!updated.email_notifications);
        assert!(!updated.adoption_updates);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn preferences_update_is_empty_detects_all_none() {
        assert!(PreferencesUpdate::default().is_empty());
        assert!(
            !PreferencesUpdate {
                message_alerts: Some(false),
                ..PreferencesUpdate::default()
            }
            .is_empty()
        );
    }
}
