// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site content queries: settings, team, history timeline, categories, and
//! contact form submissions.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::{Category, HistoryEvent, TeamMember};

/// All settings as (key, value) pairs.
pub async fn settings(db: &Database) -> Result<Vec<(String, String)>, PawhavenError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            let mut pairs = Vec::new();
            for row in rows {
                pairs.push(row?);
            }
            Ok(pairs)
        })
        .await
        .map_err(map_tr_err)
}

/// Team members in display order. `active_only` hides retired members (the
/// public listing passes true; the about page shows everyone).
pub async fn list_team(db: &Database, active_only: bool) -> Result<Vec<TeamMember>, PawhavenError> {
    db.connection()
        .call(move |conn| {
            let sql = if active_only {
                "SELECT id, name, title, bio, image_url, display_order, is_active
                 FROM team_members WHERE is_active = 1 ORDER BY display_order"
            } else {
                "SELECT id, name, title, bio, image_url, display_order, is_active
                 FROM team_members ORDER BY display_order"
            };
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map([], |row| {
                Ok(TeamMember {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    title: row.get(2)?,
                    bio: row.get(3)?,
                    image_url: row.get(4)?,
                    display_order: row.get(5)?,
                    is_active: row.get(6)?,
                })
            })?;
            let mut members = Vec::new();
            for row in rows {
                members.push(row?);
            }
            Ok(members)
        })
        .await
        .map_err(map_tr_err)
}

/// History timeline entries in display order, then by year.
pub async fn list_history(db: &Database) -> Result<Vec<HistoryEvent>, PawhavenError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, year, title, description, display_order
                 FROM history_timeline ORDER BY display_order, year",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(HistoryEvent {
                    id: row.get(0)?,
                    year: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    display_order: row.get(4)?,
                })
            })?;
            let mut events = Vec::new();
            for row in rows {
                events.push(row?);
            }
            Ok(events)
        })
        .await
        .map_err(map_tr_err)
}

/// Active catalog categories in display order.
pub async fn list_categories(db: &Database) -> Result<Vec<Category>, PawhavenError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, slug, description, display_order, is_active
                 FROM categories WHERE is_active = 1 ORDER BY display_order",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                    description: row.get(3)?,
                    display_order: row.get(4)?,
                    is_active: row.get(5)?,
                })
            })?;
            let mut categories = Vec::new();
            for row in rows {
                categories.push(row?);
            }
            Ok(categories)
        })
        .await
        .map_err(map_tr_err)
}

/// Record a contact form submission; returns its id.
pub async fn submit_contact(
    db: &Database,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<String, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let message = message.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO contact_submissions (id, name, email, subject, message)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, name, email, subject, message],
            )?;
            Ok(id)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testutil::setup_db;

    #[tokio::test]
    async fn settings_round_trip() {
        let (db, _dir) = setup_db().await;

        db.connection()
            .call(|conn| {
                conn.execute(
                    "INSERT INTO settings (key, value) VALUES ('site_name', 'Pawhaven')",
                    [],
                )?;
                Ok(())
            })
            .await
            .unwrap();

        let pairs = settings(&db).await.unwrap();
        assert_eq!(pairs, vec![("site_name".to_string(), "Pawhaven".to_string())]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn team_listing_respects_active_filter_and_order() {
        let (db, _dir) = setup_db().await;

        db.connection()
            .call(|conn| {
                conn.execute_batch(
                    "INSERT INTO team_members (id, name, title, display_order, is_active)
                     VALUES ('t1', 'Zoe', 'Vet', 2, 1);
                     INSERT INTO team_members (id, name, title, display_order, is_active)
                     VALUES ('t2', 'Ada', 'Director', 1, 1);
                     INSERT INTO team_members (id, name, title, display_order, is_active)
                     VALUES ('t3', 'Ray', 'Retired', 0, 0);",
                )?;
                Ok(())
            })
            .await
            .unwrap();

        let active = list_team(&db, true).await.unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].name, "Ada");

        let all = list_team(&db, false).await.unwrap();
        assert_eq!(all.len(), 3);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn contact_submission_is_persisted() {
        let (db, _dir) = setup_db().await;

        let id = submit_contact(&db, "Alice", "a@example.com", "Hello", "I love this shelter!")
            .await
            .unwrap();

        let stored: String = db
            .connection()
            .call(move |conn| {
                Ok(conn.query_row(
                    "SELECT message FROM contact_submissions WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )?)
            })
            .await
            .unwrap();
        assert_eq!(stored, "I love this shelter!");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_content_tables_list_empty() {
        let (db, _dir) = setup_db().await;
        assert!(list_history(&db).await.unwrap().is_empty());
        assert!(list_categories(&db).await.unwrap().is_empty());
        db.close().await.unwrap();
    }
}
