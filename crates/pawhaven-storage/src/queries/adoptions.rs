// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adoption request operations.
//!
//! Creation is a plain insert: the partial unique index
//! `uq_adoption_requests_open` enforces at-most-one open (pending or
//! approved) request per (user, pet) atomically, so two simultaneous
//! submissions cannot both land. There is deliberately no status-update
//! query here -- approve/reject is external functionality.

use pawhaven_core::{PawhavenError, RequestStatus};
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::{AdoptionRequest, AdoptionRequestWithPet};

/// Message returned when an open request already exists for the pair.
pub const DUPLICATE_REQUEST_MESSAGE: &str =
    "You already have a pending or approved adoption request for this pet";

const REQUEST_COLUMNS: &str = "id, user_id, pet_id, notes, status, created_at, updated_at";

fn map_request_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AdoptionRequest> {
    Ok(AdoptionRequest {
        id: row.get(0)?,
        user_id: row.get(1)?,
        pet_id: row.get(2)?,
        notes: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Create a pending adoption request for (user, pet).
///
/// Fails with `Conflict` when an open request for the pair already exists
/// (unique-index enforcement; a rejected request does not block), and with
/// `NotFound` when the pet vanished between the caller's existence check and
/// the insert (foreign key).
pub async fn create_request(
    db: &Database,
    user_id: &str,
    pet_id: &str,
    notes: Option<String>,
) -> Result<AdoptionRequest, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let user_id = user_id.to_string();
    let pet_id = pet_id.to_string();
    let status = RequestStatus::Pending.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO adoption_requests (id, user_id, pet_id, notes, status)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, user_id, pet_id, notes, status],
            )?;
            let request = conn.query_row(
                &format!("SELECT {REQUEST_COLUMNS} FROM adoption_requests WHERE id = ?1"),
                params![id],
                map_request_row,
            )?;
            Ok(request)
        })
        .await
        .map_err(|e| map_write_err(e, DUPLICATE_REQUEST_MESSAGE))
}

/// Get a request by id.
pub async fn get_request(
    db: &Database,
    id: &str,
) -> Result<Option<AdoptionRequest>, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {REQUEST_COLUMNS} FROM adoption_requests WHERE id = ?1"),
                params![id],
                map_request_row,
            );
            match result {
                Ok(request) => Ok(Some(request)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List a user's requests, newest first, with pet display fields joined.
pub async fn list_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<AdoptionRequestWithPet>, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT ar.id, ar.user_id, ar.pet_id, ar.notes, ar.status,
                        ar.created_at, ar.updated_at, p.name, p.image_url
                 FROM adoption_requests ar
                 LEFT JOIN pets p ON ar.pet_id = p.id
                 WHERE ar.user_id = ?1
                 ORDER BY ar.created_at DESC",
            )?;
            let rows = stmt.query_map(params![user_id], |row| {
                Ok(AdoptionRequestWithPet {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    pet_id: row.get(2)?,
                    notes: row.get(3)?,
                    status: row.get(4)?,
                    created_at: row.get(5)?,
                    updated_at: row.get(6)?,
                    pet_name: row.get(7)?,
                    pet_image: row.get(8)?,
                })
            })?;
            let mut requests = Vec::new();
            for row in rows {
                requests.push(row?);
            }
            Ok(requests)
        })
        .await
        .map_err(map_tr_err)
}

/// Number of requests referencing a pet. Cascade deletion of the pet must
/// drive this to zero.
pub async fn count_for_pet(db: &Database, pet_id: &str) -> Result<i64, PawhavenError> {
    let pet_id = pet_id.to_string();
    db.connection()
        .call(move |conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM adoption_requests WHERE pet_id = ?1",
                params![pet_id],
                |row| row.get(0),
            )?;
            Ok(count)
        })
        .await
        .map_err(map_tr_err)
}
