// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account CRUD operations.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::User;

/// Input for account registration. The password is already hashed by the
/// caller; plaintext never crosses this boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

const USER_COLUMNS: &str = "id, email, password_hash, full_name, phone, address, role, \
                            is_active, last_login, created_at, updated_at";

fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        full_name: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        role: row.get(6)?,
        is_active: row.get(7)?,
        last_login: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

/// Create a new account with the default `customer` role.
///
/// A duplicate email surfaces as `Conflict` via the unique index on
/// `users.email`.
pub async fn create_user(db: &Database, new: NewUser) -> Result<User, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO users (id, email, password_hash, full_name, phone, address)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    new.email,
                    new.password_hash,
                    new.full_name,
                    new.phone,
                    new.address,
                ],
            )?;
            let user = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                map_user_row,
            )?;
            Ok(user)
        })
        .await
        .map_err(|e| map_write_err(e, "User with this email already exists"))
}

/// Look up an active account by email. Deactivated accounts are invisible to
/// login.
pub async fn find_active_by_email(
    db: &Database,
    email: &str,
) -> Result<Option<User>, PawhavenError> {
    let email = email.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1 AND is_active = 1"),
                params![email],
                map_user_row,
            );
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Get an account by id.
pub async fn get_user(db: &Database, id: &str) -> Result<Option<User>, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                map_user_row,
            );
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial profile update, returning the updated account.
///
/// Returns `None` when the account does not exist.
pub async fn update_profile(
    db: &Database,
    id: &str,
    update: ProfileUpdate,
) -> Result<Option<User>, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE users SET
                 full_name = COALESCE(?1, full_name),
                 phone = COALESCE(?2, phone),
                 address = COALESCE(?3, address),
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?4",
                params![update.full_name, update.phone, update.address, id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let user = conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                map_user_row,
            )?;
            Ok(Some(user))
        })
        .await
        .map_err(map_tr_err)
}

/// Record a successful login.
pub async fn touch_last_login(db: &Database, id: &str) -> Result<(), PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE users SET last_login = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?1",
                params![id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Change an account's role. Not exposed over HTTP; used by operational
/// tooling and test setup.
pub async fn set_role(db: &Database, id: &str, role: &str) -> Result<(), PawhavenError> {
    let id = id.to_string();
    let role = role.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE users SET role = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?2",
                params![role, id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}
