// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Favorite operations.
//!
//! Add-then-remove rather than a single toggle: the client needs the row id
//! to delete. The one-favorite-per-(user, pet) invariant is the unique index
//! `uq_favorites_user_pet`; removal requires both the favorite id and the
//! owner id so one user cannot delete another's favorite.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::{Favorite, FavoriteWithPet};

/// Message returned when the pair is already favorited.
pub const DUPLICATE_FAVORITE_MESSAGE: &str = "Already in favorites";

/// Add a pet to a user's favorites.
///
/// Fails with `Conflict` when a favorite for the pair already exists, and
/// with `NotFound` when the pet vanished before the insert (foreign key).
pub async fn add_favorite(
    db: &Database,
    user_id: &str,
    pet_id: &str,
) -> Result<Favorite, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let user_id = user_id.to_string();
    let pet_id = pet_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO favorites (id, user_id, pet_id) VALUES (?1, ?2, ?3)",
                params![id, user_id, pet_id],
            )?;
            let favorite = conn.query_row(
                "SELECT id, user_id, pet_id, created_at FROM favorites WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Favorite {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        pet_id: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )?;
            Ok(favorite)
        })
        .await
        .map_err(|e| map_write_err(e, DUPLICATE_FAVORITE_MESSAGE))
}

/// Remove a favorite by its own id, scoped to the owning user.
///
/// Returns `false` when no favorite matches both id and owner -- including
/// the case where the row exists but belongs to someone else.
pub async fn remove_favorite(
    db: &Database,
    id: &str,
    user_id: &str,
) -> Result<bool, PawhavenError> {
    let id = id.to_string();
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "DELETE FROM favorites WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// List a user's favorites, newest first, with pet display fields joined.
pub async fn list_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<FavoriteWithPet>, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT f.id, f.pet_id, f.created_at,
                        p.name, p.breed, p.age, p.price, p.image_url
                 FROM favorites f
                 LEFT JOIN pets p ON f.pet_id = p.id
                 WHERE f.user_id = ?1
                 ORDER BY f.created_at DESC",
            )?;
            let rows = stmt.query_map(params![user_id], |row| {
                Ok(FavoriteWithPet {
                    id: row.get(0)?,
                    pet_id: row.get(1)?,
                    added_at: row.get(2)?,
                    pet_name: row.get(3)?,
                    pet_breed: row.get(4)?,
                    pet_age: row.get(5)?,
                    pet_price: row.get(6)?,
                    pet_image: row.get(7)?,
                })
            })?;
            let mut favorites = Vec::new();
            for row in rows {
                favorites.push(row?);
            }
            Ok(favorites)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testutil::{seed_pet, seed_user, setup_db};

    #[tokio::test]
    async fn add_and_list_favorites() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        let favorite = add_favorite(&db, &user.id, &pet.id).await.unwrap();
        assert_eq!(favorite.user_id, user.id);
        assert_eq!(favorite.pet_id, pet.id);

        let list = list_for_user(&db, &user.id).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].pet_name.as_deref(), Some("Biscuit"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_favorite_conflicts() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        add_favorite(&db, &user.id, &pet.id).await.unwrap();
        let err = add_favorite(&db, &user.id, &pet.id).await.unwrap_err();
        assert!(matches!(err, PawhavenError::Conflict(_)));
        assert_eq!(err.to_string(), DUPLICATE_FAVORITE_MESSAGE);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn remove_favorite_by_id_and_owner() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        let favorite = add_favorite(&db, &user.id, &pet.id).await.unwrap();
        assert!(remove_favorite(&db, &favorite.id, &user.id).await.unwrap());
        // A second removal finds nothing.
        assert!(!remove_favorite(&db, &favorite.id, &user.id).await.unwrap());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn cannot_remove_another_users_favorite() {
        let (db, _dir) = setup_db().await;
        let alice = seed_user(&db, "a@example.com", "Alice").await;
        let bob = seed_user(&db, "b@example.com", "Bob").await;
        let pet = seed_pet(&db, "Biscuit").await;

        let favorite = add_favorite(&db, &alice.id, &pet.id).await.unwrap();
        assert!(!remove_favorite(&db, &favorite.id, &bob.id).await.unwrap());
        // Alice's favorite is untouched.
        assert_eq!(list_for_user(&db, &alice.id).await.unwrap().len(), 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn refavoriting_after_removal_succeeds() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        let favorite = add_favorite(&db, &user.id, &pet.id).await.unwrap();
        remove_favorite(&db, &favorite.id, &user.id).await.unwrap();
        let again = add_favorite(&db, &user.id, &pet.id).await.unwrap();
        assert_ne!(again.id, favorite.id);

        db.close().await.unwrap();
    }
}
