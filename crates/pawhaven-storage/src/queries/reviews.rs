// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review operations. One review per (user, pet), enforced by
//! `uq_reviews_user_pet`.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err, map_write_err};
use crate::models::{Review, ReviewWithPet};

/// Message returned when the user already reviewed the pet.
pub const DUPLICATE_REVIEW_MESSAGE: &str = "You have already reviewed this pet";

/// Create a review. Rating range is validated by the gateway.
pub async fn create_review(
    db: &Database,
    user_id: &str,
    pet_id: &str,
    rating: i64,
    comment: Option<String>,
) -> Result<Review, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    let user_id = user_id.to_string();
    let pet_id = pet_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO reviews (id, user_id, pet_id, rating, comment)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, user_id, pet_id, rating, comment],
            )?;
            let review = conn.query_row(
                "SELECT id, user_id, pet_id, rating, comment, created_at
                 FROM reviews WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Review {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        pet_id: row.get(2)?,
                        rating: row.get(3)?,
                        comment: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                },
            )?;
            Ok(review)
        })
        .await
        .map_err(|e| map_write_err(e, DUPLICATE_REVIEW_MESSAGE))
}

/// List a user's reviews, newest first, with pet display fields joined.
pub async fn list_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<ReviewWithPet>, PawhavenError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.user_id, r.pet_id, r.rating, r.comment, r.created_at,
                        p.name, p.image_url
                 FROM reviews r
                 LEFT JOIN pets p ON r.pet_id = p.id
                 WHERE r.user_id = ?1
                 ORDER BY r.created_at DESC",
            )?;
            let rows = stmt.query_map(params![user_id], |row| {
                Ok(ReviewWithPet {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    pet_id: row.get(2)?,
                    rating: row.get(3)?,
                    comment: row.get(4)?,
                    created_at: row.get(5)?,
                    pet_name: row.get(6)?,
                    pet_image: row.get(7)?,
                })
            })?;
            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            Ok(reviews)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testutil::{seed_pet, seed_user, setup_db};

    #[tokio::test]
    async fn create_and_list_reviews() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        let review = create_review(&db, &user.id, &pet.id, 5, Some("Great dog".to_string()))
            .await
            .unwrap();
        assert_eq!(review.rating, 5);

        let list = list_for_user(&db, &user.id).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].pet_name.as_deref(), Some("Biscuit"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn second_review_for_same_pet_conflicts() {
        let (db, _dir) = setup_db().await;
        let user = seed_user(&db, "a@example.com", "Alice").await;
        let pet = seed_pet(&db, "Biscuit").await;

        create_review(&db, &user.id, &pet.id, 4, None).await.unwrap();
        let err = create_review(&db, &user.id, &pet.id, 2, None).await.unwrap_err();
        assert!(matches!(err, PawhavenError::Conflict(_)));
        assert_eq!(err.to_string(), DUPLICATE_REVIEW_MESSAGE);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn different_users_can_review_the_same_pet() {
        let (db, _dir) = setup_db().await;
        let alice = seed_user(&db, "a@example.com", "Alice").await;
        let bob = seed_user(&db, "b@example.com", "Bob").await;
        let pet = seed_pet(&db, "Biscuit").await;

        create_review(&db, &alice.id, &pet.id, 5, None).await.unwrap();
        create_review(&db, &bob.id, &pet.id, 3, None).await.unwrap();

        assert_eq!(list_for_user(&db, &alice.id).await.unwrap().len(), 1);
        assert_eq!(list_for_user(&db, &bob.id).await.unwrap().len(), 1);

        db.close().await.unwrap();
    }
}
