// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per entity.

pub mod adoptions;
pub mod content;
pub mod favorites;
pub mod messages;
pub mod notifications;
pub mod pets;
pub mod preferences;
pub mod reviews;
pub mod users;

#[cfg(test)]
pub(crate) mod testutil {
    //! Shared seeding helpers for query module tests.

    use crate::database::Database;
    use crate::models::{Pet, User};
    use crate::queries::{pets, users};

    pub async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    pub async fn seed_user(db: &Database, email: &str, name: &str) -> User {
        users::create_user(
            db,
            users::NewUser {
                email: email.to_string(),
                password_hash: "argon2-hash-placeholder".to_string(),
                full_name: name.to_string(),
                phone: None,
                address: None,
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_admin(db: &Database, email: &str, name: &str) -> User {
        let user = seed_user(db, email, name).await;
        users::set_role(db, &user.id, "admin").await.unwrap();
        users::get_user(db, &user.id).await.unwrap().unwrap()
    }

    pub async fn seed_pet(db: &Database, name: &str) -> Pet {
        pets::create_pet(
            db,
            pets::NewPet {
                name: name.to_string(),
                species: "dog".to_string(),
                breed: Some("mixed".to_string()),
                age: 3,
                gender: "female".to_string(),
                price: 120.0,
                description: "A very good dog.".to_string(),
                image_url: None,
                location: None,
                medical_history: None,
                personality_traits: None,
                category: "dogs".to_string(),
            },
        )
        .await
        .unwrap()
    }
}
