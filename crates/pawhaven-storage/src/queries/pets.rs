// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet catalog CRUD operations.

use pawhaven_core::PawhavenError;
use rusqlite::params;

use crate::database::{Database, map_tr_err};
use crate::models::Pet;

/// Input for a new catalog listing. Category, gender, and status strings are
/// validated against the `pawhaven-core` enums before they reach this layer.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: i64,
    pub gender: String,
    pub price: f64,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub medical_history: Option<String>,
    pub personality_traits: Option<String>,
    pub category: String,
}

/// Partial listing update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub medical_history: Option<String>,
    pub personality_traits: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl PetUpdate {
    /// True when no field is set; callers reject such updates up front.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.breed.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.location.is_none()
            && self.medical_history.is_none()
            && self.personality_traits.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

const PET_COLUMNS: &str = "id, name, species, breed, age, gender, price, description, \
                           image_url, location, medical_history, personality_traits, \
                           category, status, created_at, updated_at";

fn map_pet_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
        breed: row.get(3)?,
        age: row.get(4)?,
        gender: row.get(5)?,
        price: row.get(6)?,
        description: row.get(7)?,
        image_url: row.get(8)?,
        location: row.get(9)?,
        medical_history: row.get(10)?,
        personality_traits: row.get(11)?,
        category: row.get(12)?,
        status: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

/// Create a new listing with status `available`.
pub async fn create_pet(db: &Database, new: NewPet) -> Result<Pet, PawhavenError> {
    let id = uuid::Uuid::new_v4().to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO pets (id, name, species, breed, age, gender, price, description,
                                   image_url, location, medical_history, personality_traits,
                                   category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    id,
                    new.name,
                    new.species,
                    new.breed,
                    new.age,
                    new.gender,
                    new.price,
                    new.description,
                    new.image_url,
                    new.location,
                    new.medical_history,
                    new.personality_traits,
                    new.category,
                ],
            )?;
            let pet = conn.query_row(
                &format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?1"),
                params![id],
                map_pet_row,
            )?;
            Ok(pet)
        })
        .await
        .map_err(map_tr_err)
}

/// Get a listing by id.
pub async fn get_pet(db: &Database, id: &str) -> Result<Option<Pet>, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let result = conn.query_row(
                &format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?1"),
                params![id],
                map_pet_row,
            );
            match result {
                Ok(pet) => Ok(Some(pet)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List the catalog, newest first, optionally filtered by category and
/// status (both already validated strings).
pub async fn list_pets(
    db: &Database,
    category: Option<String>,
    status: Option<String>,
) -> Result<Vec<Pet>, PawhavenError> {
    db.connection()
        .call(move |conn| {
            let mut sql = format!("SELECT {PET_COLUMNS} FROM pets WHERE 1=1");
            let mut values: Vec<String> = Vec::new();
            if let Some(category) = category {
                sql.push_str(&format!(" AND category = ?{}", values.len() + 1));
                values.push(category);
            }
            if let Some(status) = status {
                sql.push_str(&format!(" AND status = ?{}", values.len() + 1));
                values.push(status);
            }
            sql.push_str(" ORDER BY created_at DESC");

            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), map_pet_row)?;
            let mut pets = Vec::new();
            for row in rows {
                pets.push(row?);
            }
            Ok(pets)
        })
        .await
        .map_err(map_tr_err)
}

/// Apply a partial listing update, returning the updated row.
///
/// Returns `None` when the listing does not exist.
pub async fn update_pet(
    db: &Database,
    id: &str,
    update: PetUpdate,
) -> Result<Option<Pet>, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE pets SET
                 name = COALESCE(?1, name),
                 species = COALESCE(?2, species),
                 breed = COALESCE(?3, breed),
                 age = COALESCE(?4, age),
                 gender = COALESCE(?5, gender),
                 price = COALESCE(?6, price),
                 description = COALESCE(?7, description),
                 image_url = COALESCE(?8, image_url),
                 location = COALESCE(?9, location),
                 medical_history = COALESCE(?10, medical_history),
                 personality_traits = COALESCE(?11, personality_traits),
                 category = COALESCE(?12, category),
                 status = COALESCE(?13, status),
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?14",
                params![
                    update.name,
                    update.species,
                    update.breed,
                    update.age,
                    update.gender,
                    update.price,
                    update.description,
                    update.image_url,
                    update.location,
                    update.medical_history,
                    update.personality_traits,
                    update.category,
                    update.status,
                    id,
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            let pet = conn.query_row(
                &format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?1"),
                params![id],
                map_pet_row,
            )?;
            Ok(Some(pet))
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a listing. Adoption requests, favorites, and reviews referencing
/// it are removed by the cascade foreign keys.
///
/// Returns `false` when the listing does not exist.
pub async fn delete_pet(db: &Database, id: &str) -> Result<bool, PawhavenError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute("DELETE FROM pets WHERE id = ?1", params![id])?;
            Ok(changed > 0)
        })
        .await
        .map_err(map_tr_err)
}
