// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pet catalog handlers. Reads are public; writes require the admin role.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use pawhaven_core::{Gender, PawhavenError, PetCategory, PetStatus};
use pawhaven_storage::Pet;
use pawhaven_storage::queries::pets;

use crate::AppState;
use crate::auth::{AuthUser, require_admin};
use crate::error::ApiError;
use crate::validate::{require_enum, require_len, require_uuid, sanitize, sanitize_opt};

/// Query parameters for GET /api/products.
#[derive(Debug, Deserialize)]
pub struct ListPetsQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for POST /api/products.
#[derive(Debug, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: Option<String>,
    pub age: i64,
    pub gender: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<String>,
    pub category: String,
}

/// Request body for PUT /api/products/{id}; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub personality_traits: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body for DELETE /api/products/{id}.
#[derive(Debug, Serialize)]
pub struct DeletePetResponse {
    pub message: String,
    pub id: String,
}

/// GET /api/products
pub async fn list_pets(
    State(state): State<AppState>,
    Query(query): Query<ListPetsQuery>,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(|c| require_enum::<PetCategory>("category", c))
        .transpose()?
        .map(|c| c.to_string());
    let status = query
        .status
        .as_deref()
        .map(|s| require_enum::<PetStatus>("status", s))
        .transpose()?
        .map(|s| s.to_string());

    let pets = pets::list_pets(&state.db, category, status).await?;
    Ok(Json(pets))
}

/// GET /api/products/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, ApiError> {
    require_uuid("id", &id)?;
    let pet = pets::get_pet(&state.db, &id)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("Product not found".to_string()))?;
    Ok(Json(pet))
}

fn validate_price(price: f64) -> Result<(), PawhavenError> {
    if !price.is_finite() || price < 0.0 {
        return Err(PawhavenError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn validate_age(age: i64) -> Result<(), PawhavenError> {
    if age < 0 {
        return Err(PawhavenError::Validation(
            "age must be a non-negative integer".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/products (admin only)
pub async fn create_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    require_admin(&auth)?;
    require_len("name", &body.name, 1, 255)?;
    require_len("species", &body.species, 1, 100)?;
    require_len("description", &body.description, 1, 5000)?;
    validate_age(body.age)?;
    validate_price(body.price)?;
    let gender = require_enum::<Gender>("gender", &body.gender)?;
    let category = require_enum::<PetCategory>("category", &body.category)?;

    let pet = pets::create_pet(
        &state.db,
        pets::NewPet {
            name: sanitize(&body.name),
            species: sanitize(&body.species),
            breed: sanitize_opt(body.breed),
            age: body.age,
            gender: gender.to_string(),
            price: body.price,
            description: sanitize(&body.description),
            image_url: body.image_url,
            location: sanitize_opt(body.location),
            medical_history: sanitize_opt(body.medical_history),
            personality_traits: sanitize_opt(body.personality_traits),
            category: category.to_string(),
        },
    )
    .await?;

    tracing::info!(pet_id = %pet.id, admin_id = %auth.id, "pet listing created");
    Ok((StatusCode::CREATED, Json(pet)))
}

/// PUT /api/products/{id} (admin only)
pub async fn update_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, ApiError> {
    require_admin(&auth)?;
    require_uuid("id", &id)?;

    if let Some(name) = &body.name {
        require_len("name", name, 1, 255)?;
    }
    if let Some(age) = body.age {
        validate_age(age)?;
    }
    if let Some(price) = body.price {
        validate_price(price)?;
    }
    let gender = body
        .gender
        .as_deref()
        .map(|g| require_enum::<Gender>("gender", g))
        .transpose()?;
    let category = body
        .category
        .as_deref()
        .map(|c| require_enum::<PetCategory>("category", c))
        .transpose()?;
    let status = body
        .status
        .as_deref()
        .map(|s| require_enum::<PetStatus>("status", s))
        .transpose()?;

    let update = pets::PetUpdate {
        name: body.name.map(|s| sanitize(&s)),
        species: body.species.map(|s| sanitize(&s)),
        breed: sanitize_opt(body.breed),
        age: body.age,
        gender: gender.map(|g| g.to_string()),
        price: body.price,
        description: body.description.map(|s| sanitize(&s)),
        image_url: body.image_url,
        location: sanitize_opt(body.location),
        medical_history: sanitize_opt(body.medical_history),
        personality_traits: sanitize_opt(body.personality_traits),
        category: category.map(|c| c.to_string()),
        status: status.map(|s| s.to_string()),
    };

    if update.is_empty() {
        return Err(PawhavenError::Validation("No fields to update".to_string()).into());
    }

    let pet = pets::update_pet(&state.db, &id, update)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("Product not found".to_string()))?;
    Ok(Json(pet))
}

/// DELETE /api/products/{id} (admin only)
///
/// Adoption requests, favorites, and reviews referencing the pet go with it
/// (cascade foreign keys) -- no orphan rows.
pub async fn delete_pet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeletePetResponse>, ApiError> {
    require_admin(&auth)?;
    require_uuid("id", &id)?;

    if !pets::delete_pet(&state.db, &id).await? {
        return Err(PawhavenError::NotFound("Product not found".to_string()).into());
    }

    tracing::info!(pet_id = %id, admin_id = %auth.id, "pet listing deleted");
    Ok(Json(DeletePetResponse {
        message: "Product deleted successfully".to_string(),
        id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pet_request_deserializes() {
        let json = r#"{
            "name": "Biscuit",
            "species": "dog",
            "age": 3,
            "gender": "female",
            "price": 120.0,
            "description": "A very good dog.",
            "category": "dogs"
        }"#;
        let req: CreatePetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Biscuit");
        assert!(req.breed.is_none());
    }

    #[test]
    fn update_pet_request_accepts_empty_body() {
        let req: UpdatePetRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.status.is_none());
    }

    #[test]
    fn price_and_age_bounds() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_age(0).is_ok());
        assert!(validate_age(-1).is_err());
    }
}
