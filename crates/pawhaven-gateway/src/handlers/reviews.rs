// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review handlers. One review per (user, pet).

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use pawhaven_core::PawhavenError;
use pawhaven_storage::models::{Review, ReviewWithPet};
use pawhaven_storage::queries::reviews;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::{require_uuid, sanitize_opt};

/// Request body for POST /api/user/reviews.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub pet_id: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

/// POST /api/user/reviews
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    require_uuid("pet_id", &body.pet_id)?;
    if !(1..=5).contains(&body.rating) {
        return Err(
            PawhavenError::Validation("rating must be between 1 and 5".to_string()).into(),
        );
    }
    let comment = sanitize_opt(body.comment).filter(|c| !c.is_empty());

    let review = reviews::create_review(&state.db, &auth.id, &body.pet_id, body.rating, comment)
        .await?;

    tracing::info!(user_id = %auth.id, pet_id = %body.pet_id, "review submitted");
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/user/reviews
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ReviewWithPet>>, ApiError> {
    let reviews = reviews::list_for_user(&state.db, &auth.id).await?;
    Ok(Json(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_request_deserializes() {
        let json = r#"{"pet_id": "550e8400-e29b-41d4-a716-446655440000", "rating": 4}"#;
        let req: CreateReviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.rating, 4);
        assert!(req.comment.is_none());
    }
}
