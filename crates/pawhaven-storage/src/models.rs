// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model structs mapping one-to-one onto storage rows.
//!
//! Status and role columns are carried as their canonical strings; the
//! gateway parses client input through the `pawhaven-core` enums before it
//! ever reaches a query.

use serde::Serialize;

/// A registered account. Not `Serialize`: the gateway builds its own
/// response type so `password_hash` can never leak into a body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// An adoptable pet listing.
#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    pub id: String,
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
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A user's intent-to-adopt record for one pet.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionRequest {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An adoption request joined with display fields of its pet.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionRequestWithPet {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub pet_name: Option<String>,
    pub pet_image: Option<String>,
}

/// A user's favorite marker on one pet.
#[derive(Debug, Clone, Serialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub created_at: String,
}

/// A favorite joined with display fields of its pet.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteWithPet {
    pub id: String,
    pub pet_id: String,
    pub added_at: String,
    pub pet_name: Option<String>,
    pub pet_breed: Option<String>,
    pub pet_age: Option<i64>,
    pub pet_price: Option<f64>,
    pub pet_image: Option<String>,
}

/// A 1-5 star review of a pet.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: String,
}

/// A review joined with display fields of its pet.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithPet {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: String,
    pub pet_name: Option<String>,
    pub pet_image: Option<String>,
}

/// A system-created notification owned by one user.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub created_at: String,
}

/// A directed message between two users.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub body: String,
    pub adoption_request_id: Option<String>,
    pub is_read: bool,
    pub created_at: String,
}

/// A message joined with the display names of both parties.
#[derive(Debug, Clone, Serialize)]
pub struct MessageWithNames {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub body: String,
    pub adoption_request_id: Option<String>,
    pub is_read: bool,
    pub created_at: String,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
}

/// Per-user notification preference flags (stored but inert; no dispatch
/// logic consults them).
#[derive(Debug, Clone, Serialize)]
pub struct UserPreferences {
    pub user_id: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub marketing_emails: bool,
    pub adoption_updates: bool,
    pub message_alerts: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A shelter team member shown on the about page.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

/// One entry of the shelter's history timeline.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEvent {
    pub id: String,
    pub year: i64,
    pub title: String,
    pub description: String,
    pub display_order: i64,
}

/// A browsable catalog category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}
