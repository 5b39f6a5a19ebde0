// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain enums shared across the Pawhaven workspace.
//!
//! Storage keeps these as their canonical lowercase strings; the gateway
//! parses incoming values through `FromStr` so invalid input is rejected at
//! the validation boundary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Account role. Admins manage the catalog and receive adoption-request
/// notifications.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
    Staff,
}

/// Listing status of an adoptable pet.
///
/// Advisory only: the adoption-request flow does not transition it. Admins
/// may set it directly through the catalog update route.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Adopted,
}

/// Catalog category for a pet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PetCategory {
    Dogs,
    Cats,
    SpecialNeeds,
}

/// Recorded gender of a pet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// Lifecycle status of an adoption request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Whether this status is terminal for the one-open-request-per-pet
    /// invariant. Only `rejected` is terminal: a pending or approved request
    /// blocks a fresh request for the same (user, pet) pair.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Rejected)
    }
}

/// Visual category of a notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}
