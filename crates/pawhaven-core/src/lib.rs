// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pawhaven adoption marketplace.
//!
//! Provides the error taxonomy and the domain enums shared by the storage,
//! auth, and gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PawhavenError;
pub use types::{Gender, NotificationKind, PetCategory, PetStatus, RequestStatus, Role};
