// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Pawhaven marketplace.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a single-writer
//! concurrency model via `tokio-rusqlite`, and typed query modules per
//! entity. Uniqueness invariants (one open adoption request per (user, pet),
//! one favorite per (user, pet), one review per (user, pet)) are enforced by
//! unique indexes, never by application-level check-then-insert.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::Database;
pub use models::*;
