// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end test harness for the Pawhaven marketplace.
//!
//! Assembles a complete stack -- temp SQLite database, token signer, and
//! the full gateway router -- and drives it with in-process HTTP requests
//! via `tower::ServiceExt::oneshot`. Tests are independent and
//! order-insensitive: each harness owns its own database file.

pub mod harness;

pub use harness::TestHarness;
