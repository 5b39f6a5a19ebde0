// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers, one module per resource.

pub mod adoptions;
pub mod auth;
pub mod content;
pub mod favorites;
pub mod messages;
pub mod notifications;
pub mod pets;
pub mod preferences;
pub mod reviews;
