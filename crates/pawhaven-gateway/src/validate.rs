// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input-shape validation and free-text sanitization helpers.
//!
//! Validation runs before any domain logic. SQL is parameterized
//! everywhere, so sanitization exists only to keep stored free text free of
//! markup (delegated to ammonia).

use std::sync::OnceLock;

use pawhaven_core::PawhavenError;
use regex::Regex;

/// Trim and strip markup from client-supplied free text.
pub fn sanitize(input: &str) -> String {
    ammonia::clean(input.trim())
}

/// Like [`sanitize`], passing `None` through.
pub fn sanitize_opt(input: Option<String>) -> Option<String> {
    input.map(|s| sanitize(&s))
}

/// Validate an email address's shape (not its deliverability).
pub fn require_email(value: &str) -> Result<(), PawhavenError> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    });
    if pattern.is_match(value.trim()) {
        Ok(())
    } else {
        Err(PawhavenError::Validation("Invalid email address".to_string()))
    }
}

/// Validate a string field's trimmed length.
pub fn require_len(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), PawhavenError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(PawhavenError::Validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Validate that an id is a well-formed UUID, mirroring the wire format the
/// storage layer generates.
pub fn require_uuid(field: &str, value: &str) -> Result<(), PawhavenError> {
    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| PawhavenError::Validation(format!("Invalid {field} format")))
}

/// Parse a status-like string through one of the `pawhaven-core` enums,
/// rejecting unknown values with the field name in the message.
pub fn require_enum<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, PawhavenError> {
    value
        .parse::<T>()
        .map_err(|_| PawhavenError::Validation(format!("Invalid {field} value")))
}
