// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pawhaven.toml` > `~/.config/pawhaven/pawhaven.toml`
//! > `/etc/pawhaven/pawhaven.toml` with environment variable overrides via the
//! `PAWHAVEN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PawhavenConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pawhaven/pawhaven.toml` (system-wide)
/// 3. `~/.config/pawhaven/pawhaven.toml` (user XDG config)
/// 4. `./pawhaven.toml` (local directory)
/// 5. `PAWHAVEN_*` environment variables
pub fn load_config() -> Result<PawhavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::file("/etc/pawhaven/pawhaven.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pawhaven/pawhaven.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pawhaven.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<PawhavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PawhavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawhavenConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PAWHAVEN_AUTH_TOKEN_SECRET` must map to
/// `auth.token_secret`, not `auth.token.secret`.
fn env_provider() -> Env {
    Env::prefixed("PAWHAVEN_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("auth_", "auth.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [server]
            port = 3001

            [auth]
            token_secret = "test-secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.auth.token_secret.as_deref(), Some("test-secret"));
        // Untouched sections keep their defaults.
        assert_eq!(config.storage.database_path, "pawhaven.db");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [server]
            prot = 3001
            "#,
        );
        assert!(result.is_err(), "typo'd key should be rejected");
    }
}
