// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::PawhavenConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PawhavenConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty
    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    }

    // Validate host looks like a valid IP or hostname
    if !config.server.host.trim().is_empty() {
        let addr = config.server.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{addr}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.max_concurrency == 0 {
        errors.push(ConfigError::Validation {
            message: "server.max_concurrency must be at least 1".to_string(),
        });
    }

    // Validate database_path is not empty
    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // A configured-but-blank secret is almost certainly an interpolation
    // mistake; distinguish it from the legitimate "not configured" state.
    if let Some(secret) = &config.auth.token_secret
        && secret.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "auth.token_secret must not be blank when set".to_string(),
        });
    }

    if config.auth.token_ttl_days < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.token_ttl_days must be at least 1, got {}",
                config.auth.token_ttl_days
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PawhavenConfig;

    #[test]
    fn default_config_validates() {
        let config = PawhavenConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_host_is_rejected() {
        let mut config = PawhavenConfig::default();
        config.server.host = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("server.host")));
    }

    #[test]
    fn blank_secret_is_rejected_but_missing_secret_is_not() {
        let mut config = PawhavenConfig::default();
        config.auth.token_secret = Some("   ".to_string());
        assert!(validate_config(&config).is_err());

        config.auth.token_secret = None;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = PawhavenConfig::default();
        config.server.host = "".to_string();
        config.storage.database_path = "".to_string();
        config.auth.token_ttl_days = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
