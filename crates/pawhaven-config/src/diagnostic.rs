// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error types for configuration loading and validation.
//!
//! Figment deserialization errors and post-deserialization validation
//! failures both render through miette so startup errors point at the
//! offending key instead of dumping a serde trace.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A TOML file or env var failed to deserialize into the config model.
    #[error("{message}")]
    #[diagnostic(
        code(pawhaven::config::parse),
        help("check pawhaven.toml and PAWHAVEN_* environment variables against the documented keys")
    )]
    Parse {
        /// Figment's description of what failed, including the key path.
        message: String,
    },

    /// A value deserialized fine but violates a semantic constraint.
    #[error("validation error: {message}")]
    #[diagnostic(code(pawhaven::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },
}

/// Convert a Figment extraction error into diagnostic config errors.
///
/// Figment reports one error per failed key; each becomes its own entry so
/// the user sees every problem in one run.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse {
            message: e.to_string(),
        })
        .collect()
}

/// Render all collected errors to stderr via miette's fancy reporter.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        let report = miette::Report::msg(error.to_string());
        eprintln!("{report:?}");
    }
    eprintln!(
        "pawhaven: {} configuration error(s) -- refusing to start",
        errors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message() {
        let err = ConfigError::Validation {
            message: "server.port must not be 0".to_string(),
        };
        assert_eq!(err.to_string(), "validation error: server.port must not be 0");
    }

    #[test]
    fn figment_errors_convert_one_per_key() {
        let result = crate::loader::load_config_from_str("server = 42");
        let errors = figment_to_config_errors(result.unwrap_err());
        assert!(!errors.is_empty());
    }
}
