//! Error types for configuration and transport operations.

use thiserror::Error;

/// Errors raised while decoding or validating [`crate::config::LoginConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Embedded configuration document was not valid JSON for the schema.
    #[error("failed to decode login config: {detail}")]
    Decode {
        /// Decoder error detail.
        detail: String,
    },
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by an [`crate::core::ports::AuthTransport`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request never produced a response (offline, CORS, aborted).
    #[error("{detail}")]
    Network {
        /// Transport error detail.
        detail: String,
    },
    /// Server answered with a non-success status.
    #[error("{raw}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw error text extracted from the response body.
        raw: String,
    },
    /// Request body could not be built.
    #[error("{detail}")]
    Encode {
        /// Encoder error detail.
        detail: String,
    },
}

/// Errors raised by a [`crate::core::ports::PreferenceStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("preference storage unavailable: {detail}")]
pub struct PreferenceError {
    /// Storage error detail.
    pub detail: String,
}

impl TransportError {
    /// Raw text fed to the server error classifier.
    #[must_use]
    pub fn raw_message(&self) -> &str {
        match self {
            Self::Network { detail } | Self::Encode { detail } => detail,
            Self::Rejected { raw, .. } => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_message_exposes_server_text() {
        let err = TransportError::Rejected {
            status: 401,
            raw: "Incorrect password".to_string(),
        };
        assert_eq!(err.raw_message(), "Incorrect password");
        assert_eq!(err.to_string(), "Incorrect password");
    }

    #[test]
    fn network_errors_display_detail() {
        let err = TransportError::Network {
            detail: "Failed to fetch".to_string(),
        };
        assert_eq!(err.raw_message(), "Failed to fetch");
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn config_errors_name_the_field() {
        let err = ConfigError::InvalidField {
            field: "login_path",
            reason: "must start with '/'",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'login_path': must start with '/'"
        );
    }
}
