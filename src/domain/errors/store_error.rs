//! Bill store error types.

use thiserror::Error;

/// Errors reported by the remote bill store.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("failed to decode store response: {message}")]
    Decode { message: String },

    #[error("unexpected store error: {message}")]
    Unexpected { message: String },
}

impl StoreError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_server_message() {
        let error = StoreError::status(404, "Erreur 404");
        assert_eq!(error.to_string(), "Erreur 404");
        assert!(!error.is_network_error());
    }

    #[test]
    fn test_network_error_classification() {
        assert!(StoreError::network("connection refused").is_network_error());
    }
}
