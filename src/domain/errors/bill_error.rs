//! Bill workflow error types.

use thiserror::Error;

use super::{SessionError, StoreError};

/// Errors raised while uploading, submitting or listing bills.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BillError {
    #[error("unsupported receipt type: {mime_type}")]
    InvalidFileType { mime_type: String },

    #[error("no bill store configured")]
    NoStore,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("background task failed: {message}")]
    Task { message: String },
}

impl BillError {
    /// Creates invalid file type error.
    #[must_use]
    pub fn invalid_file_type(mime_type: impl Into<String>) -> Self {
        Self::InvalidFileType {
            mime_type: mime_type.into(),
        }
    }

    /// Creates task error.
    #[must_use]
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let error: BillError = StoreError::status(500, "Erreur 500").into();
        assert_eq!(error.to_string(), "Erreur 500");
    }

    #[test]
    fn test_invalid_file_type_message() {
        let error = BillError::invalid_file_type("application/pdf");
        assert_eq!(error.to_string(), "unsupported receipt type: application/pdf");
    }
}
