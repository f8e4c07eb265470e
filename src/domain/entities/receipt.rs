//! Receipt files: the picked file and the uploaded reference.

use bytes::Bytes;

/// MIME types accepted for receipts.
pub struct ReceiptMime;

impl ReceiptMime {
    /// Allowed receipt MIME types.
    pub const ACCEPTED: [&'static str; 2] = ["image/jpeg", "image/png"];

    /// Returns whether the MIME type is allowed.
    #[must_use]
    pub fn is_accepted(mime_type: &str) -> bool {
        Self::ACCEPTED.contains(&mime_type)
    }
}

/// A file picked by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker.
    pub name: String,
    /// Declared MIME type.
    pub mime_type: String,
    /// File bytes.
    pub content: Bytes,
}

impl SelectedFile {
    /// Creates a selected file.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }
}

/// Reference to a receipt the store accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedReceipt {
    /// Public URL of the stored file.
    pub file_url: String,
    /// Display name derived from the picker path.
    pub file_name: String,
    /// Store key of the bill created with the upload.
    pub bill_id: String,
}
