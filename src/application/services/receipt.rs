//! Receipt selection checks.

use crate::domain::entities::{ReceiptMime, SelectedFile};
use crate::domain::errors::BillError;

/// Checks a picked file against the receipt allow-list.
///
/// # Errors
/// Returns `InvalidFileType` when the MIME type is not JPEG or PNG.
pub fn validate_receipt(file: &SelectedFile) -> Result<(), BillError> {
    if ReceiptMime::is_accepted(&file.mime_type) {
        Ok(())
    } else {
        Err(BillError::invalid_file_type(&file.mime_type))
    }
}

/// Returns the last segment of a file-input path value.
///
/// Pickers report paths such as `C:\fakepath\receipt.png`; both separators
/// are honoured.
#[must_use]
pub fn file_name_from_path(value: &str) -> &str {
    value.rsplit(['\\', '/']).next().unwrap_or(value)
}
