//! Typed UI events delivered to containers.

use crate::application::dto::NewBillForm;
use crate::domain::entities::SelectedFile;

/// The receipt file input changed.
#[derive(Debug, Clone)]
pub struct FileChangeEvent {
    /// Picked file.
    pub file: SelectedFile,
    /// Path value reported by the input, e.g. `C:\fakepath\receipt.png`.
    pub value: String,
}

impl FileChangeEvent {
    /// Creates new file change event.
    #[must_use]
    pub fn new(file: SelectedFile, value: impl Into<String>) -> Self {
        Self {
            file,
            value: value.into(),
        }
    }
}

/// The new-bill form was submitted.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    /// Field values at submit time.
    pub form: NewBillForm,
}

impl SubmitEvent {
    /// Creates new submit event.
    #[must_use]
    pub const fn new(form: NewBillForm) -> Self {
        Self { form }
    }
}

/// A row's receipt preview icon was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEyeEvent {
    /// Receipt URL carried by the row.
    pub bill_url: String,
}

impl IconEyeEvent {
    /// Creates new icon event.
    #[must_use]
    pub fn new(bill_url: impl Into<String>) -> Self {
        Self {
            bill_url: bill_url.into(),
        }
    }
}
