//! Remote bill store port definition.

use async_trait::async_trait;

use crate::domain::entities::{Bill, SelectedFile};
use crate::domain::errors::StoreError;

/// Upload payload: the receipt file and the uploader's email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBillRequest {
    pub file: SelectedFile,
    pub email: String,
}

impl CreateBillRequest {
    #[must_use]
    pub fn new(file: SelectedFile, email: impl Into<String>) -> Self {
        Self {
            file,
            email: email.into(),
        }
    }
}

/// Store answer to an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBill {
    /// Public URL of the stored receipt.
    pub file_url: String,
    /// Key of the bill the store created for the upload.
    pub key: String,
}

/// Update payload: the full bill and the key of the bill to update.
///
/// `selector` is `None` when no receipt was uploaded beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBillRequest {
    pub data: Bill,
    pub selector: Option<String>,
}

/// Port for the remote bill store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BillStorePort: Send + Sync {
    /// Uploads a receipt and creates the backing bill.
    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError>;

    /// Writes the bill record.
    async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError>;

    /// Lists the bills visible to the current user.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;
}
