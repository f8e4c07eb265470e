//! Receipt upload use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{file_name_from_path, validate_receipt};
use crate::domain::entities::{SelectedFile, UploadedReceipt};
use crate::domain::errors::BillError;
use crate::domain::ports::{BillStorePort, CreateBillRequest};

/// Validates a picked receipt and uploads it.
#[derive(Clone)]
pub struct UploadReceiptUseCase {
    store: Arc<dyn BillStorePort>,
}

impl UploadReceiptUseCase {
    /// Creates new upload use case.
    #[must_use]
    pub fn new(store: Arc<dyn BillStorePort>) -> Self {
        Self { store }
    }

    /// Uploads `file` for `email`.
    ///
    /// `input_value` is the file input's path value, its last segment becomes
    /// the receipt's display name.
    ///
    /// # Errors
    /// Returns `InvalidFileType` without calling the store when the file is
    /// not JPEG or PNG, or the store error when the upload fails.
    pub async fn execute(
        &self,
        file: SelectedFile,
        input_value: &str,
        email: &str,
    ) -> Result<UploadedReceipt, BillError> {
        validate_receipt(&file)?;
        let file_name = file_name_from_path(input_value).to_string();

        debug!(file_name = %file_name, size = file.content.len(), "Uploading receipt");

        let created = self
            .store
            .create(CreateBillRequest::new(file, email))
            .await
            .map_err(|e| {
                warn!(error = %e, "Receipt upload failed");
                e
            })?;

        info!(bill_id = %created.key, file_url = %created.file_url, "Receipt uploaded");

        Ok(UploadedReceipt {
            file_url: created.file_url,
            file_name,
            bill_id: created.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::ports::CreatedBill;
    use crate::domain::ports::mocks::MockBillStorePort;

    #[tokio::test]
    async fn test_uploads_png_with_email() {
        let mut store = MockBillStorePort::new();
        store
            .expect_create()
            .withf(|request| {
                request.email == "employee@test.com"
                    && request.file.name == "hello.png"
                    && request.file.mime_type == "image/png"
            })
            .times(1)
            .returning(|_| {
                Ok(CreatedBill {
                    file_url: "https://localhost:3456/images/test.jpg".to_string(),
                    key: "1234".to_string(),
                })
            });

        let use_case = UploadReceiptUseCase::new(Arc::new(store));
        let file = SelectedFile::new("hello.png", "image/png", "hello");

        let receipt = use_case
            .execute(file, r"C:\fakepath\hello.png", "employee@test.com")
            .await
            .unwrap();

        assert_eq!(
            receipt,
            UploadedReceipt {
                file_url: "https://localhost:3456/images/test.jpg".to_string(),
                file_name: "hello.png".to_string(),
                bill_id: "1234".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_rejects_pdf_without_store_call() {
        let mut store = MockBillStorePort::new();
        store.expect_create().times(0);

        let use_case = UploadReceiptUseCase::new(Arc::new(store));
        let file = SelectedFile::new("hello.pdf", "application/pdf", "hello");

        let result = use_case
            .execute(file, "C://fakepath/hello.pdf", "employee@test.com")
            .await;

        assert!(matches!(result, Err(BillError::InvalidFileType { .. })));
    }

    #[tokio::test]
    async fn test_propagates_store_failure() {
        let mut store = MockBillStorePort::new();
        store
            .expect_create()
            .returning(|_| Err(StoreError::status(404, "Erreur 404")));

        let use_case = UploadReceiptUseCase::new(Arc::new(store));
        let file = SelectedFile::new("hello.jpg", "image/jpeg", "hello");

        let error = use_case
            .execute(file, "hello.jpg", "employee@test.com")
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Erreur 404");
    }
}
