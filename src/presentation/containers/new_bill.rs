//! New-bill form container.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::application::use_cases::{SubmitBillUseCase, UploadReceiptUseCase};
use crate::domain::entities::{Bill, ReceiptMime, SessionUser, UploadedReceipt};
use crate::domain::ports::BillStorePort;
use crate::presentation::events::{FileChangeEvent, SubmitEvent};
use crate::presentation::page::Page;
use crate::presentation::pending::PendingOperation;
use crate::presentation::router::{Navigator, Route};
use crate::presentation::views::error_page;

/// Collaborators of the new-bill container.
pub struct NewBillContext {
    /// Signed-in user.
    pub session: SessionUser,
    /// Bill store. Without one, uploads and updates are skipped.
    pub store: Option<Arc<dyn BillStorePort>>,
    /// Navigation target.
    pub navigator: Arc<dyn Navigator>,
    /// Page that receives error views.
    pub page: Page,
}

/// Outcome of a file selection.
#[derive(Debug)]
pub enum FileChange {
    /// Not a JPEG or PNG; the input was cleared.
    Rejected,
    /// Accepted but no store is configured.
    Skipped,
    /// Accepted and uploading.
    Uploading(PendingOperation<UploadedReceipt>),
}

/// Outcome of a form submission.
#[derive(Debug)]
pub struct Submission {
    /// Record handed to the store.
    pub bill: Bill,
    /// Store update, absent without a store.
    pub pending: Option<PendingOperation<Bill>>,
}

/// Binds the new-bill form: receipt selection and submission.
pub struct NewBill {
    session: SessionUser,
    navigator: Arc<dyn Navigator>,
    page: Page,
    upload: Option<UploadReceiptUseCase>,
    submit: Option<SubmitBillUseCase>,
    file_input: Mutex<String>,
    receipt: Arc<Mutex<Option<UploadedReceipt>>>,
}

impl NewBill {
    /// Creates the container.
    #[must_use]
    pub fn new(context: NewBillContext) -> Self {
        let NewBillContext {
            session,
            store,
            navigator,
            page,
        } = context;

        Self {
            session,
            navigator,
            page,
            upload: store.clone().map(UploadReceiptUseCase::new),
            submit: store.map(SubmitBillUseCase::new),
            file_input: Mutex::new(String::new()),
            receipt: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the value shown by the file input.
    #[must_use]
    pub fn file_input_value(&self) -> String {
        self.file_input.lock().clone()
    }

    /// Returns the last successfully uploaded receipt.
    #[must_use]
    pub fn receipt(&self) -> Option<UploadedReceipt> {
        self.receipt.lock().clone()
    }

    /// Replaces the retained receipt.
    pub fn set_receipt(&self, receipt: Option<UploadedReceipt>) {
        *self.receipt.lock() = receipt;
    }

    /// Handles a receipt selection.
    ///
    /// Must be called within a tokio runtime when a store is configured.
    pub fn handle_change_file(&self, event: FileChangeEvent) -> FileChange {
        let FileChangeEvent { file, value } = event;

        if !ReceiptMime::is_accepted(&file.mime_type) {
            debug!(mime_type = %file.mime_type, "Rejected receipt, clearing input");
            self.file_input.lock().clear();
            return FileChange::Rejected;
        }

        self.file_input.lock().clone_from(&value);

        let Some(upload) = self.upload.clone() else {
            debug!("No store configured, skipping upload");
            return FileChange::Skipped;
        };

        let email = self.session.email.clone();
        let receipt = Arc::clone(&self.receipt);
        let page = self.page.clone();

        FileChange::Uploading(PendingOperation::spawn(async move {
            match upload.execute(file, &value, &email).await {
                Ok(uploaded) => {
                    *receipt.lock() = Some(uploaded.clone());
                    Ok(uploaded)
                }
                Err(e) => {
                    error!(error = %e, "Receipt upload failed");
                    page.set_body(error_page(&e.to_string()));
                    Err(e)
                }
            }
        }))
    }

    /// Handles form submission: sends the bill and leaves for the bill list
    /// without waiting for the store.
    pub fn handle_submit(&self, event: SubmitEvent) -> Submission {
        let bill =
            SubmitBillUseCase::build_bill(&event.form, &self.session.email, self.receipt().as_ref());

        info!(name = %bill.name, has_receipt = bill.file_url.is_some(), "Submitting bill");

        // The update may fail on another worker; its error view must land
        // after the navigation.
        self.navigator.on_navigate(Route::Bills);
        let pending = self.update_bill(bill.clone());

        Submission { bill, pending }
    }

    /// Sends `bill` to the store under the uploaded receipt's key.
    ///
    /// Failures are logged and shown on the page; success navigates to the
    /// bill list.
    pub fn update_bill(&self, bill: Bill) -> Option<PendingOperation<Bill>> {
        let submit = self.submit.clone()?;
        let selector = self.receipt().map(|r| r.bill_id);
        let navigator = Arc::clone(&self.navigator);
        let page = self.page.clone();

        Some(PendingOperation::spawn(async move {
            match submit.execute(bill, selector).await {
                Ok(saved) => {
                    navigator.on_navigate(Route::Bills);
                    Ok(saved)
                }
                Err(e) => {
                    error!(error = %e, "Failed to save bill");
                    page.set_body(error_page(&e.to_string()));
                    Err(e)
                }
            }
        }))
    }
}
