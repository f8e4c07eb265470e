//! Bill submission use case.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::NewBillForm;
use crate::application::services::{parse_amount, parse_pct};
use crate::domain::entities::{Bill, BillStatus, UploadedReceipt};
use crate::domain::errors::BillError;
use crate::domain::ports::{BillStorePort, UpdateBillRequest};

/// Assembles bill records and writes them to the store.
#[derive(Clone)]
pub struct SubmitBillUseCase {
    store: Arc<dyn BillStorePort>,
}

impl SubmitBillUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub fn new(store: Arc<dyn BillStorePort>) -> Self {
        Self { store }
    }

    /// Builds the record sent on submit.
    ///
    /// File fields stay `None` when no receipt was uploaded.
    #[must_use]
    pub fn build_bill(form: &NewBillForm, email: &str, receipt: Option<&UploadedReceipt>) -> Bill {
        Bill {
            id: None,
            email: email.to_string(),
            expense_type: form.expense_type.clone(),
            name: form.name.clone(),
            amount: parse_amount(&form.amount),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: parse_pct(&form.pct),
            commentary: form.commentary.clone(),
            file_url: receipt.map(|r| r.file_url.clone()),
            file_name: receipt.map(|r| r.file_name.clone()),
            status: BillStatus::Pending,
        }
    }

    /// Writes `bill` to the store under `selector`.
    ///
    /// # Errors
    /// Returns the store error when the update fails.
    pub async fn execute(&self, bill: Bill, selector: Option<String>) -> Result<Bill, BillError> {
        debug!(selector = ?selector, name = %bill.name, "Updating bill");

        match self
            .store
            .update(UpdateBillRequest {
                data: bill,
                selector,
            })
            .await
        {
            Ok(saved) => {
                info!(id = ?saved.id, "Bill saved");
                Ok(saved)
            }
            Err(e) => {
                error!(error = %e, "Bill update failed");
                Err(e.into())
            }
        }
    }
}
