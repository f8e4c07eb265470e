//! Bill DTOs exchanged between views, containers and use cases.

use crate::application::services::bill_format::format_date;
use crate::domain::entities::{Bill, BillStatus};

/// Raw values of the new-bill form, keyed by field role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    /// Expense type select.
    pub expense_type: String,
    /// Expense name input.
    pub name: String,
    /// Amount input.
    pub amount: String,
    /// Date picker.
    pub date: String,
    /// VAT input.
    pub vat: String,
    /// VAT percentage input.
    pub pct: String,
    /// Commentary text area.
    pub commentary: String,
}

impl NewBillForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expense_type(mut self, value: impl Into<String>) -> Self {
        self.expense_type = value.into();
        self
    }

    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self
    }

    #[must_use]
    pub fn amount(mut self, value: impl Into<String>) -> Self {
        self.amount = value.into();
        self
    }

    #[must_use]
    pub fn date(mut self, value: impl Into<String>) -> Self {
        self.date = value.into();
        self
    }

    #[must_use]
    pub fn vat(mut self, value: impl Into<String>) -> Self {
        self.vat = value.into();
        self
    }

    #[must_use]
    pub fn pct(mut self, value: impl Into<String>) -> Self {
        self.pct = value.into();
        self
    }

    #[must_use]
    pub fn commentary(mut self, value: impl Into<String>) -> Self {
        self.commentary = value.into();
        self
    }
}

/// One row of the bill list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillView {
    /// Store identifier.
    pub id: Option<String>,
    /// Expense category.
    pub expense_type: String,
    /// Expense name.
    pub name: String,
    /// Amount in euros, absent when the form value was not a number.
    pub amount: Option<i64>,
    /// Date shown to the user.
    pub date: String,
    /// Date as stored, used for ordering.
    pub raw_date: String,
    /// Review status.
    pub status: BillStatus,
    /// Receipt URL.
    pub file_url: Option<String>,
    /// Receipt file name.
    pub file_name: Option<String>,
}

impl BillView {
    /// Builds a row showing the raw stored date.
    #[must_use]
    pub fn raw(bill: Bill) -> Self {
        Self {
            id: bill.id,
            expense_type: bill.expense_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date.clone(),
            raw_date: bill.date,
            status: bill.status,
            file_url: bill.file_url,
            file_name: bill.file_name,
        }
    }

    /// Builds a row with the display date format.
    #[must_use]
    pub fn formatted(bill: Bill) -> Self {
        let mut view = Self::raw(bill);
        view.date = format_date(&view.raw_date);
        view
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

impl From<Bill> for BillView {
    fn from(bill: Bill) -> Self {
        Self::raw(bill)
    }
}
