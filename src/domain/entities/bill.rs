//! Expense bill entity.

use serde::{Deserialize, Serialize};

/// Review status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Awaiting review. Every new bill starts here.
    #[default]
    Pending,
    /// Approved by an administrator.
    Accepted,
    /// Rejected by an administrator.
    Refused,
}

impl BillStatus {
    /// Returns the label shown in the bill list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Accepté",
            Self::Refused => "Refused",
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single expense-report entry.
///
/// `amount` is `None` when the form value did not parse as an integer; it
/// is then sent as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Store identifier, present on bills read back from the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Email of the employee who submitted the bill.
    #[serde(default)]
    pub email: String,
    /// Expense type, e.g. `Transports`.
    #[serde(rename = "type", default)]
    pub expense_type: String,
    /// Free-form name of the expense.
    #[serde(default)]
    pub name: String,
    /// Amount including taxes.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Expense date as entered, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// VAT amount as entered.
    #[serde(default)]
    pub vat: String,
    /// VAT percentage.
    #[serde(default = "default_pct")]
    pub pct: i64,
    /// Employee commentary.
    #[serde(default)]
    pub commentary: String,
    /// URL of the uploaded receipt.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Display name of the uploaded receipt.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Review status.
    #[serde(default)]
    pub status: BillStatus,
}

/// VAT percentage used when the form value is missing or unusable.
pub const DEFAULT_PCT: i64 = 20;

const fn default_pct() -> i64 {
    DEFAULT_PCT
}
