//! Domain entity definitions.

mod bill;
mod receipt;
mod session_user;

pub use bill::{Bill, BillStatus, DEFAULT_PCT};
pub use receipt::{ReceiptMime, SelectedFile, UploadedReceipt};
pub use session_user::{SessionUser, UserType};
