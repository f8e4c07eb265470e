//! Use case implementations.

mod list_bills_use_case;
mod session_use_case;
mod submit_bill_use_case;
mod upload_receipt_use_case;

pub use list_bills_use_case::ListBillsUseCase;
pub use session_use_case::SessionUseCase;
pub use submit_bill_use_case::SubmitBillUseCase;
pub use upload_receipt_use_case::UploadReceiptUseCase;
