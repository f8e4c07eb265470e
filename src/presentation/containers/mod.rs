//! Containers binding views to use cases.

mod bills;
mod logout;
mod new_bill;

pub use bills::{Bills, BillsContext, ModalState};
pub use logout::Logout;
pub use new_bill::{FileChange, NewBill, NewBillContext, Submission};
