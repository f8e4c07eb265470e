//! Domain error types.

mod bill_error;
mod session_error;
mod store_error;

pub use bill_error::BillError;
pub use session_error::SessionError;
pub use store_error::StoreError;
