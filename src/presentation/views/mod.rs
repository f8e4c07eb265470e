//! HTML views.

mod bills_ui;
mod error_page;
mod loading_page;
mod login_ui;
mod new_bill_ui;
mod receipt;
mod vertical_layout;

pub use bills_ui::{BillsUiState, bills_ui};
pub use error_page::error_page;
pub use loading_page::loading_page;
pub use login_ui::login_ui;
pub use new_bill_ui::{EXPENSE_TYPES, new_bill_ui};
pub use receipt::receipt_image;
pub use vertical_layout::vertical_layout;
