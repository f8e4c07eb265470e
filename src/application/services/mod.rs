//! Application services.

pub mod bill_format;
pub mod form;
pub mod receipt;

pub use bill_format::{format_date, sort_by_date_desc};
pub use form::{parse_amount, parse_pct};
pub use receipt::{file_name_from_path, validate_receipt};
