//! Data transfer objects.

mod bill_dto;

pub use bill_dto::{BillView, NewBillForm};
