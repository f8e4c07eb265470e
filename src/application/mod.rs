//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Pure helpers shared by use cases and views.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{BillView, NewBillForm};
pub use use_cases::{ListBillsUseCase, SessionUseCase, SubmitBillUseCase, UploadReceiptUseCase};
