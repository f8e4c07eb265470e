//! Presentation layer with views, containers and routing.

/// View containers.
pub mod containers;
/// Typed UI events.
pub mod events;
/// Rendered page content.
pub mod page;
/// Background operation handles.
pub mod pending;
/// Navigation.
pub mod router;
/// HTML views.
pub mod views;

pub use containers::{Bills, BillsContext, Logout, NewBill, NewBillContext};
pub use page::Page;
pub use pending::PendingOperation;
pub use router::{Navigator, Route, Router};
