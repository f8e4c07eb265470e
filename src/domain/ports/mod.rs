mod bill_store_port;
mod client_storage_port;

pub use bill_store_port::{BillStorePort, CreateBillRequest, CreatedBill, UpdateBillRequest};
pub use client_storage_port::{ClientStoragePort, JWT_KEY, USER_KEY};
