use serde::Deserialize;

/// Upload response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBillResponse {
    /// Public URL of the stored receipt.
    pub file_url: String,
    /// Key of the created bill.
    pub key: String,
}

/// Error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the store.
    #[serde(alias = "error")]
    pub message: String,
}
