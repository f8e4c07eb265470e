//! Bill store HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode, Url, header};
use tracing::{debug, warn};

use super::dto::{CreatedBillResponse, ErrorResponse};
use crate::domain::entities::Bill;
use crate::domain::errors::StoreError;
use crate::domain::ports::{
    BillStorePort, ClientStoragePort, CreateBillRequest, CreatedBill, JWT_KEY, UpdateBillRequest,
};

const DEFAULT_API_URL: &str = "http://localhost:5678";
const USER_AGENT: &str = concat!("billed/", env!("CARGO_PKG_VERSION"));

/// REST adapter for the bill store.
pub struct HttpBillStore {
    client: Client,
    base_url: Url,
    client_storage: Option<Arc<dyn ClientStoragePort>>,
}

impl HttpBillStore {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, StoreError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into();
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| StoreError::unexpected(format!("invalid bill store URL {base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            client_storage: None,
        })
    }

    /// Reads the bearer token from `storage` on every request.
    #[must_use]
    pub fn with_client_storage(mut self, storage: Arc<dyn ClientStoragePort>) -> Self {
        self.client_storage = Some(storage);
        self
    }

    /// Builds `{base}/bills` or `{base}/bills/{selector}` with the selector
    /// percent-encoded as a single path segment.
    fn bills_url(&self, selector: Option<&str>) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                StoreError::unexpected(format!("invalid bill store URL {}", self.base_url))
            })?;
            segments.pop_if_empty().push("bills");
            if let Some(selector) = selector {
                segments.push(selector);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let jwt = self
            .client_storage
            .as_ref()
            .and_then(|storage| storage.get_item(JWT_KEY).ok().flatten());

        match jwt {
            Some(jwt) => request.header(header::AUTHORIZATION, format!("Bearer {jwt}")),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach bill store");
            if e.is_timeout() {
                StoreError::network("request timed out")
            } else if e.is_connect() {
                StoreError::network("failed to connect to bill store")
            } else {
                StoreError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> StoreError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("Erreur {}", status.as_u16()),
        };

        StoreError::status(status.as_u16(), message)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse bill store response");
            StoreError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl BillStorePort for HttpBillStore {
    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError> {
        let url = self.bills_url(None)?;
        let CreateBillRequest { file, email } = request;

        debug!(file_name = %file.name, "Uploading receipt to bill store");

        let part = Part::bytes(file.content.to_vec())
            .file_name(file.name)
            .mime_str(&file.mime_type)
            .map_err(|e| StoreError::unexpected(format!("invalid receipt type: {e}")))?;
        let form = Form::new().part("file", part).text("email", email);

        let response = self.send(self.client.post(url).multipart(form)).await?;
        let created: CreatedBillResponse = Self::decode(response).await?;

        Ok(CreatedBill {
            file_url: created.file_url,
            key: created.key,
        })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError> {
        let builder = match request.selector.as_deref() {
            Some(selector) => self.client.patch(self.bills_url(Some(selector))?),
            None => self.client.post(self.bills_url(None)?),
        };

        debug!(selector = ?request.selector, "Writing bill to store");

        let response = self.send(builder.json(&request.data)).await?;
        Self::decode(response).await
    }

    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let url = self.bills_url(None)?;

        debug!("Listing bills");

        let response = self.send(self.client.get(url)).await?;
        Self::decode(response).await
    }
}
