//! Bill listing use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::BillView;
use crate::application::services::sort_by_date_desc;
use crate::domain::errors::BillError;
use crate::domain::ports::BillStorePort;

/// Fetches bills and prepares them for display.
#[derive(Clone)]
pub struct ListBillsUseCase {
    store: Arc<dyn BillStorePort>,
}

impl ListBillsUseCase {
    /// Creates new list use case.
    #[must_use]
    pub fn new(store: Arc<dyn BillStorePort>) -> Self {
        Self { store }
    }

    /// Returns bills most recent first, with display dates and labels.
    ///
    /// # Errors
    /// Returns the store error when listing fails.
    pub async fn execute(&self) -> Result<Vec<BillView>, BillError> {
        let mut bills = self.store.list().await.map_err(|e| {
            warn!(error = %e, "Failed to list bills");
            e
        })?;

        sort_by_date_desc(&mut bills, |bill| bill.date.as_str());
        debug!(count = bills.len(), "Bills listed");

        Ok(bills.into_iter().map(BillView::formatted).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Bill, BillStatus};
    use crate::domain::errors::StoreError;
    use crate::domain::ports::mocks::MockBillStorePort;

    fn bill(id: &str, date: &str, status: BillStatus) -> Bill {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "date": date,
            "status": status.as_str(),
            "name": format!("bill {id}"),
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_lists_most_recent_first_with_formatting() {
        let mut store = MockBillStorePort::new();
        store.expect_list().times(1).returning(|| {
            Ok(vec![
                bill("a", "2001-01-01", BillStatus::Refused),
                bill("b", "2004-04-04", BillStatus::Pending),
                bill("c", "2003-03-03", BillStatus::Accepted),
            ])
        });

        let views = ListBillsUseCase::new(Arc::new(store)).execute().await.unwrap();

        let ids: Vec<_> = views.iter().filter_map(|v| v.id.as_deref()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(views[0].date, "4 Avr. 04");
        assert_eq!(views[0].raw_date, "2004-04-04");
        assert_eq!(views[0].status_label(), "En attente");
        assert_eq!(views[1].status_label(), "Accepté");
    }

    #[tokio::test]
    async fn test_corrupted_date_is_shown_raw() {
        let mut store = MockBillStorePort::new();
        store
            .expect_list()
            .returning(|| Ok(vec![bill("x", "corrupted", BillStatus::Pending)]));

        let views = ListBillsUseCase::new(Arc::new(store)).execute().await.unwrap();
        assert_eq!(views[0].date, "corrupted");
    }

    #[tokio::test]
    async fn test_list_failure() {
        let mut store = MockBillStorePort::new();
        store
            .expect_list()
            .returning(|| Err(StoreError::status(404, "Erreur 404")));

        let result = ListBillsUseCase::new(Arc::new(store)).execute().await;
        assert_eq!(result.unwrap_err().to_string(), "Erreur 404");
    }
}
