//! Bill list container.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::application::dto::BillView;
use crate::application::use_cases::ListBillsUseCase;
use crate::domain::errors::BillError;
use crate::domain::ports::BillStorePort;
use crate::presentation::events::IconEyeEvent;
use crate::presentation::router::{Navigator, Route};
use crate::presentation::views::receipt_image;

/// Collaborators of the bill list container.
pub struct BillsContext {
    /// Bill store. Without one, listing fails with `NoStore`.
    pub store: Option<Arc<dyn BillStorePort>>,
    /// Navigation target.
    pub navigator: Arc<dyn Navigator>,
    /// Width of the receipt preview overlay in pixels.
    pub overlay_width: u32,
}

/// State of the receipt preview overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Whether the overlay is shown.
    pub open: bool,
    /// Overlay body markup.
    pub body: String,
}

/// Binds the bill list: receipt preview and new-bill button.
pub struct Bills {
    navigator: Arc<dyn Navigator>,
    list_bills: Option<ListBillsUseCase>,
    overlay_width: u32,
    modal: Mutex<ModalState>,
}

impl Bills {
    /// Creates the container.
    #[must_use]
    pub fn new(context: BillsContext) -> Self {
        Self {
            navigator: context.navigator,
            list_bills: context.store.map(ListBillsUseCase::new),
            overlay_width: context.overlay_width,
            modal: Mutex::new(ModalState::default()),
        }
    }

    /// Returns the preview overlay state.
    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal.lock().clone()
    }

    /// Opens the preview overlay with the row's receipt at half the overlay width.
    pub fn handle_click_icon_eye(&self, event: &IconEyeEvent) -> ModalState {
        let width = self.overlay_width / 2;
        debug!(url = %event.bill_url, width, "Opening receipt preview");

        let mut modal = self.modal.lock();
        *modal = ModalState {
            open: true,
            body: receipt_image(&event.bill_url, width),
        };
        modal.clone()
    }

    /// Hides the preview overlay.
    pub fn close_modal(&self) {
        self.modal.lock().open = false;
    }

    /// Opens the new-bill form.
    pub fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(Route::NewBill);
    }

    /// Returns bills most recent first, formatted for display.
    ///
    /// # Errors
    /// Returns `NoStore` without a store, or the listing error.
    pub async fn get_bills(&self) -> Result<Vec<BillView>, BillError> {
        match &self.list_bills {
            Some(list_bills) => list_bills.execute().await,
            None => Err(BillError::NoStore),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Bill, BillStatus};
    use crate::domain::ports::mocks::MockBillStorePort;
    use crate::presentation::page::Page;
    use crate::presentation::router::Router;
    use test_case::test_case;

    const BILL_URL: &str = "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a";

    fn container(store: Option<MockBillStorePort>, overlay_width: u32) -> (Bills, Arc<Router>) {
        let router = Arc::new(Router::new(Page::new()));
        let bills = Bills::new(BillsContext {
            store: store.map(|s| Arc::new(s) as Arc<dyn BillStorePort>),
            navigator: router.clone(),
            overlay_width,
        });
        (bills, router)
    }

    #[test_case(800, 400 ; "even_width")]
    #[test_case(801, 400 ; "odd_width_floors")]
    #[test_case(0, 0 ; "unmeasured_overlay")]
    fn test_icon_eye_opens_modal_with_half_width_image(overlay: u32, expected: u32) {
        let (bills, _) = container(None, overlay);

        let modal = bills.handle_click_icon_eye(&IconEyeEvent::new(BILL_URL));

        assert!(modal.open);
        assert_eq!(
            modal.body,
            format!(
                r#"<img width="{expected}" src="https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&amp;token=c1640e12-a24b-4b11-ae52-529112e9602a" alt="Bill">"#
            )
        );
        assert_eq!(bills.modal(), modal);
    }

    #[test]
    fn test_close_modal() {
        let (bills, _) = container(None, 800);
        bills.handle_click_icon_eye(&IconEyeEvent::new(BILL_URL));

        bills.close_modal();
        assert!(!bills.modal().open);
    }

    #[test]
    fn test_new_bill_button_renders_form() {
        let (bills, router) = container(None, 800);

        bills.handle_click_new_bill();

        assert_eq!(router.current(), Some(Route::NewBill));
        assert!(router.page().contains(r#"data-testid="form-new-bill""#));
    }

    #[tokio::test]
    async fn test_get_bills_most_recent_first() {
        let mut store = MockBillStorePort::new();
        store.expect_list().times(1).returning(|| {
            Ok(["2002-02-02", "2004-04-04", "2003-03-03"]
                .into_iter()
                .map(|date| Bill {
                    id: Some(date.to_string()),
                    email: "a@a".to_string(),
                    expense_type: "Transports".to_string(),
                    name: "train".to_string(),
                    amount: Some(10),
                    date: date.to_string(),
                    vat: String::new(),
                    pct: 20,
                    commentary: String::new(),
                    file_url: None,
                    file_name: None,
                    status: BillStatus::Refused,
                })
                .collect())
        });
        let (bills, _) = container(Some(store), 800);

        let views = bills.get_bills().await.unwrap();
        let dates: Vec<_> = views.iter().map(|v| v.raw_date.as_str()).collect();

        assert_eq!(dates, vec!["2004-04-04", "2003-03-03", "2002-02-02"]);
        assert_eq!(views[0].status_label(), "Refused");
    }

    #[tokio::test]
    async fn test_get_bills_without_store() {
        let (bills, _) = container(None, 800);
        assert!(matches!(bills.get_bills().await, Err(BillError::NoStore)));
    }
}
