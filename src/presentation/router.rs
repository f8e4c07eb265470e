//! Path-based navigation between views.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::application::dto::BillView;
use crate::application::use_cases::ListBillsUseCase;
use crate::domain::errors::BillError;
use crate::domain::ports::BillStorePort;
use crate::presentation::page::Page;
use crate::presentation::views::{BillsUiState, bills_ui, login_ui, new_bill_ui, vertical_layout};

/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Sign-in view.
    Login,
    /// Bill list.
    Bills,
    /// New-bill form.
    NewBill,
}

impl Route {
    /// Returns the route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "",
            Self::Bills => "#employee/bills",
            Self::NewBill => "#employee/bill/new",
        }
    }

    /// Resolves a path. `/` is treated as the sign-in view.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" => Some(Self::Login),
            "#employee/bills" => Some(Self::Bills),
            "#employee/bill/new" => Some(Self::NewBill),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Receives navigation requests from containers.
pub trait Navigator: Send + Sync {
    /// Replaces the visible view with the one for `route`.
    fn on_navigate(&self, route: Route);
}

/// Renders routes into a [`Page`].
pub struct Router {
    page: Page,
    history: Mutex<Vec<Route>>,
    list_bills: Option<ListBillsUseCase>,
}

impl Router {
    /// Creates router rendering into `page`.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            history: Mutex::new(Vec::new()),
            list_bills: None,
        }
    }

    /// Fetches bill lists from `store`.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn BillStorePort>) -> Self {
        self.list_bills = Some(ListBillsUseCase::new(store));
        self
    }

    /// Returns the page this router renders into.
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Returns the last visited route.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().copied()
    }

    /// Returns every visited route, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }

    /// Navigates to `path`, falling back to the sign-in view for unknown paths.
    pub fn navigate_to_path(&self, path: &str) {
        let route = Route::from_path(path).unwrap_or_else(|| {
            warn!(path, "Unknown route, showing sign-in");
            Route::Login
        });
        self.on_navigate(route);
    }

    /// Fetches bills and renders the list, or the error view when listing fails.
    ///
    /// # Errors
    /// Returns `NoStore` without a store, or the listing error.
    pub async fn load_bills(&self) -> Result<Vec<BillView>, BillError> {
        let result = match &self.list_bills {
            Some(list_bills) => list_bills.execute().await,
            None => Err(BillError::NoStore),
        };

        match result {
            Ok(bills) => {
                self.page
                    .set_body(bills_ui(&BillsUiState::with_data(bills.clone())));
                Ok(bills)
            }
            Err(e) => {
                self.page
                    .set_body(bills_ui(&BillsUiState::error(e.to_string())));
                Err(e)
            }
        }
    }
}

impl Navigator for Router {
    fn on_navigate(&self, route: Route) {
        debug!(route = %route, "Navigating");

        let body = match route {
            Route::Login => login_ui(),
            Route::Bills => format!(
                "{}{}",
                vertical_layout(Route::Bills),
                bills_ui(&BillsUiState::loading())
            ),
            Route::NewBill => new_bill_ui(),
        };

        self.page.set_body(body);
        self.history.lock().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Bill;
    use crate::domain::errors::StoreError;
    use crate::domain::ports::mocks::MockBillStorePort;
    use test_case::test_case;

    #[test_case("", Some(Route::Login) ; "empty_is_login")]
    #[test_case("/", Some(Route::Login) ; "slash_is_login")]
    #[test_case("#employee/bills", Some(Route::Bills) ; "bills")]
    #[test_case("#employee/bill/new", Some(Route::NewBill) ; "new_bill")]
    #[test_case("#admin/dashboard", None ; "unknown")]
    fn test_from_path(path: &str, expected: Option<Route>) {
        assert_eq!(Route::from_path(path), expected);
    }

    #[test]
    fn test_navigate_to_bills_shows_loading_with_active_icon() {
        let router = Router::new(Page::new());
        router.on_navigate(Route::Bills);

        let body = router.page().body();
        assert!(body.contains(r#"id="loading""#));
        assert!(body.contains(r#"data-testid="icon-window" class="active-icon""#));
        assert_eq!(router.current(), Some(Route::Bills));
    }

    #[test]
    fn test_navigate_to_new_bill_renders_form() {
        let router = Router::new(Page::new());
        router.navigate_to_path("#employee/bill/new");

        assert!(router.page().contains(r#"data-testid="form-new-bill""#));
    }

    #[test]
    fn test_unknown_path_falls_back_to_login() {
        let router = Router::new(Page::new());
        router.navigate_to_path("#nowhere");

        assert_eq!(router.current(), Some(Route::Login));
        assert!(router.page().contains(r#"data-testid="login-page""#));
    }

    #[tokio::test]
    async fn test_load_bills_renders_list() {
        let mut store = MockBillStorePort::new();
        store.expect_list().times(1).returning(|| {
            Ok(vec![Bill {
                id: Some("a".to_string()),
                email: "a@a".to_string(),
                expense_type: "Transports".to_string(),
                name: "train".to_string(),
                amount: Some(50),
                date: "2004-04-04".to_string(),
                vat: String::new(),
                pct: 20,
                commentary: String::new(),
                file_url: None,
                file_name: None,
                status: crate::domain::entities::BillStatus::Pending,
            }])
        });

        let router = Router::new(Page::new()).with_store(Arc::new(store));
        router.on_navigate(Route::Bills);
        let bills = router.load_bills().await.unwrap();

        assert_eq!(bills.len(), 1);
        assert!(router.page().contains("<td>train</td>"));
        assert!(router.page().contains("<td>4 Avr. 04</td>"));
    }

    #[tokio::test]
    async fn test_load_bills_failure_renders_error() {
        let mut store = MockBillStorePort::new();
        store
            .expect_list()
            .returning(|| Err(StoreError::status(500, "Erreur 500")));

        let router = Router::new(Page::new()).with_store(Arc::new(store));
        assert!(router.load_bills().await.is_err());
        assert!(router.page().contains("Erreur 500"));
    }

    #[tokio::test]
    async fn test_load_bills_without_store() {
        let router = Router::new(Page::new());
        router.on_navigate(Route::Bills);

        assert!(matches!(router.load_bills().await, Err(BillError::NoStore)));
        assert!(!router.page().contains(r#"id="loading""#));
        assert!(router.page().contains(r#"data-testid="error-message""#));
        assert!(router.page().contains(&BillError::NoStore.to_string()));
    }
}
