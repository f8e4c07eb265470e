//! Bill list view.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{error_page, loading_page, vertical_layout};
use crate::application::dto::BillView;
use crate::application::services::sort_by_date_desc;
use crate::presentation::router::Route;

/// Inputs of the bill list view.
#[derive(Debug, Clone, Default)]
pub struct BillsUiState {
    /// Bills to list.
    pub data: Vec<BillView>,
    /// Whether the list is still loading.
    pub loading: bool,
    /// Error to show instead of the list.
    pub error: Option<String>,
}

impl BillsUiState {
    /// State listing `data`.
    #[must_use]
    pub const fn with_data(data: Vec<BillView>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// Loading state.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Error state.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: Some(message.into()),
        }
    }
}

fn row(bill: &BillView) -> String {
    let amount = bill
        .amount
        .map_or_else(String::new, |amount| amount.to_string());
    let url = bill.file_url.as_deref().unwrap_or_default();

    format!(
        concat!(
            "<tr>",
            "<td>{expense_type}</td>",
            "<td>{name}</td>",
            "<td>{date}</td>",
            "<td>{amount} €</td>",
            "<td>{status}</td>",
            r#"<td><div class="icon-actions">"#,
            r#"<div id="eye" data-testid="icon-eye" data-bill-url="{url}"></div>"#,
            "</div></td>",
            "</tr>",
        ),
        expense_type = encode_text(&bill.expense_type),
        name = encode_text(&bill.name),
        date = encode_text(&bill.date),
        amount = amount,
        status = bill.status_label(),
        url = encode_double_quoted_attribute(url),
    )
}

fn rows(data: &[BillView]) -> String {
    let mut sorted: Vec<&BillView> = data.iter().collect();
    sort_by_date_desc(&mut sorted, |bill| bill.raw_date.as_str());
    sorted.into_iter().map(row).collect()
}

const MODAL: &str = concat!(
    r#"<div class="modal fade" id="modaleFile" data-testid="modaleFile" tabindex="-1" role="dialog">"#,
    r#"<div class="modal-dialog modal-dialog-centered modal-lg" role="document">"#,
    r#"<div class="modal-content">"#,
    r#"<div class="modal-header"><h5 class="modal-title">Justificatif</h5></div>"#,
    r#"<div class="modal-body"></div>"#,
    "</div></div></div>",
);

/// Renders the bill list, its loading placeholder or its error view.
#[must_use]
pub fn bills_ui(state: &BillsUiState) -> String {
    if state.loading {
        return loading_page();
    }
    if let Some(error) = &state.error {
        return error_page(error);
    }

    format!(
        concat!(
            r#"<div class="layout">{layout}<div class="content">"#,
            r#"<div class="content-header">"#,
            r#"<div class="content-title">Mes notes de frais</div>"#,
            r#"<button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>"#,
            "</div>",
            r#"<div id="data-table"><table id="example" class="table table-striped">"#,
            "<thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead>",
            r#"<tbody data-testid="tbody">{rows}</tbody>"#,
            "</table></div></div>{modal}</div>",
        ),
        layout = vertical_layout(Route::Bills),
        rows = rows(&state.data),
        modal = MODAL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Bill, BillStatus};
    use regex::Regex;

    fn fixture(id: &str, date: &str, url: &str) -> BillView {
        BillView::raw(Bill {
            id: Some(id.to_string()),
            email: "a@a".to_string(),
            expense_type: "Hôtel et logement".to_string(),
            name: format!("bill {id}"),
            amount: Some(400),
            date: date.to_string(),
            vat: "80".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some(url.to_string()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            status: BillStatus::Pending,
        })
    }

    fn fixtures() -> Vec<BillView> {
        vec![
            fixture("47qAXb6fIm2zOKkLzMro", "2004-04-04", "https://test.storage.tld/a.jpg"),
            fixture("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", "https://test.storage.tld/b.jpg"),
            fixture("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", "https://test.storage.tld/c.jpg"),
            fixture("qcCK3SzECmaZAGRrHjaC", "2002-02-02", "https://test.storage.tld/d.jpg"),
        ]
    }

    #[test]
    fn test_bills_are_ordered_most_recent_first() {
        let html = bills_ui(&BillsUiState::with_data(fixtures()));
        let date_cell = Regex::new(r"<td>((19|20)\d\d-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01]))</td>").unwrap();

        let dates: Vec<&str> = date_cell
            .captures_iter(&html)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();

        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));

        assert_eq!(dates.len(), 4);
        assert_eq!(dates, sorted);
        assert_eq!(dates[0], "2004-04-04");
    }

    #[test]
    fn test_loading_state_renders_loading_page() {
        assert_eq!(bills_ui(&BillsUiState::loading()), loading_page());
    }

    #[test]
    fn test_error_state_renders_error_page() {
        assert_eq!(
            bills_ui(&BillsUiState::error("ErrorMessage")),
            error_page("ErrorMessage")
        );
    }

    #[test]
    fn test_window_icon_is_active() {
        let html = bills_ui(&BillsUiState::default());
        assert!(html.contains(r#"data-testid="icon-window" class="active-icon""#));
    }

    #[test]
    fn test_rows_carry_preview_icon_and_url() {
        let html = bills_ui(&BillsUiState::with_data(fixtures()));

        assert_eq!(html.matches(r#"data-testid="icon-eye""#).count(), 4);
        assert!(html.contains(r#"data-bill-url="https://test.storage.tld/a.jpg""#));
        assert!(html.contains(r#"data-testid="btn-new-bill""#));
        assert!(html.contains(r#"id="modaleFile""#));
    }

    #[test]
    fn test_row_shows_status_label_and_amount() {
        let html = bills_ui(&BillsUiState::with_data(fixtures()));

        assert!(html.contains("<td>En attente</td>"));
        assert!(html.contains("<td>400 €</td>"));
    }
}
