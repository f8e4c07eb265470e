//! New-bill form view.

use html_escape::encode_text;

use super::vertical_layout;
use crate::presentation::router::Route;

/// Expense types offered by the form.
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Renders the new-bill form.
#[must_use]
pub fn new_bill_ui() -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{}</option>", encode_text(t)))
        .collect();

    format!(
        concat!(
            r#"<div class="layout">{layout}<div class="content">"#,
            r#"<div class="content-header"><div class="content-title">Envoyer une note de frais</div></div>"#,
            r#"<div class="form-newbill-container content-inner">"#,
            r#"<form data-testid="form-new-bill">"#,
            r#"<label for="expense-type">Type de dépense</label>"#,
            r#"<select required data-testid="expense-type">{options}</select>"#,
            r#"<label for="expense-name">Nom de la dépense</label>"#,
            r#"<input type="text" data-testid="expense-name" placeholder="Vol Paris Londres">"#,
            r#"<label for="datepicker">Date</label>"#,
            r#"<input required type="date" data-testid="datepicker">"#,
            r#"<label for="amount">Montant TTC</label>"#,
            r#"<input required type="number" data-testid="amount" placeholder="348">"#,
            r#"<label for="vat">TVA</label>"#,
            r#"<input type="number" data-testid="vat" placeholder="70">"#,
            r#"<input required type="number" data-testid="pct" placeholder="20">"#,
            r#"<label for="commentary">Commentaire</label>"#,
            r#"<textarea data-testid="commentary"></textarea>"#,
            r#"<label for="file">Justificatif</label>"#,
            r#"<input required type="file" accept="image/jpeg,image/png" data-testid="file">"#,
            r#"<button type="submit" id="btn-send-bill">Envoyer</button>"#,
            r#"</form></div></div></div>"#,
        ),
        layout = vertical_layout(Route::NewBill),
        options = options,
    )
}
