//! Error view.

use html_escape::encode_text;

/// Renders an error view showing `message`.
#[must_use]
pub fn error_page(message: &str) -> String {
    format!(
        r#"<div class="error-page" data-testid="error-message">{}</div>"#,
        encode_text(message)
    )
}
