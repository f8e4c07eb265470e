//! Loading placeholder.

/// Renders the loading placeholder.
#[must_use]
pub fn loading_page() -> String {
    r#"<div id="loading" data-testid="loading">Loading...</div>"#.to_string()
}
