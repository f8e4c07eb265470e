//! Receipt preview markup.

use html_escape::encode_double_quoted_attribute;

/// Renders the receipt image shown in the preview overlay.
#[must_use]
pub fn receipt_image(url: &str, width: u32) -> String {
    format!(
        r#"<img width="{width}" src="{}" alt="Bill">"#,
        encode_double_quoted_attribute(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_image_markup() {
        assert_eq!(
            receipt_image("https://test.storage.tld/a.jpg?alt=media&token=c1640e12", 400),
            r#"<img width="400" src="https://test.storage.tld/a.jpg?alt=media&amp;token=c1640e12" alt="Bill">"#
        );
    }
}
