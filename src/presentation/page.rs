//! Rendered page content shared by the router and containers.

use std::sync::Arc;

use parking_lot::RwLock;

/// HTML body of the visible view. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct Page {
    body: Arc<RwLock<String>>,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the page content.
    pub fn set_body(&self, html: impl Into<String>) {
        *self.body.write() = html.into();
    }

    /// Returns a copy of the page content.
    #[must_use]
    pub fn body(&self) -> String {
        self.body.read().clone()
    }

    /// Returns whether the page content contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.body.read().contains(needle)
    }
}
