//! Declarative attribute markers read off interactive elements.

use std::collections::HashMap;

/// Marker attribute names consumed at bind time.
pub mod attr {
    /// Action kind (logout, subscribe, quick-view, add-to-cart, decrease,
    /// increase, remove).
    pub const ACTION: &str = "data-action";
    /// Navigation target.
    pub const HREF: &str = "data-href";
    /// Product display name.
    pub const PRODUCT: &str = "data-product";
    /// Product unit price.
    pub const PRICE: &str = "data-price";
    /// Cart row index for per-row controls.
    pub const INDEX: &str = "data-index";
    /// Native keyboard tab stop, when the markup already provides one.
    pub const TABINDEX: &str = "tabindex";
}

/// The marker attributes of one interactive element.
#[derive(Debug, Clone, Default)]
pub struct ElementMarkers {
    attrs: HashMap<String, String>,
}

impl ElementMarkers {
    /// An element with no markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    /// The attribute value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// True when a navigating element needs a synthetic tab stop.
///
/// Elements with a navigation marker but no native keyboard semantics are
/// given `tabindex="0"` so keyboard users can reach them.
#[must_use]
pub fn needs_tab_stop(markers: &ElementMarkers) -> bool {
    markers.get(attr::HREF).is_some() && markers.get(attr::TABINDEX).is_none()
}

/// True when `key` activates a marker-bound element like a click.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_tab_stop() {
        let navigating = ElementMarkers::new().with(attr::HREF, "cart.html");
        assert!(needs_tab_stop(&navigating));

        let already_focusable = navigating.clone().with(attr::TABINDEX, "0");
        assert!(!needs_tab_stop(&already_focusable));

        assert!(!needs_tab_stop(&ElementMarkers::new()));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
