// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #a855f7;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #site-status element if present, so
/// actions without a visible dialog (copying the server address) are announced.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id("site-status"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Whether a key press should activate a `role="button"` element.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
