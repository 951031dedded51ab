// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "status-live";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that the shell injects ahead of the
/// themed stylesheet.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #f8d030;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Replaces the text of the shell's status region if it is mounted.
#[cfg(target_arch = "wasm32")]
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_status(msg: &str) {
    log::trace!("status: {msg}");
}
