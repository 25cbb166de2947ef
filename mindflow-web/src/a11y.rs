//! Small accessibility helpers shared across the app shell.

/// id of the polite live region announcing app events.
pub const STATUS_REGION_ID: &str = "app-status";

/// CSS snippet giving keyboard users a visible focus ring.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #7c5cbf;outline-offset:2px}"
}

/// Announce a message through the polite live region, if mounted.
pub fn set_status(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(region) = crate::dom::document().get_element_by_id(STATUS_REGION_ID) {
            region.set_text_content(Some(message));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

/// Return keyboard focus to the element with `id`, if present.
pub fn restore_focus(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        if let Some(element) = crate::dom::document().get_element_by_id(id) {
            if let Some(target) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = target.focus();
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}
