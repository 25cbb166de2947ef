//! Applies the active room theme as a class on the document element.

use mindflow_game::ThemeId;

/// Swap the `theme-*` class on `<html>` to match the active theme.
pub fn apply_theme(theme: ThemeId) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = crate::dom::document().document_element() {
            let classes = root.class_list();
            for candidate in ThemeId::ALL {
                let _ = classes.remove_1(&format!("theme-{candidate}"));
            }
            let _ = classes.add_1(&format!("theme-{theme}"));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}
