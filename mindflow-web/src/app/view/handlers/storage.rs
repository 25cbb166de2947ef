use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast;
use yew::prelude::*;

/// Copies the encoded save to the clipboard. Encoding failures stay in
/// the console; the running game is untouched either way.
pub fn build_export_save(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        let Some(current) = (*game).as_ref() else {
            return;
        };
        let Ok(text) = crate::game::save::encode(current) else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        {
            let _ = crate::dom::window().navigator().clipboard().write_text(&text);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = text;
        toast::success(&toasts, crate::i18n::t("settings.export_done"));
    })
}

/// Swaps the running game for a pasted save. The replacing state brings
/// its own language and theme, so both are re-applied on success.
pub fn build_import_save(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    let current_language = state.current_language.clone();
    Callback::from(move |raw: String| {
        run_command(&game, &toasts, |session, toasts| match session.import(&raw) {
            Ok(outcome) => {
                crate::i18n::set_lang(session.state().language.as_str());
                crate::theme::apply_theme(session.state().inventory.active_theme);
                current_language.set(crate::i18n::current_lang());
                toast::success(toasts, crate::i18n::t("settings.import_done"));
                notify_unlock(toasts, outcome.notification);
            }
            Err(_) => toast::error(toasts, crate::i18n::t("settings.import_error")),
        });
    })
}

/// Wipes the slot and starts over. The confirm prompt already happened
/// in the settings dialog.
pub fn build_reset(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    let current_language = state.current_language.clone();
    let show_settings = state.show_settings.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, _toasts| {
            session.reset(crate::game::seed_from_clock(), &crate::game::today_string());
            crate::i18n::set_lang(session.state().language.as_str());
            crate::theme::apply_theme(session.state().inventory.active_theme);
        });
        current_language.set(crate::i18n::current_lang());
        show_settings.set(false);
    })
}
