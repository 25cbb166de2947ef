use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast;
use crate::game::{Language, ThemeError, ThemeId};
use yew::prelude::*;

/// Switches the catalog, persists the choice into the save, and keeps
/// the `<html lang>` attribute in step.
pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        let resolved = crate::i18n::current_lang();
        let language = resolved.parse::<Language>().unwrap_or_default();
        run_command(&game, &toasts, |session, _toasts| {
            session.set_language(language);
        });
        current_language.set(resolved);
    })
}

pub fn build_theme_change(state: &AppState) -> Callback<ThemeId> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |theme: ThemeId| {
        run_command(&game, &toasts, |session, toasts| {
            match session.set_theme(theme) {
                Ok(_) => crate::theme::apply_theme(theme),
                Err(ThemeError::NotOwned(_)) => {
                    toast::error(toasts, crate::i18n::t("errors.theme_locked"));
                }
            }
        });
    })
}

pub fn build_dev_click(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| {
            let outcome = session.register_logo_click();
            notify_unlock(toasts, outcome.notification);
        });
    })
}
