use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast;
use crate::game::{Difficulty, HabitEditError, HabitKind, Language, TriggerError};
use yew::prelude::*;

pub fn build_trigger(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |habit_id: String| {
        run_command(&game, &toasts, |session, toasts| {
            match session.trigger_habit(&habit_id) {
                Ok(outcome) => {
                    if outcome.value.levels_gained > 0 {
                        toast::success(toasts, crate::i18n::t("toast.level_up"));
                    }
                    if outcome.value.bonus_xp > 0 {
                        toast::info(
                            toasts,
                            crate::i18n::tr(
                                "toast.bonus_xp",
                                &[("xp", crate::i18n::fmt_number(outcome.value.bonus_xp))],
                            ),
                        );
                    }
                    if let Some(key) = outcome.value.message_key.as_deref() {
                        toast::info(toasts, crate::i18n::t(key));
                    }
                    notify_unlock(toasts, outcome.notification);
                }
                Err(err) => toast::error(toasts, crate::i18n::t(trigger_error_key(&err))),
            }
        });
    })
}

pub fn build_create_habit(state: &AppState) -> Callback<(String, HabitKind, Difficulty)> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(
        move |(name, kind, difficulty): (String, HabitKind, Difficulty)| {
            run_command(&game, &toasts, |session, toasts| {
                match session.add_habit(&name, kind, difficulty) {
                    Ok(outcome) => notify_unlock(toasts, outcome.notification),
                    Err(err) => toast::error(toasts, crate::i18n::t(edit_error_key(&err))),
                }
            });
        },
    )
}

pub fn build_update_habit(state: &AppState) -> Callback<(String, String, HabitKind, Difficulty)> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(
        move |(id, name, kind, difficulty): (String, String, HabitKind, Difficulty)| {
            run_command(&game, &toasts, |session, toasts| {
                match session.update_habit(&id, &name, kind, difficulty) {
                    Ok(outcome) => notify_unlock(toasts, outcome.notification),
                    Err(err) => toast::error(toasts, crate::i18n::t(edit_error_key(&err))),
                }
            });
        },
    )
}

pub fn build_delete_habit(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |id: String| {
        run_command(&game, &toasts, |session, toasts| {
            match session.delete_habit(&id) {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => toast::error(toasts, crate::i18n::t(edit_error_key(&err))),
            }
        });
    })
}

/// Kicks off a suggestion fetch for the given focus area. The result
/// lands in `suggestions` whenever the request settles.
pub fn build_suggest(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let suggestions = state.suggestions.clone();
    Callback::from(move |focus: String| {
        let language = (*game).as_ref().map_or(Language::default(), |gs| gs.language);
        #[cfg(target_arch = "wasm32")]
        {
            let suggestions = suggestions.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let names = crate::suggest::fetch_suggestions(&focus, language).await;
                suggestions.set(names);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = focus;
            suggestions.set(crate::game::fallback_list(language));
        }
    })
}

const fn trigger_error_key(err: &TriggerError) -> &'static str {
    match err {
        TriggerError::Defeated => "errors.defeated",
        TriggerError::AlreadyTriggered => "errors.already_triggered",
        TriggerError::UnknownHabit(_) => "errors.unknown_habit",
    }
}

const fn edit_error_key(err: &HabitEditError) -> &'static str {
    match err {
        HabitEditError::EmptyName => "errors.empty_name",
        HabitEditError::RosterFull => "errors.roster_full",
        HabitEditError::RosterAtMinimum => "errors.roster_min",
        HabitEditError::TemplateManaged => "errors.template_managed",
        HabitEditError::UnknownHabit(_) => "errors.unknown_habit",
    }
}
