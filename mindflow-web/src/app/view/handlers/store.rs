use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast::{self, ToastTray};
use crate::game::StoreError;
use yew::prelude::*;

pub fn build_buy_booster(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| {
            match session.buy_booster() {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => store_error_toast(toasts, &err),
            }
        });
    })
}

pub fn build_buy_freeze(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| {
            match session.buy_freeze() {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => store_error_toast(toasts, &err),
            }
        });
    })
}

pub fn build_buy_potion(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| {
            match session.buy_potion() {
                Ok(outcome) => {
                    if outcome.value.levels_gained > 0 {
                        toast::success(toasts, crate::i18n::t("toast.level_up"));
                    }
                    notify_unlock(toasts, outcome.notification);
                }
                Err(err) => store_error_toast(toasts, &err),
            }
        });
    })
}

pub fn build_buy_bundle(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |bundle_id: String| {
        run_command(&game, &toasts, |session, toasts| {
            match session.buy_bundle(&bundle_id) {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => store_error_toast(toasts, &err),
            }
        });
    })
}

pub fn build_decoration(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |decoration_id: String| {
        run_command(&game, &toasts, |session, toasts| {
            match session.buy_or_toggle_decoration(&decoration_id) {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => store_error_toast(toasts, &err),
            }
        });
    })
}

fn store_error_toast(toasts: &UseReducerHandle<ToastTray>, err: &StoreError) {
    let text = match err {
        StoreError::InsufficientGold { .. } => crate::i18n::t("errors.insufficient_gold"),
        StoreError::FreezeLimitReached => crate::i18n::t("errors.freeze_daily"),
        StoreError::BundleOwned(_) => crate::i18n::t("errors.bundle_owned"),
        StoreError::UnknownBundle(_) | StoreError::UnknownDecoration(_) => {
            crate::i18n::t("errors.unknown_item")
        }
        StoreError::RosterFull => crate::i18n::t("errors.roster_full"),
        StoreError::SkillGate { skill, .. } => crate::i18n::tr(
            "store.skill_req",
            &[("skill", crate::i18n::t(&format!("skills.tree.{skill}.name")))],
        ),
        StoreError::DeskLocked => crate::i18n::t("store.lock_table"),
        StoreError::InvalidDate(_) => crate::i18n::t("errors.invalid_date"),
    };
    toast::error(toasts, text);
}
