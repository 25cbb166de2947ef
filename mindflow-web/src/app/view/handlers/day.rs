use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast::{self, ToastTray};
use crate::game::{AdvanceError, DayCloseSummary, RepairError, ReviveError};
use yew::prelude::*;

pub fn build_revive(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| match session.revive() {
            Ok(outcome) => {
                toast::success(toasts, crate::i18n::t("log.revived"));
                notify_unlock(toasts, outcome.notification);
            }
            Err(ReviveError::NotDefeated) => {
                toast::error(toasts, crate::i18n::t("errors.not_defeated"));
            }
        });
    })
}

pub fn build_repair(state: &AppState) -> Callback<String> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    let show_repair = state.show_repair.clone();
    Callback::from(move |day: String| {
        run_command(&game, &toasts, |session, toasts| {
            match session.repair_day(&day) {
                Ok(outcome) => {
                    toast::success(toasts, crate::i18n::t("log.day-repaired"));
                    notify_unlock(toasts, outcome.notification);
                    show_repair.set(false);
                }
                Err(err) => toast::error(toasts, crate::i18n::t(repair_error_key(&err))),
            }
        });
    })
}

pub fn build_skip_day(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| match session.skip_day() {
            Ok(outcome) => {
                let close = &outcome.value;
                if close.hp_penalty > 0 {
                    toast::error(
                        toasts,
                        crate::i18n::tr(
                            "debug.day_skipped_penalty",
                            &[("hp", close.hp_penalty.to_string())],
                        ),
                    );
                } else {
                    toast::info(toasts, crate::i18n::t("debug.day_skipped"));
                }
                narrate_flags(toasts, close);
                notify_unlock(toasts, outcome.notification);
            }
            Err(AdvanceError::InvalidDate(_)) => {
                toast::error(toasts, crate::i18n::t("errors.invalid_date"));
            }
        });
    })
}

pub fn build_grant_resources(state: &AppState) -> Callback<()> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |()| {
        run_command(&game, &toasts, |session, toasts| {
            let outcome = session.debug_grant_resources();
            if outcome.value > 0 {
                toast::success(toasts, crate::i18n::t("toast.level_up"));
            }
            notify_unlock(toasts, outcome.notification);
        });
    })
}

/// Turns one nightly close into the toasts the player wakes up to.
pub(crate) fn narrate_close(toasts: &UseReducerHandle<ToastTray>, close: &DayCloseSummary) {
    if close.hp_penalty > 0 {
        let gold_lost = close.gold_penalty + close.bundle_penalty;
        toast::error(
            toasts,
            crate::i18n::tr(
                "toast.day_penalty",
                &[
                    ("hp", crate::i18n::fmt_number(i64::from(close.hp_penalty))),
                    ("gold", crate::i18n::fmt_number(gold_lost)),
                ],
            ),
        );
    } else {
        let reward = close.streak_reward + close.avoided_bonus;
        if reward > 0 {
            toast::success(
                toasts,
                crate::i18n::tr("toast.day_reward", &[("gold", crate::i18n::fmt_number(reward))]),
            );
        }
    }
    narrate_flags(toasts, close);
}

pub(crate) fn narrate_flags(toasts: &UseReducerHandle<ToastTray>, close: &DayCloseSummary) {
    if close.freeze_consumed {
        toast::info(toasts, crate::i18n::t("toast.freeze_used"));
    }
    if close.streak_lost {
        toast::error(toasts, crate::i18n::t("toast.streak_reset"));
    }
}

const fn repair_error_key(err: &RepairError) -> &'static str {
    match err {
        RepairError::NoFreezeCharges => "errors.no_freeze",
        RepairError::InvalidDate(_) => "errors.invalid_date",
        RepairError::NotInPast => "errors.not_in_past",
    }
}
