//! Boot sequence and the calendar poll.
//!
//! On mount the save slot is restored (or a fresh game is created) and
//! every missed rollover is replayed before the first real render. A
//! once-a-minute interval then bumps `clock`, and the catch-up effect
//! re-checks the date with handles from the current render, so a tab
//! left open overnight rolls its day without a reload.

use crate::app::state::AppState;
use crate::app::view::{narrate_close, notify_unlock};
use crate::game::{HabitSession, LocalSaveStore};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
const ROLLOVER_POLL_MS: i32 = 60_000;

/// Restores the save, replays missed days and publishes the state.
pub(crate) fn bootstrap_load(state: &AppState) {
    let today = crate::game::today_string();
    let mut session =
        HabitSession::load_or_create(LocalSaveStore, crate::game::seed_from_clock(), &today);
    crate::i18n::set_lang(session.state().language.as_str());
    state.current_language.set(crate::i18n::current_lang());
    match session.advance_to(&today) {
        Ok(outcome) => {
            for close in &outcome.value {
                narrate_close(&state.toasts, close);
            }
            notify_unlock(&state.toasts, outcome.notification);
        }
        Err(err) => log::error!("calendar catch-up failed: {err}"),
    }
    if let Some(err) = session.take_save_error() {
        log::error!("save failed: {err}");
    }
    crate::theme::apply_theme(session.state().inventory.active_theme);
    state.game.set(Some(session.into_state()));
}

/// One calendar re-check. A no-op until the date actually rolls.
pub(crate) fn advance_game(state: &AppState) {
    let Some(current) = (*state.game).clone() else {
        return;
    };
    let today = crate::game::today_string();
    if current.simulated_date == today {
        return;
    }
    let mut session = HabitSession::new(LocalSaveStore, current);
    match session.advance_to(&today) {
        Ok(outcome) => {
            for close in &outcome.value {
                narrate_close(&state.toasts, close);
            }
            notify_unlock(&state.toasts, outcome.notification);
        }
        Err(err) => log::error!("calendar catch-up failed: {err}"),
    }
    if let Some(err) = session.take_save_error() {
        log::error!("save failed: {err}");
    }
    state.game.set(Some(session.into_state()));
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        bootstrap_load(&state);

        let clock = state.clock.clone();
        let tick = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clock.set(js_sys::Date::now());
        });
        let window = crate::dom::window();
        if let Err(err) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::JsCast::unchecked_ref(tick.as_ref()),
            ROLLOVER_POLL_MS,
        ) {
            crate::dom::console_error(&crate::dom::js_error_message(&err));
        }
        tick.forget();
    });
}

/// Re-runs the date check whenever the poll bumps `clock`. Kept apart
/// from the interval closure so each pass reads fresh handles.
#[hook]
pub fn use_catch_up(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with(*app_state.clock, move |_| {
        advance_game(&state);
    });
}
