use crate::components::toast::ToastTray;
use crate::game::GameState;
use yew::prelude::*;

/// Every hook-backed handle the view layer reads or writes. `game` is
/// `None` until the bootstrap effect restores (or creates) a save.
#[derive(Clone)]
pub struct AppState {
    pub game: UseStateHandle<Option<GameState>>,
    pub toasts: UseReducerHandle<ToastTray>,
    pub suggestions: UseStateHandle<Vec<String>>,
    pub show_settings: UseStateHandle<bool>,
    pub show_achievements: UseStateHandle<bool>,
    pub show_repair: UseStateHandle<bool>,
    pub show_debug: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
    /// Last wall-clock tick of the rollover poll. Bumping it re-runs
    /// the catch-up effect with fresh handles.
    pub clock: UseStateHandle<f64>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        game: use_state(|| None::<GameState>),
        toasts: use_reducer(ToastTray::default),
        suggestions: use_state(Vec::<String>::new),
        show_settings: use_state(|| false),
        show_achievements: use_state(|| false),
        show_repair: use_state(|| false),
        show_debug: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
        clock: use_state(|| 0.0_f64),
    }
}
