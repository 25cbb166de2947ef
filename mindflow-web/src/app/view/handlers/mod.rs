mod day;
mod habits;
mod prefs;
mod skills;
mod storage;
mod store;

use crate::app::state::AppState;
use crate::components::toast::{self, ToastTray};
use crate::game::{
    AchievementId, Difficulty, GameState, HabitKind, HabitSession, LocalSaveStore, SkillId,
    ThemeId,
};
use yew::prelude::*;

pub use day::{build_grant_resources, build_repair, build_revive, build_skip_day};
pub use habits::{
    build_create_habit, build_delete_habit, build_suggest, build_trigger, build_update_habit,
};
pub use prefs::{build_dev_click, build_lang_change, build_theme_change};
pub use skills::build_upgrade_skill;
pub use storage::{build_export_save, build_import_save, build_reset};
pub use store::{
    build_buy_booster, build_buy_bundle, build_buy_freeze, build_buy_potion, build_decoration,
};

pub(crate) use day::narrate_close;

/// One callback per player action the view can raise.
#[derive(Clone)]
pub struct AppHandlers {
    pub trigger: Callback<String>,
    pub create_habit: Callback<(String, HabitKind, Difficulty)>,
    pub update_habit: Callback<(String, String, HabitKind, Difficulty)>,
    pub delete_habit: Callback<String>,
    pub suggest: Callback<String>,
    pub revive: Callback<()>,
    pub repair: Callback<String>,
    pub skip_day: Callback<()>,
    pub grant_resources: Callback<()>,
    pub buy_booster: Callback<()>,
    pub buy_freeze: Callback<()>,
    pub buy_potion: Callback<()>,
    pub buy_bundle: Callback<String>,
    pub decoration: Callback<String>,
    pub upgrade_skill: Callback<SkillId>,
    pub lang_change: Callback<String>,
    pub theme_change: Callback<ThemeId>,
    pub dev_click: Callback<()>,
    pub export_save: Callback<()>,
    pub import_save: Callback<String>,
    pub reset: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            trigger: build_trigger(state),
            create_habit: build_create_habit(state),
            update_habit: build_update_habit(state),
            delete_habit: build_delete_habit(state),
            suggest: build_suggest(state),
            revive: build_revive(state),
            repair: build_repair(state),
            skip_day: build_skip_day(state),
            grant_resources: build_grant_resources(state),
            buy_booster: build_buy_booster(state),
            buy_freeze: build_buy_freeze(state),
            buy_potion: build_buy_potion(state),
            buy_bundle: build_buy_bundle(state),
            decoration: build_decoration(state),
            upgrade_skill: build_upgrade_skill(state),
            lang_change: build_lang_change(state),
            theme_change: build_theme_change(state),
            dev_click: build_dev_click(state),
            export_save: build_export_save(state),
            import_save: build_import_save(state),
            reset: build_reset(state),
        }
    }
}

/// Clones the current state into a one-command session, runs the
/// command, and writes the result back. Handlers built this way stay
/// correct even when the callback itself is long-lived, because the
/// handle is re-read on every invocation.
pub(crate) fn run_command<F>(
    game: &UseStateHandle<Option<GameState>>,
    toasts: &UseReducerHandle<ToastTray>,
    command: F,
) where
    F: FnOnce(&mut HabitSession<LocalSaveStore>, &UseReducerHandle<ToastTray>),
{
    let Some(current) = (**game).clone() else {
        return;
    };
    let mut session = HabitSession::new(LocalSaveStore, current);
    command(&mut session, toasts);
    if let Some(err) = session.take_save_error() {
        log::error!("save failed: {err}");
    }
    game.set(Some(session.into_state()));
}

pub(crate) fn notify_unlock(toasts: &UseReducerHandle<ToastTray>, unlock: Option<AchievementId>) {
    if let Some(id) = unlock {
        let name = crate::i18n::t(&format!("achievements.list.{id}.name"));
        toast::success(
            toasts,
            format!("{} {name}", crate::i18n::t("achievements.toast")),
        );
    }
}
