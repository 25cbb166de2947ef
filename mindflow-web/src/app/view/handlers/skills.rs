use crate::app::state::AppState;
use crate::app::view::handlers::{notify_unlock, run_command};
use crate::components::toast;
use crate::game::{SkillError, SkillId};
use yew::prelude::*;

pub fn build_upgrade_skill(state: &AppState) -> Callback<SkillId> {
    let game = state.game.clone();
    let toasts = state.toasts.clone();
    Callback::from(move |id: SkillId| {
        run_command(&game, &toasts, |session, toasts| {
            match session.upgrade_skill(id) {
                Ok(outcome) => notify_unlock(toasts, outcome.notification),
                Err(err) => toast::error(toasts, crate::i18n::t(skill_error_key(&err))),
            }
        });
    })
}

const fn skill_error_key(err: &SkillError) -> &'static str {
    match err {
        SkillError::MaxedOut => "errors.skill_maxed",
        SkillError::NotEnoughPerkPoints { .. } => "errors.no_keys",
    }
}
