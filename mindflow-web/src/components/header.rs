use std::rc::Rc;
use yew::prelude::*;

use crate::game::{GameState, SKILL_TIER_COSTS};
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub on_open_settings: Callback<()>,
    pub on_open_achievements: Callback<()>,
}

fn avatar(level: i32) -> &'static str {
    match level {
        i32::MIN..=4 => "🌱",
        5..=9 => "🛡️",
        _ => "👑",
    }
}

fn bar_pct(value: i64, max: i64) -> i64 {
    (value.max(0) * 100 / max.max(1)).min(100)
}

/// Top status bar: avatar, level, vitals, wallet and dialog shortcuts.
#[function_component(StatusBar)]
pub fn status_bar(props: &Props) -> Html {
    let state = &props.state;
    let hp_pct = bar_pct(i64::from(state.hp), i64::from(state.max_hp));
    let xp_pct = bar_pct(state.xp, state.xp_to_next_level);
    let max_tier = u8::try_from(SKILL_TIER_COSTS.len()).unwrap_or(u8::MAX);
    let all_skills_maxed = state.skills.iter().all(|skill| skill.level >= max_tier);

    let keys_label = if state.perk_points == 0 && all_skills_maxed {
        i18n::t("hud.all_maxed")
    } else {
        format!("{} {}", state.perk_points, i18n::t("hud.keys"))
    };

    let on_settings = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_achievements = {
        let cb = props.on_open_achievements.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="status-bar">
            <div class="status-bar__identity">
                <span class="status-bar__avatar" aria-hidden="true">{ avatar(state.level) }</span>
                <span class="status-bar__level">
                    { i18n::tr("hud.level_display", &[("level", state.level.to_string())]) }
                </span>
                <span class="status-bar__streak" title={i18n::t("stats.day_streak")}>
                    { format!("🔥 {}", state.login_streak) }
                </span>
            </div>
            <div class="status-bar__vitals">
                <div class="meter meter--hp" role="img" aria-label={
                    i18n::tr("hud.hp_bar", &[
                        ("hp", state.hp.to_string()),
                        ("max", state.max_hp.to_string()),
                    ])
                }>
                    <div class="meter__fill" style={format!("width:{hp_pct}%")}></div>
                    <span class="meter__label">
                        { i18n::tr("hud.hp_bar", &[
                            ("hp", state.hp.to_string()),
                            ("max", state.max_hp.to_string()),
                        ]) }
                    </span>
                </div>
                <div class="meter meter--xp" role="img" aria-label={
                    i18n::tr("hud.xp_bar", &[
                        ("xp", state.xp.to_string()),
                        ("next", state.xp_to_next_level.to_string()),
                    ])
                }>
                    <div class="meter__fill" style={format!("width:{xp_pct}%")}></div>
                    <span class="meter__label">
                        { i18n::tr("hud.xp_bar", &[
                            ("xp", state.xp.to_string()),
                            ("next", state.xp_to_next_level.to_string()),
                        ]) }
                    </span>
                </div>
            </div>
            <div class="status-bar__wallet">
                <span class="status-bar__gold">
                    { i18n::tr("hud.gold_display", &[("gold", i18n::fmt_number(state.gold))]) }
                </span>
                <span class="status-bar__keys">{ format!("🗝️ {keys_label}") }</span>
                <button
                    id="open-achievements"
                    type="button"
                    class="status-bar__button"
                    aria-label={i18n::t("achievements.title")}
                    onclick={on_achievements}
                >
                    {"🏆"}
                </button>
                <button
                    id="open-settings"
                    type="button"
                    class="status-bar__button"
                    aria-label={i18n::t("settings.title")}
                    onclick={on_settings}
                >
                    {"⚙️"}
                </button>
            </div>
        </header>
    }
}
