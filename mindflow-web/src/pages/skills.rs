use std::rc::Rc;
use yew::prelude::*;

use crate::game::{
    career_xp_percent, financial_gold_percent, max_hp_for, social_discount_percent, GameState,
    SkillId, SKILL_TIER_COSTS,
};
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub on_upgrade: Callback<SkillId>,
}

fn bonus_line(state: &GameState, skill: SkillId, level: u8) -> Option<String> {
    if level == 0 {
        return None;
    }
    match skill {
        SkillId::S1 => {
            let extra = max_hp_for(level) - max_hp_for(0);
            Some(i18n::tr("skills.bonus_hp", &[("hp", extra.to_string())]))
        }
        SkillId::S3 => Some(i18n::tr(
            "skills.bonus_discount",
            &[("pct", social_discount_percent(state).to_string())],
        )),
        SkillId::S4 => Some(i18n::tr(
            "skills.bonus_xp",
            &[("pct", career_xp_percent(level).to_string())],
        )),
        SkillId::S6 => Some(i18n::tr(
            "skills.bonus_gold",
            &[("pct", financial_gold_percent(level).to_string())],
        )),
        SkillId::S2 | SkillId::S5 => None,
    }
}

/// The six skill branches with tier names, bonuses and upgrade buttons.
#[function_component(SkillsPage)]
pub fn skills_page(props: &Props) -> Html {
    let state = &props.state;
    let max_tier = u8::try_from(SKILL_TIER_COSTS.len()).unwrap_or(u8::MAX);

    html! {
        <section class="page page--skills">
            <div class="page__heading">
                <h1>{ i18n::t("skills.title") }</h1>
                <span class="skills__keys">{ format!("🗝️ x{}", state.perk_points) }</span>
            </div>
            <p class="page__desc">{ i18n::t("skills.desc") }</p>
            <div class="skills-grid">
                { for state.skills.iter().map(|skill| {
                    let id = skill.id;
                    let level = skill.level;
                    let maxed = level >= max_tier;
                    let cost = SKILL_TIER_COSTS
                        .get(usize::from(level))
                        .copied()
                        .unwrap_or(0);
                    let on_click = {
                        let cb = props.on_upgrade.clone();
                        Callback::from(move |_| cb.emit(id))
                    };

                    let current_tier = level.checked_sub(1).map(|tier| {
                        i18n::t(&format!("skills.tree.{id}.levels.{tier}"))
                    });
                    let next_tier = (!maxed).then(|| {
                        i18n::t(&format!("skills.tree.{id}.levels.{level}"))
                    });

                    html! {
                        <div key={id.as_str()} class="skill-card">
                            <h2>{ i18n::t(&format!("skills.tree.{id}.name")) }</h2>
                            <div class="skill-card__pips" aria-label={format!("{level}/{max_tier}")}>
                                { for (0..max_tier).map(|tier| html! {
                                    <span class={classes!("pip", (tier < level).then_some("pip--filled"))}></span>
                                }) }
                            </div>
                            { current_tier.map(|name| html! {
                                <p class="skill-card__tier">{ name }</p>
                            }).unwrap_or_default() }
                            { bonus_line(state, id, level).map(|line| html! {
                                <p class="skill-card__bonus">{ line }</p>
                            }).unwrap_or_default() }
                            { if maxed {
                                html! { <span class="skill-card__maxed">{ i18n::t("skills.maxed") }</span> }
                            } else {
                                html! {
                                    <button
                                        type="button"
                                        class="skill-card__upgrade"
                                        disabled={state.perk_points < i32::from(cost)}
                                        onclick={on_click}
                                    >
                                        { next_tier.map(|name| format!(
                                            "{} · {name} (🗝️ x{cost})",
                                            i18n::t("skills.upgrade"),
                                        )).unwrap_or_default() }
                                    </button>
                                }
                            } }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
