use std::rc::Rc;
use yew::prelude::*;

use crate::game::numbers::i64_to_f64;
use crate::game::{
    activity_series, avoidance_days, distribution, habit_streak, next_streak_reward,
    ActivityWindow, GameState, HabitKind,
};
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub on_open_repair: Callback<()>,
}

/// Streak, activity chart, distribution and per-habit streak list.
#[function_component(StatsPage)]
pub fn stats_page(props: &Props) -> Html {
    let window = use_state(ActivityWindow::default);
    let state = &props.state;

    let on_open_repair = {
        let cb = props.on_open_repair.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let streak_card = html! {
        <div class="stats-card stats-card--streak">
            <h2>{ i18n::t("stats.streak_title") }</h2>
            <p class="stats-card__big">{ format!("🔥 {}", state.login_streak) }</p>
            <p>{ i18n::t("stats.day_streak") }</p>
            <p class="stats-card__reward">
                { format!(
                    "{}: {}",
                    i18n::t("stats.next_reward"),
                    i18n::tr("stats.next_reward_value", &[
                        ("gold", next_streak_reward(state).to_string()),
                    ]),
                ) }
            </p>
            <button
                id="open-repair"
                type="button"
                class="stats-card__repair"
                onclick={on_open_repair}
            >
                { i18n::t("repair.title") }
            </button>
        </div>
    };

    let active_window = *window;
    let series = activity_series(state, active_window);
    let peak = series
        .iter()
        .map(|point| point.net.abs())
        .max()
        .unwrap_or(0)
        .max(1);
    let chart = html! {
        <div class="stats-card stats-card--activity">
            <h2>{ i18n::t("stats.activity") }</h2>
            <div class="stats-card__toggle" role="tablist">
                { for [(ActivityWindow::Week, "stats.week"), (ActivityWindow::Month, "stats.month")]
                    .iter()
                    .map(|(candidate, key)| {
                        let selected = *candidate == active_window;
                        let on_click = {
                            let window = window.clone();
                            let candidate = *candidate;
                            Callback::from(move |_| window.set(candidate))
                        };
                        html! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected={if selected { "true" } else { "false" }}
                                class={classes!("stats-toggle", selected.then_some("stats-toggle--active"))}
                                onclick={on_click}
                            >
                                { i18n::t(key) }
                            </button>
                        }
                    }) }
            </div>
            <div class="chart">
                { for series.iter().map(|point| {
                    let height = (point.net.abs() * 100 / peak).max(4);
                    html! {
                        <div key={point.day.clone()} class="chart__col" title={format!("{}: {}", point.day, point.net)}>
                            <div
                                class={classes!("chart__bar", (point.net < 0).then_some("chart__bar--negative"))}
                                style={format!("height:{height}%")}
                            ></div>
                            { if active_window == ActivityWindow::Week {
                                html! {
                                    <span class="chart__label">{ i18n::fmt_weekday_short(&point.day) }</span>
                                }
                            } else {
                                Html::default()
                            } }
                        </div>
                    }
                }) }
            </div>
        </div>
    };

    let shares = distribution(state);
    let total = shares.total();
    let good_ratio = if total == 0 {
        0.0
    } else {
        i64_to_f64(i64::try_from(shares.good).unwrap_or(0))
            / i64_to_f64(i64::try_from(total).unwrap_or(1))
    };
    let distribution_card = html! {
        <div class="stats-card stats-card--distribution">
            <h2>{ i18n::t("stats.distribution") }</h2>
            { if total == 0 {
                html! { <p class="page__empty">{ i18n::t("stats.none") }</p> }
            } else {
                html! {
                    <>
                        <div class="split-bar">
                            <div class="split-bar__good" style={format!("width:{:.0}%", good_ratio * 100.0)}></div>
                        </div>
                        <p>
                            { format!(
                                "{}: {} ({})  {}: {}",
                                i18n::t("stats.good"),
                                shares.good,
                                i18n::fmt_pct(good_ratio),
                                i18n::t("stats.bad"),
                                shares.bad,
                            ) }
                        </p>
                    </>
                }
            } }
        </div>
    };

    let streak_list = html! {
        <div class="stats-card stats-card--streaks">
            <h2>{ i18n::t("stats.streaks") }</h2>
            { if state.habits.is_empty() {
                html! { <p class="page__empty">{ i18n::t("stats.none") }</p> }
            } else {
                html! {
                    <ul class="streak-list">
                        { for state.habits.iter().map(|habit| {
                            let badge = match habit.kind {
                                HabitKind::Good => format!("🔥 {}", habit_streak(state, &habit.id)),
                                HabitKind::Bad => format!("🛡️ {}", avoidance_days(state, &habit.id)),
                            };
                            html! {
                                <li key={habit.id.clone()}>
                                    <span>{ habit.name.clone() }</span>
                                    <span>{ badge }</span>
                                </li>
                            }
                        }) }
                    </ul>
                }
            } }
        </div>
    };

    html! {
        <section class="page page--stats">
            <h1>{ i18n::t("stats.title") }</h1>
            <p class="page__desc">{ i18n::t("stats.desc") }</p>
            { streak_card }
            { chart }
            { distribution_card }
            { streak_list }
        </section>
    }
}
