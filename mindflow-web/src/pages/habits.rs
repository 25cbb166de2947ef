use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::habit_editor::HabitEditor;
use crate::game::{
    avoidance_days, bundle_days_left, completion_dots, habit_streak, Difficulty, GameState, Habit,
    HabitKind, HABIT_ROSTER_MAX, HABIT_ROSTER_MIN,
};
use crate::i18n;
use crate::pages::difficulty_stars;

#[derive(Clone, PartialEq, Eq)]
enum EditorTarget {
    Create,
    Edit(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub suggestions: Vec<String>,
    pub on_trigger: Callback<String>,
    pub on_create: Callback<(String, HabitKind, Difficulty)>,
    pub on_update: Callback<(String, String, HabitKind, Difficulty)>,
    pub on_delete: Callback<String>,
    pub on_suggest: Callback<String>,
}

struct RowCallbacks<'a> {
    on_trigger: &'a Callback<String>,
    on_edit: &'a Callback<String>,
    on_delete: &'a Callback<String>,
}

fn habit_row(state: &GameState, habit: &Habit, callbacks: &RowCallbacks<'_>) -> Html {
    let today = state.simulated_date.as_str();
    let done = state.is_triggered_on(today, &habit.id);
    let locked = habit.template_id.is_some();
    let at_minimum = state.habits.len() <= HABIT_ROSTER_MIN;

    let on_trigger = {
        let cb = callbacks.on_trigger.clone();
        let id = habit.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let on_edit = {
        let cb = callbacks.on_edit.clone();
        let id = habit.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let on_delete = {
        let cb = callbacks.on_delete.clone();
        let id = habit.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let streak_badge = match habit.kind {
        HabitKind::Good => format!("🔥 {}", habit_streak(state, &habit.id)),
        HabitKind::Bad => format!("🛡️ {}", avoidance_days(state, &habit.id)),
    };
    let trigger_icon = match (habit.kind, done) {
        (HabitKind::Good, true) => "✅",
        (HabitKind::Good, false) => "⬜",
        (HabitKind::Bad, true) => "💥",
        (HabitKind::Bad, false) => "⚠️",
    };

    html! {
        <li
            key={habit.id.clone()}
            class={classes!("habit-row", done.then_some("habit-row--done"))}
        >
            <button
                type="button"
                class="habit-row__trigger"
                disabled={done}
                onclick={on_trigger}
            >
                <span aria-hidden="true">{ trigger_icon }</span>
            </button>
            <div class="habit-row__body">
                <span class="habit-row__name">{ habit.name.clone() }</span>
                <span class="habit-row__meta">
                    { format!("{} {streak_badge}", difficulty_stars(habit.difficulty)) }
                </span>
                <span class="habit-row__dots">
                    { for completion_dots(state, &habit.id).into_iter().map(|mark| html! {
                        <span
                            key={mark.day.clone()}
                            class={classes!("dot", mark.done.then_some("dot--done"))}
                            title={mark.day.clone()}
                        ></span>
                    }) }
                </span>
            </div>
            { if locked {
                html! { <span class="habit-row__locked">{ i18n::t("habits.locked_hint") }</span> }
            } else {
                html! {
                    <div class="habit-row__actions">
                        <button type="button" aria-label="Edit" onclick={on_edit}>
                            {"✏️"}
                        </button>
                        <button
                            type="button"
                            aria-label="Delete"
                            disabled={at_minimum}
                            onclick={on_delete}
                        >
                            {"🗑️"}
                        </button>
                    </div>
                }
            } }
        </li>
    }
}

/// The tracker list: basic habits, bundle groups with their countdowns,
/// and the create/edit modal.
#[function_component(HabitsPage)]
pub fn habits_page(props: &Props) -> Html {
    let editing: UseStateHandle<Option<EditorTarget>> = use_state(|| None);
    let state = &props.state;

    let mut basics: Vec<&Habit> = Vec::new();
    let mut packs: BTreeMap<&str, Vec<&Habit>> = BTreeMap::new();
    for habit in &state.habits {
        match habit.template_id.as_deref() {
            Some(pack) => packs.entry(pack).or_default().push(habit),
            None => basics.push(habit),
        }
    }

    let on_edit_row = {
        let editing = editing.clone();
        Callback::from(move |id: String| editing.set(Some(EditorTarget::Edit(id))))
    };
    let callbacks = RowCallbacks {
        on_trigger: &props.on_trigger,
        on_edit: &on_edit_row,
        on_delete: &props.on_delete,
    };

    let roster_full = state.habits.len() >= HABIT_ROSTER_MAX;
    let on_new = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(Some(EditorTarget::Create)))
    };

    let editor = match &*editing {
        None => Html::default(),
        Some(EditorTarget::Create) => {
            let on_save = {
                let cb = props.on_create.clone();
                let editing = editing.clone();
                Callback::from(move |(name, kind, difficulty): (String, HabitKind, Difficulty)| {
                    if name.trim().is_empty() {
                        return;
                    }
                    cb.emit((name, kind, difficulty));
                    editing.set(None);
                })
            };
            let on_cancel = {
                let editing = editing.clone();
                Callback::from(move |()| editing.set(None))
            };
            html! {
                <HabitEditor
                    title={i18n::t("habits.create_title")}
                    skills={state.skills.clone()}
                    suggestions={props.suggestions.clone()}
                    on_cancel={on_cancel}
                    on_save={on_save}
                    on_suggest={props.on_suggest.clone()}
                />
            }
        }
        Some(EditorTarget::Edit(id)) => match state.habit(id) {
            None => Html::default(),
            Some(habit) => {
                let on_save = {
                    let cb = props.on_update.clone();
                    let editing = editing.clone();
                    let id = id.clone();
                    Callback::from(
                        move |(name, kind, difficulty): (String, HabitKind, Difficulty)| {
                            if name.trim().is_empty() {
                                return;
                            }
                            cb.emit((id.clone(), name, kind, difficulty));
                            editing.set(None);
                        },
                    )
                };
                let on_cancel = {
                    let editing = editing.clone();
                    Callback::from(move |()| editing.set(None))
                };
                html! {
                    <HabitEditor
                        key={id.clone()}
                        title={i18n::t("habits.edit_title")}
                        editing={habit.clone()}
                        skills={state.skills.clone()}
                        suggestions={props.suggestions.clone()}
                        on_cancel={on_cancel}
                        on_save={on_save}
                        on_suggest={props.on_suggest.clone()}
                    />
                }
            }
        },
    };

    let pack_sections = packs.iter().map(|(pack, habits)| {
        let title = i18n::t(&format!("store.pack.{pack}.name"));
        let countdown = match bundle_days_left(state, pack) {
            Some(0) => Some(i18n::t("habits.today_ends")),
            Some(days) if days > 0 => Some(i18n::tr(
                "habits.days_left",
                &[("days", days.to_string())],
            )),
            _ => None,
        };
        html! {
            <section key={*pack} class="habit-group habit-group--pack">
                <h2>
                    { title }
                    { countdown.map(|text| html! {
                        <span class="habit-group__countdown">{ text }</span>
                    }).unwrap_or_default() }
                </h2>
                <ul class="habit-group__list">
                    { for habits.iter().map(|habit| habit_row(state, habit, &callbacks)) }
                </ul>
            </section>
        }
    });

    html! {
        <section class="page page--habits">
            <div class="page__heading">
                <h1>{ i18n::t("habits.list_title") }</h1>
                <button
                    type="button"
                    class="habits__new"
                    disabled={roster_full}
                    title={roster_full.then(|| i18n::t("errors.roster_full"))}
                    onclick={on_new}
                >
                    { format!("+ {}", i18n::t("habits.new")) }
                </button>
            </div>
            { if state.habits.is_empty() {
                html! { <p class="page__empty">{ i18n::t("habits.none") }</p> }
            } else {
                html! {
                    <>
                        <section class="habit-group">
                            <h2>{ i18n::t("habits.basic_group") }</h2>
                            <ul class="habit-group__list">
                                { for basics.iter().map(|habit| habit_row(state, habit, &callbacks)) }
                            </ul>
                        </section>
                        { for pack_sections }
                    </>
                }
            } }
            { editor }
        </section>
    }
}
