use yew::prelude::*;

use crate::components::modal::Modal;
use crate::game::{calculate_rewards, Difficulty, Habit, HabitKind, Skill};
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    /// `None` builds the create form, `Some` pre-fills from the habit.
    #[prop_or_default]
    pub editing: Option<Habit>,
    pub skills: Vec<Skill>,
    pub suggestions: Vec<String>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<(String, HabitKind, Difficulty)>,
    pub on_suggest: Callback<String>,
}

fn kind_options(current: HabitKind) -> Html {
    html! {
        <>
            <option value="good" selected={current == HabitKind::Good}>
                { i18n::t("habits.good") }
            </option>
            <option value="bad" selected={current == HabitKind::Bad}>
                { i18n::t("habits.bad") }
            </option>
        </>
    }
}

fn difficulty_options(current: Difficulty) -> Html {
    let labels = [
        (Difficulty::Easy, "habits.easy"),
        (Difficulty::Medium, "habits.medium"),
        (Difficulty::Hard, "habits.hard"),
    ];
    html! {
        <>
            { for labels.iter().map(|(value, key)| html! {
                <option value={value.as_str()} selected={current == *value}>
                    { i18n::t(key) }
                </option>
            }) }
        </>
    }
}

/// Create/edit form for one habit, with the reward preview and the
/// suggestion row. Mount it fresh per target so the draft state resets.
#[function_component(HabitEditor)]
pub fn habit_editor(props: &Props) -> Html {
    let name = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|habit| habit.name.clone())
            .unwrap_or_default()
    });
    let kind = use_state(|| props.editing.as_ref().map_or(HabitKind::Good, |h| h.kind));
    let difficulty = use_state(|| {
        props
            .editing
            .as_ref()
            .map_or(Difficulty::Easy, |h| h.difficulty)
    });
    let focus_ref = use_node_ref();

    let reward = calculate_rewards(*difficulty, &props.skills, false);
    let effect_line = match *kind {
        HabitKind::Good => format!(
            "+{} HP  +{} XP  +{} Gold",
            reward.hp, reward.xp, reward.gold
        ),
        HabitKind::Bad => format!("-{} HP", reward.hp),
    };

    let on_name_input = {
        let name = name.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: InputEvent| {
                use wasm_bindgen::JsCast;

                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    name.set(input.value());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            Callback::from(|_e: InputEvent| {})
        }
    };

    let on_kind_change = {
        let kind = kind.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                use wasm_bindgen::JsCast;

                if let Some(select) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    if let Ok(parsed) = select.value().parse() {
                        kind.set(parsed);
                    }
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = kind;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                use wasm_bindgen::JsCast;

                if let Some(select) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    if let Ok(parsed) = select.value().parse() {
                        difficulty.set(parsed);
                    }
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = difficulty;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    let on_suggest_click = {
        let cb = props.on_suggest.clone();
        let focus_ref = focus_ref.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |_| {
                let focus = focus_ref
                    .cast::<web_sys::HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                cb.emit(focus);
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (cb, focus_ref);
            Callback::from(|_e: MouseEvent| {})
        }
    };

    let on_save_click = {
        let cb = props.on_save.clone();
        let name = name.clone();
        let kind = kind.clone();
        let difficulty = difficulty.clone();
        Callback::from(move |_| {
            cb.emit(((*name).clone(), *kind, *difficulty));
        })
    };

    html! {
        <Modal
            open={true}
            title={props.title.clone()}
            on_close={props.on_cancel.clone()}
        >
            <form class="habit-editor" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <label class="habit-editor__field">
                    { i18n::t("habits.name_label") }
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </label>
                <div class="habit-editor__suggest">
                    <input
                        type="text"
                        ref={focus_ref.clone()}
                        placeholder={i18n::t("habits.suggest_focus")}
                    />
                    <button type="button" onclick={on_suggest_click}>
                        { i18n::t("habits.suggest") }
                    </button>
                </div>
                { if props.suggestions.is_empty() {
                    Html::default()
                } else {
                    html! {
                        <div class="habit-editor__chips">
                            { for props.suggestions.iter().map(|candidate| {
                                let on_pick = {
                                    let name = name.clone();
                                    let candidate = candidate.clone();
                                    Callback::from(move |_| name.set(candidate.clone()))
                                };
                                html! {
                                    <button type="button" class="habit-editor__chip" onclick={on_pick}>
                                        { candidate.clone() }
                                    </button>
                                }
                            }) }
                        </div>
                    }
                } }
                <label class="habit-editor__field">
                    { i18n::t("habits.kind_label") }
                    <select onchange={on_kind_change}>
                        { kind_options(*kind) }
                    </select>
                </label>
                <label class="habit-editor__field">
                    { i18n::t("habits.difficulty_label") }
                    <select onchange={on_difficulty_change}>
                        { difficulty_options(*difficulty) }
                    </select>
                </label>
                <p class="habit-editor__effect">
                    { format!("{}: {effect_line}", i18n::t("habits.effect")) }
                </p>
                <div class="habit-editor__actions">
                    <button type="button" class="habit-editor__cancel" onclick={
                        let cb = props.on_cancel.clone();
                        Callback::from(move |_| cb.emit(()))
                    }>
                        { i18n::t("habits.cancel") }
                    </button>
                    <button type="button" class="habit-editor__save" onclick={on_save_click}>
                        { i18n::t("habits.save") }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
