use std::rc::Rc;
use yew::prelude::*;

use crate::game::{GameState, HabitKind, DECORATIONS};
use crate::i18n;
use crate::pages::difficulty_stars;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub on_trigger: Callback<String>,
}

fn slot_icon(category: &str) -> &'static str {
    match category {
        "wall_base" => "🧱",
        "floor_base" => "🪵",
        "rug" => "🧶",
        "table" => "🪑",
        "chair" => "🛋️",
        "shelf" => "🗄️",
        "board" => "🖼️",
        "pc" => "💻",
        "lamp" => "💡",
        "coffee" => "☕",
        "agenda" => "📒",
        "books" => "📚",
        _ => "▫️",
    }
}

/// Slot order follows the catalog so the room layout is stable.
fn room_categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for def in &DECORATIONS {
        if !seen.contains(&def.category) {
            seen.push(def.category);
        }
    }
    seen
}

/// The room view plus today's quick trigger list.
#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let state = &props.state;
    let today = state.simulated_date.clone();

    let room = html! {
        <div class="room">
            { for room_categories().into_iter().map(|category| {
                match state.inventory.active_decorations.get(category) {
                    Some(item) => {
                        let name = i18n::t(&format!("decor.items.{item}"));
                        html! {
                            <div key={category} class="room__slot room__slot--filled" title={name.clone()}>
                                <span class="room__icon" aria-hidden="true">{ slot_icon(category) }</span>
                                <span class="room__name">{ name }</span>
                            </div>
                        }
                    }
                    None => html! {
                        <div key={category} class="room__slot room__slot--empty">
                            <span class="room__name">{ i18n::t("home.empty_slot") }</span>
                        </div>
                    },
                }
            }) }
        </div>
    };

    let quick_list = if state.habits.is_empty() {
        html! { <p class="page__empty">{ i18n::t("habits.none") }</p> }
    } else {
        html! {
            <ul class="today-list">
                { for state.habits.iter().map(|habit| {
                    let done = state.is_triggered_on(&today, &habit.id);
                    let on_click = {
                        let cb = props.on_trigger.clone();
                        let id = habit.id.clone();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    let icon = match (habit.kind, done) {
                        (HabitKind::Good, true) => "✅",
                        (HabitKind::Good, false) => "⬜",
                        (HabitKind::Bad, true) => "💥",
                        (HabitKind::Bad, false) => "⚠️",
                    };
                    html! {
                        <li
                            key={habit.id.clone()}
                            class={classes!("today-list__row", done.then_some("today-list__row--done"))}
                        >
                            <button type="button" disabled={done} onclick={on_click}>
                                <span aria-hidden="true">{ icon }</span>
                                <span class="today-list__name">{ habit.name.clone() }</span>
                                <span class="today-list__stars">{ difficulty_stars(habit.difficulty) }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <section class="page page--home">
            <h1>{ i18n::t("home.title") }</h1>
            <p class="page__desc">{ i18n::t("home.desc") }</p>
            { room }
            <h2 class="page__subtitle">
                { format!("{} · {}", i18n::t("home.today"), i18n::fmt_date_iso(&today)) }
            </h2>
            { quick_list }
        </section>
    }
}
