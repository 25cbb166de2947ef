use futures::executor::block_on;
use mindflow_web::game::{catalog, GameState, Language, HABIT_ROSTER_MAX};
use mindflow_web::pages::{
    habits::{HabitsPage, Props as HabitsProps},
    home::{HomePage, Props as HomeProps},
    not_found::{NotFound, Props as NotFoundProps},
    skills::{SkillsPage, Props as SkillsProps},
    stats::{StatsPage, Props as StatsProps},
    store::{StorePage, Props as StoreProps},
};
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn base_state() -> GameState {
    let mut state = GameState::new_game(7, "2024-03-05");
    state.language = Language::En;
    state.habits = catalog::seed_habits(Language::En);
    state
}

#[test]
fn home_page_renders_room_and_quick_list() {
    mindflow_web::i18n::set_lang("en");
    let props = HomeProps {
        state: Rc::new(base_state()),
        on_trigger: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("My Home"));
    assert!(html.contains("Use Mind&#39;N Flow") || html.contains("Use Mind'N Flow"));
    assert!(html.contains("Empty"));
    assert!(html.contains("2024-03-05"));
}

#[test]
fn home_page_shows_equipped_decorations() {
    mindflow_web::i18n::set_lang("en");
    let mut state = base_state();
    state
        .inventory
        .owned_decorations
        .push(String::from("DEK001"));
    state
        .inventory
        .active_decorations
        .insert(String::from("wall_base"), String::from("DEK001"));
    let props = HomeProps {
        state: Rc::new(state),
        on_trigger: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Solid Color Wall"));
}

#[test]
fn habits_page_renders_roster_groups() {
    mindflow_web::i18n::set_lang("en");
    let props = HabitsProps {
        state: Rc::new(base_state()),
        suggestions: Vec::new(),
        on_trigger: Callback::noop(),
        on_create: Callback::noop(),
        on_update: Callback::noop(),
        on_delete: Callback::noop(),
        on_suggest: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HabitsPage>::with_props(props).render());
    assert!(html.contains("Tracker List"));
    assert!(html.contains("Basic Habits"));
    assert!(html.contains("New Habit"));
    assert!(html.contains("Procrastinate"));
}

#[test]
fn habits_page_caps_the_new_button_at_the_roster_limit() {
    mindflow_web::i18n::set_lang("en");
    let mut state = base_state();
    while state.habits.len() < HABIT_ROSTER_MAX {
        let n = state.habits.len();
        state
            .add_habit(
                &format!("Extra {n}"),
                mindflow_web::game::HabitKind::Good,
                mindflow_web::game::Difficulty::Easy,
            )
            .expect("roster has room");
    }
    let props = HabitsProps {
        state: Rc::new(state),
        suggestions: Vec::new(),
        on_trigger: Callback::noop(),
        on_create: Callback::noop(),
        on_update: Callback::noop(),
        on_delete: Callback::noop(),
        on_suggest: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HabitsPage>::with_props(props).render());
    assert!(html.contains("Habit limit reached"));
}

#[test]
fn skills_page_renders_the_tree() {
    mindflow_web::i18n::set_lang("en");
    let mut state = base_state();
    state.perk_points = 2;
    let props = SkillsProps {
        state: Rc::new(state),
        on_upgrade: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SkillsPage>::with_props(props).render());
    assert!(html.contains("Skill Tree"));
    assert!(html.contains("Physical"));
    assert!(html.contains("Financial"));
    assert!(html.contains("Upgrade"));
    assert!(html.contains("🗝️ x2"));
}

#[test]
fn store_page_opens_on_the_bundles_tab() {
    mindflow_web::i18n::set_lang("en");
    let props = StoreProps {
        state: Rc::new(base_state()),
        on_buy_booster: Callback::noop(),
        on_buy_freeze: Callback::noop(),
        on_buy_potion: Callback::noop(),
        on_buy_bundle: Callback::noop(),
        on_decoration: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<StorePage>::with_props(props).render());
    assert!(html.contains("Bundles"));
    assert!(html.contains("Dopamine Detox"));
    assert!(html.contains("Explorer"));
}

#[test]
fn stats_page_renders_streak_chart_and_distribution() {
    mindflow_web::i18n::set_lang("en");
    let mut state = base_state();
    state.login_streak = 3;
    state
        .history
        .insert(String::from("2024-03-03"), vec![String::from("h1")]);
    state.history.insert(
        String::from("2024-03-04"),
        vec![String::from("h1"), String::from("h3")],
    );
    let props = StatsProps {
        state: Rc::new(state),
        on_open_repair: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<StatsPage>::with_props(props).render());
    assert!(html.contains("Analytics Panel"));
    assert!(html.contains("Daily Streak"));
    assert!(html.contains("Distribution"));
    assert!(html.contains("Streak Status"));
}

#[test]
fn not_found_page_offers_the_way_home() {
    mindflow_web::i18n::set_lang("en");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("404"));
    assert!(html.contains("Back home"));
}
