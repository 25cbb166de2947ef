use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use mindflow_game::save::{self, SaveError};
use mindflow_game::{
    AchievementId, Difficulty, GameState, GameStorage, HabitKind, HabitSession, SkillId,
    CURRENT_SAVE_VERSION,
};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct MemoryStore {
    slot: Rc<RefCell<Option<GameState>>>,
}

impl GameStorage for MemoryStore {
    type Error = Infallible;

    fn save_game(&self, state: &GameState) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
        Ok(self.slot.borrow().clone())
    }

    fn delete_save(&self) -> Result<(), Self::Error> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).expect("save blob is json")
}

#[test]
fn wire_fields_stay_stable() {
    let state = GameState::new_game(3, "2024-03-05");
    let value = parse(&save::encode(&state).expect("encode"));
    let map = value.as_object().expect("save is an object");
    for key in [
        "save_version",
        "seed",
        "hp",
        "max_hp",
        "xp",
        "xp_to_next_level",
        "level",
        "perk_points",
        "gold",
        "habits",
        "skills",
        "history",
        "inventory",
        "login_streak",
        "simulated_date",
        "last_login_date",
        "unlocked_achievements",
        "language",
        "logo_clicks",
        "habit_seq",
        "logs",
    ] {
        assert!(map.contains_key(key), "missing field {key}");
    }
    assert_eq!(map.len(), 21, "unexpected extra fields");
    // The flavor rng never leaves the process.
    assert!(map.get("rng").is_none());

    assert_eq!(value["save_version"], json!(CURRENT_SAVE_VERSION));
    assert_eq!(value["hp"], json!(100));
    assert_eq!(value["gold"], json!(50));
    assert_eq!(value["level"], json!(1));
    assert_eq!(value["login_streak"], json!(1));
    assert_eq!(value["language"], json!("tr"));
    assert_eq!(value["simulated_date"], json!("2024-03-05"));
    assert_eq!(value["habit_seq"], json!(4));
    assert_eq!(
        value["habits"][0],
        json!({
            "id": "h1",
            "name": "Mind'N Flow kullan",
            "kind": "good",
            "difficulty": "easy",
            "template_id": null
        })
    );
    assert_eq!(value["skills"][0], json!({"id": "s1", "level": 0}));

    let inventory = value["inventory"].as_object().expect("inventory object");
    for key in [
        "booster_charges",
        "booster_bought",
        "booster_used",
        "freeze_charges",
        "freeze_bought",
        "last_freeze_date",
        "purchased_templates",
        "template_expiry",
        "owned_decorations",
        "active_decorations",
        "owned_themes",
        "active_theme",
    ] {
        assert!(inventory.contains_key(key), "missing inventory field {key}");
    }
    assert_eq!(inventory.len(), 12);
    assert_eq!(value["inventory"]["active_theme"], json!("cozy"));
    assert_eq!(
        value["inventory"]["owned_themes"],
        json!(["cozy", "dark", "minimal"])
    );
}

#[test]
fn enums_travel_in_snake_case() {
    let mut session = HabitSession::load_or_create(MemoryStore::default(), 8, "2024-03-05");
    let added = session
        .add_habit("Skip the gym", HabitKind::Bad, Difficulty::Easy)
        .expect("add");
    assert_eq!(added.notification, Some(AchievementId::Symmetry));

    let value = parse(&session.export().expect("export"));
    assert_eq!(
        value["unlocked_achievements"],
        json!(["first_step", "symmetry"])
    );
    assert_eq!(value["habits"][3]["kind"], json!("bad"));
    assert_eq!(value["habits"][3]["difficulty"], json!("easy"));
    let ids: Vec<&str> = value["skills"]
        .as_array()
        .expect("skills array")
        .iter()
        .map(|skill| skill["id"].as_str().expect("skill id"))
        .collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s5", "s6"]);
}

const V0_BLOB: &str = r#"{
    "seed": 9,
    "hp": 77,
    "max_hp": 100,
    "xp": 12,
    "xp_to_next_level": 999,
    "level": 3,
    "gold": 180,
    "habits": [
        {"id": "h9", "name": "Water the plants", "kind": "good", "difficulty": "medium"}
    ],
    "skills": [{"id": "s4", "level": 1}],
    "logs": [],
    "login_streak": 0,
    "simulated_date": "later"
}"#;

#[test]
fn old_saves_are_lifted_on_import() {
    let mut session = HabitSession::load_or_create(MemoryStore::default(), 1, "2024-03-05");
    let outcome = session.import(V0_BLOB).expect("import");
    assert_eq!(outcome.notification, None);

    let state = session.state();
    assert_eq!(state.save_version, CURRENT_SAVE_VERSION);
    assert_eq!(state.skills.len(), 6, "missing branches are backfilled");
    assert_eq!(state.skill_level(SkillId::S4), 1);
    assert_eq!(state.habit_seq, 10, "sequence resumes past the highest id");
    assert_eq!(state.login_streak, 1);
    assert_eq!(state.simulated_date, "2024-01-01");
    // Derived numbers are recomputed, never trusted from the blob.
    assert_eq!(state.xp_to_next_level, 50);
    assert_eq!(state.hp, 77);
    assert_eq!(state.max_hp, 100);
}

#[test]
fn rejected_imports_leave_the_game_alone() {
    let mut session = HabitSession::load_or_create(MemoryStore::default(), 2, "2024-03-05");
    session.trigger_habit("h1").expect("trigger");
    let before = session.export().expect("export");

    assert_eq!(
        session.import(r#"{"gold": 5}"#),
        Err(SaveError::MissingVitals)
    );
    assert_eq!(
        session.import(r#"{"hp": "full", "gold": 5}"#),
        Err(SaveError::MissingVitals)
    );
    assert!(matches!(
        session.import("definitely not json"),
        Err(SaveError::Malformed(_))
    ));
    assert_eq!(session.export().expect("export"), before);
}
