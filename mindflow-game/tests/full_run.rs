use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use mindflow_game::save;
use mindflow_game::{
    Difficulty, GameState, GameStorage, HabitKind, HabitSession, SkillId, TriggerError,
    CURRENT_SAVE_VERSION,
};

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

fn good_ids(state: &GameState) -> Vec<String> {
    state.good_habits().map(|h| h.id.clone()).collect()
}

fn trigger_all_good(session: &mut HabitSession<MemoryStore>) {
    for id in good_ids(session.state()) {
        match session.trigger_habit(&id) {
            Ok(_) | Err(TriggerError::AlreadyTriggered) => {}
            Err(err) => panic!("trigger {id}: {err}"),
        }
    }
}

/// A disciplined March followed by a slump, a revive and a fresh start,
/// all through the session so every step persists and scans.
#[test]
fn month_of_play_exercises_core_systems() {
    let storage = MemoryStore::default();
    let mut session = HabitSession::load_or_create(storage.clone(), 0xBEEF, "2024-03-01");
    run_disciplined_month(&mut session);
    validate_month(&session, &storage);
    run_slump_and_revive(&mut session);
    run_transfer_and_reset(&mut session, &storage);
}

fn run_disciplined_month(session: &mut HabitSession<MemoryStore>) {
    session
        .add_habit("Evening journal", HabitKind::Good, Difficulty::Easy)
        .expect("add habit");

    for day in 0..30 {
        trigger_all_good(session);

        // Spend the growing wallet the way a player would.
        if day == 6 {
            session.buy_booster().expect("booster");
        }
        if day == 12 {
            session.buy_freeze().expect("freeze");
        }
        if day == 20 {
            let outcome = session.buy_potion().expect("potion");
            assert!(outcome.value.xp_gained > 0);
        }
        while session.state().perk_points > 0 {
            let target = [SkillId::S1, SkillId::S4, SkillId::S6, SkillId::S3]
                [day % 4];
            if session.upgrade_skill(target).is_err() {
                break;
            }
        }

        let close = session.skip_day().expect("rollover");
        assert_eq!(close.value.hp_penalty, 0, "no penalty on a completed day");
        assert!(!close.value.streak_lost);
    }
}

fn validate_month(session: &HabitSession<MemoryStore>, storage: &MemoryStore) {
    let state = session.state();
    assert_eq!(state.simulated_date, "2024-03-31");
    assert_eq!(state.last_login_date, "2024-03-31");
    assert_eq!(state.login_streak, 31);
    assert!(state.level >= 4, "a month of triggers levels up");
    assert_eq!(
        state.xp_to_next_level,
        mindflow_game::xp_for_level(state.level)
    );
    assert!(state.hp > 0);
    assert!(state.hp <= state.max_hp);
    assert!(state.gold > 0);
    assert_eq!(state.save_version, CURRENT_SAVE_VERSION);
    for day in 1..=30 {
        let key = format!("2024-03-{day:02}");
        assert!(
            !state.history_for(&key).is_empty(),
            "history records {key}"
        );
    }

    // The slot always holds what the session holds.
    let saved = storage.slot.borrow().clone().expect("saved");
    assert_eq!(
        save::encode(&saved).expect("encode slot"),
        save::encode(state).expect("encode state")
    );
}

fn run_slump_and_revive(session: &mut HabitSession<MemoryStore>) {
    // Burn the freeze bought earlier so the slump breaks the streak.
    let bad: Vec<String> = session.state().bad_habits().map(|h| h.id.clone()).collect();
    assert!(!bad.is_empty());
    while session.state().hp > 0 {
        for id in &bad {
            match session.trigger_habit(id) {
                Ok(_) | Err(TriggerError::AlreadyTriggered) | Err(TriggerError::Defeated) => {}
                Err(err) => panic!("trigger {id}: {err}"),
            }
        }
        session.skip_day().expect("rollover");
    }

    assert_eq!(session.state().hp, 0);
    assert_eq!(
        session.trigger_habit(&bad[0]),
        Err(TriggerError::Defeated)
    );
    assert_eq!(session.state().login_streak, 0, "slump broke the streak");

    let gold_before = session.state().gold;
    let expected_cost = session.state().revive_cost();
    let outcome = session.revive().expect("revive");
    assert_eq!(outcome.value, expected_cost);
    assert_eq!(session.state().hp, session.state().max_hp);
    assert_eq!(session.state().gold, gold_before - expected_cost);
}

fn run_transfer_and_reset(session: &mut HabitSession<MemoryStore>, storage: &MemoryStore) {
    let blob = session.export().expect("export");

    let mut twin = HabitSession::load_or_create(MemoryStore::default(), 1, "2024-01-01");
    twin.import(&blob).expect("import");
    assert_eq!(
        save::encode(twin.state()).expect("encode twin"),
        save::encode(session.state()).expect("encode source")
    );

    session.reset(0xCAFE, "2024-06-01");
    let state = session.state();
    assert_eq!(state.seed, 0xCAFE);
    assert_eq!(state.simulated_date, "2024-06-01");
    assert_eq!(state.gold, 50);
    assert_eq!(state.level, 1);
    assert!(state.history.is_empty());
    assert!(state.unlocked_achievements.is_empty());
    let saved = storage.slot.borrow().clone().expect("saved");
    assert_eq!(saved.simulated_date, "2024-06-01");
}
