use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use mindflow_game::save;
use mindflow_game::{
    distribution, AchievementId, DecorationOutcome, Difficulty, GameState, GameStorage,
    HabitKind, HabitSession, SkillId, TriggerError, DECORATIONS,
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

fn trigger_goods(session: &mut HabitSession<MemoryStore>) {
    let ids: Vec<String> = session
        .state()
        .good_habits()
        .map(|h| h.id.clone())
        .collect();
    for id in ids {
        match session.trigger_habit(&id) {
            Ok(_) | Err(TriggerError::AlreadyTriggered) => {}
            Err(err) => panic!("trigger {id}: {err}"),
        }
    }
}

fn build_the_roster(session: &mut HabitSession<MemoryStore>) {
    let added = session
        .add_habit("Order takeout", HabitKind::Bad, Difficulty::Easy)
        .expect("add bad habit");
    assert_eq!(added.value, "h4");
    // First badge and the matching-roster badge land together; the
    // toast shows the later one.
    assert_eq!(added.notification, Some(AchievementId::Symmetry));
    assert!(session
        .state()
        .unlocked_achievements
        .contains(&AchievementId::FirstStep));
    let dist = distribution(session.state());
    assert_eq!((dist.good, dist.bad), (2, 2));
}

fn bankroll_and_level(session: &mut HabitSession<MemoryStore>) {
    assert_eq!(session.debug_grant_resources().notification, None);
    assert_eq!(
        session.debug_grant_resources().notification,
        Some(AchievementId::Midas)
    );
    for _ in 0..22 {
        session.debug_grant_resources();
    }
    let state = session.state();
    assert_eq!(state.gold, 12_050);
    assert_eq!(state.level, 20);
    assert_eq!(state.perk_points, 19);
}

fn shop_the_store(session: &mut HabitSession<MemoryStore>) {
    let first = session.buy_booster().expect("first booster");
    assert_eq!((first.value, first.notification), (300, None));
    let second = session.buy_booster().expect("second booster");
    assert_eq!(second.value, 330);
    assert_eq!(second.notification, Some(AchievementId::Wise));

    let trigger = session.trigger_habit("h1").expect("trigger");
    assert!(trigger.value.booster_spent);
    assert_eq!(trigger.notification, Some(AchievementId::QuickLearner));

    let freeze = session.buy_freeze().expect("freeze");
    assert_eq!(freeze.value, 500);
    assert_eq!(freeze.notification, Some(AchievementId::Survivor));

    let bundle = session.buy_bundle("explorer_bag").expect("bundle");
    assert_eq!(bundle.value.cost, 350);
    assert_eq!(bundle.notification, Some(AchievementId::WorthTrying));
    assert_eq!(session.state().habits.len(), 6);
}

fn master_every_skill(session: &mut HabitSession<MemoryStore>) {
    let branches = [
        SkillId::S1,
        SkillId::S6,
        SkillId::S3,
        SkillId::S2,
        SkillId::S4,
        SkillId::S5,
    ];
    let mut badges = Vec::new();
    for id in branches {
        for _ in 0..3 {
            let upgrade = session.upgrade_skill(id).expect("upgrade");
            badges.extend(upgrade.notification);
        }
    }
    assert_eq!(
        badges,
        vec![
            AchievementId::Hercules,
            AchievementId::Stonks,
            AchievementId::BargainHunter,
            AchievementId::DaVinci,
            AchievementId::Perfect,
        ]
    );
    assert_eq!(session.state().perk_points, 1);
    assert_eq!(session.state().max_hp, 200);
}

fn furnish_the_room(session: &mut HabitSession<MemoryStore>) {
    let before = session.state().gold;
    // Desk gear stays locked until the desk itself is owned.
    let desk = session.buy_or_toggle_decoration("DEK_TABLE").expect("desk");
    assert_eq!(desk.value, DecorationOutcome::Bought { cost: 212 });

    let mut badges: Vec<AchievementId> = desk.notification.into_iter().collect();
    for def in &DECORATIONS {
        if def.id == "DEK_TABLE" {
            continue;
        }
        let outcome = session.buy_or_toggle_decoration(def.id).expect("buy");
        assert!(matches!(outcome.value, DecorationOutcome::Bought { .. }));
        badges.extend(outcome.notification);
    }
    assert_eq!(badges, vec![AchievementId::ThisYear]);
    // Maxed Social knocks 15% off the whole catalog.
    assert_eq!(before - session.state().gold, 6_755);

    let mut badges = Vec::new();
    let desk = session
        .buy_or_toggle_decoration("DEK_TABLE")
        .expect("equip desk");
    assert_eq!(desk.value, DecorationOutcome::Equipped);
    badges.extend(desk.notification);
    for def in &DECORATIONS {
        if def.id == "DEK_TABLE" {
            continue;
        }
        let outcome = session.buy_or_toggle_decoration(def.id).expect("equip");
        assert_eq!(outcome.value, DecorationOutcome::Equipped);
        badges.extend(outcome.notification);
    }
    assert_eq!(
        badges,
        vec![AchievementId::CleanRoom, AchievementId::Meticulous]
    );
    let inventory = &session.state().inventory;
    assert_eq!(inventory.owned_decorations.len(), DECORATIONS.len());
    assert_eq!(inventory.active_decorations.len(), DECORATIONS.len());
}

fn walk_three_weeks(session: &mut HabitSession<MemoryStore>) {
    let mut close_badges = Vec::new();
    for day in 0..21 {
        trigger_goods(session);
        if day < 3 {
            let slip = session.trigger_habit("h3").expect("bad trigger");
            if day == 2 {
                assert_eq!(slip.notification, Some(AchievementId::AntiDiscipline));
            }
        }
        let close = session.skip_day().expect("rollover");
        assert!(!close.value.streak_lost, "day {day} lost the streak");
        assert_eq!(close.value.bundle_penalty, 0, "day {day} fined a bundle");
        if day == 7 {
            assert_eq!(
                close.value.expired_bundles,
                vec![String::from("explorer_bag")]
            );
        }
        close_badges.extend(close.notification);
    }
    assert_eq!(
        close_badges,
        vec![AchievementId::RedLine, AchievementId::HabitTheory]
    );
    let state = session.state();
    assert_eq!(state.login_streak, 22);
    assert_eq!(state.simulated_date, "2024-03-22");
    // The expired bundle took its habits with it.
    assert_eq!(state.habits.len(), 4);
    assert_eq!(state.inventory.freeze_charges, 1);
}

fn finish_with_the_easter_egg(session: &mut HabitSession<MemoryStore>) {
    for click in 1..=4_u32 {
        let outcome = session.register_logo_click();
        assert_eq!((outcome.value, outcome.notification), (click, None));
    }
    let fifth = session.register_logo_click();
    assert_eq!(fifth.value, 5);
    // The manual unlock is the nineteenth badge; the same pass closes
    // the list with game_over.
    assert_eq!(fifth.notification, Some(AchievementId::GameOver));
    assert!(session
        .state()
        .unlocked_achievements
        .contains(&AchievementId::CuriousMind));
}

#[test]
fn one_save_can_earn_every_badge() {
    let storage = MemoryStore::default();
    let mut session = HabitSession::load_or_create(storage.clone(), 0xF00D, "2024-03-01");

    build_the_roster(&mut session);
    bankroll_and_level(&mut session);
    shop_the_store(&mut session);
    master_every_skill(&mut session);
    furnish_the_room(&mut session);
    walk_three_weeks(&mut session);
    finish_with_the_easter_egg(&mut session);

    let state = session.state();
    assert_eq!(
        state.unlocked_achievements.len(),
        AchievementId::ALL.len()
    );
    for id in AchievementId::ALL {
        assert!(
            state.unlocked_achievements.contains(&id),
            "{id} never unlocked"
        );
    }
    let stored = storage.load_game().expect("storage").expect("slot");
    assert_eq!(
        save::encode(&stored).expect("encode slot"),
        save::encode(state).expect("encode state")
    );
}
