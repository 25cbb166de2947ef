//! The command layer binding one game state to its save slot.
//!
//! Every committed mutation runs the achievement scan and writes the
//! save before returning, so callers never persist by hand. Storage
//! failures are stashed instead of aborting gameplay; the UI can poll
//! [`HabitSession::take_save_error`] to surface them.

use crate::achievements::{self, AchievementId};
use crate::day_cycle::{self, AdvanceError, DayCloseSummary};
use crate::save::{self, SaveError};
use crate::skills::{self, SkillError, SkillUpgrade};
use crate::state::{
    Difficulty, GameState, HabitEditError, HabitKind, Language, RepairError, ReviveError, SkillId,
    ThemeError, ThemeId, TriggerError, TriggerOutcome,
};
use crate::store::{self, BundlePurchase, DecorationOutcome, PotionOutcome, StoreError};
use crate::GameStorage;

/// A committed command's result plus the achievement toast to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome<T> {
    pub value: T,
    pub notification: Option<AchievementId>,
}

pub struct HabitSession<S: GameStorage> {
    state: GameState,
    storage: S,
    save_error: Option<S::Error>,
}

impl<S: GameStorage> HabitSession<S> {
    pub fn new(storage: S, state: GameState) -> Self {
        Self {
            state,
            storage,
            save_error: None,
        }
    }

    /// Loads and lifts the stored save without falling back.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend fails.
    pub fn try_load(storage: &S) -> Result<Option<GameState>, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let Some(mut state) = storage.load_game().map_err(Into::into)? else {
            return Ok(None);
        };
        save::migrate(&mut state);
        state.ensure_rng();
        Ok(Some(state))
    }

    /// Loads the save slot, or starts a fresh game when the blob is
    /// missing or unreadable. The result is written back immediately so
    /// migrations stick.
    pub fn load_or_create(storage: S, seed: u64, today: &str) -> Self
    where
        S::Error: Into<anyhow::Error>,
    {
        let state = match Self::try_load(&storage) {
            Ok(Some(state)) => state,
            Ok(None) | Err(_) => GameState::new_game(seed, today),
        };
        let mut session = Self::new(storage, state);
        session.commit();
        session
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// The last failed write, if any. Taking it clears the slot.
    pub fn take_save_error(&mut self) -> Option<S::Error> {
        self.save_error.take()
    }

    fn commit(&mut self) {
        if let Err(err) = self.storage.save_game(&self.state) {
            self.save_error = Some(err);
        }
    }

    fn commit_with_scan<T>(&mut self, value: T) -> SessionOutcome<T> {
        let newly = achievements::scan(&mut self.state);
        self.commit();
        SessionOutcome {
            value,
            notification: newly.last().copied(),
        }
    }

    pub fn trigger_habit(
        &mut self,
        habit_id: &str,
    ) -> Result<SessionOutcome<TriggerOutcome>, TriggerError> {
        let outcome = self.state.trigger_habit(habit_id)?;
        Ok(self.commit_with_scan(outcome))
    }

    pub fn revive(&mut self) -> Result<SessionOutcome<i64>, ReviveError> {
        let cost = self.state.revive()?;
        Ok(self.commit_with_scan(cost))
    }

    pub fn repair_day(&mut self, day: &str) -> Result<SessionOutcome<()>, RepairError> {
        self.state.repair_day(day)?;
        Ok(self.commit_with_scan(()))
    }

    /// Replays every missed rollover up to the given real-world day.
    /// A no-op when the state is already there, so callers may poll it.
    pub fn advance_to(
        &mut self,
        today: &str,
    ) -> Result<SessionOutcome<Vec<DayCloseSummary>>, AdvanceError> {
        let closes = day_cycle::advance_to(&mut self.state, today)?;
        Ok(self.commit_with_scan(closes))
    }

    pub fn skip_day(&mut self) -> Result<SessionOutcome<DayCloseSummary>, AdvanceError> {
        let close = day_cycle::advance_one_day(&mut self.state)?;
        Ok(self.commit_with_scan(close))
    }

    pub fn add_habit(
        &mut self,
        name: &str,
        kind: HabitKind,
        difficulty: Difficulty,
    ) -> Result<SessionOutcome<String>, HabitEditError> {
        let id = self.state.add_habit(name, kind, difficulty)?;
        Ok(self.commit_with_scan(id))
    }

    pub fn update_habit(
        &mut self,
        id: &str,
        name: &str,
        kind: HabitKind,
        difficulty: Difficulty,
    ) -> Result<SessionOutcome<()>, HabitEditError> {
        self.state.update_habit(id, name, kind, difficulty)?;
        Ok(self.commit_with_scan(()))
    }

    pub fn delete_habit(&mut self, id: &str) -> Result<SessionOutcome<()>, HabitEditError> {
        self.state.delete_habit(id)?;
        Ok(self.commit_with_scan(()))
    }

    pub fn buy_booster(&mut self) -> Result<SessionOutcome<i64>, StoreError> {
        let cost = store::buy_booster(&mut self.state)?;
        Ok(self.commit_with_scan(cost))
    }

    pub fn buy_freeze(&mut self) -> Result<SessionOutcome<i64>, StoreError> {
        let cost = store::buy_freeze(&mut self.state)?;
        Ok(self.commit_with_scan(cost))
    }

    pub fn buy_potion(&mut self) -> Result<SessionOutcome<PotionOutcome>, StoreError> {
        let outcome = store::buy_potion(&mut self.state)?;
        Ok(self.commit_with_scan(outcome))
    }

    pub fn buy_bundle(
        &mut self,
        bundle_id: &str,
    ) -> Result<SessionOutcome<BundlePurchase>, StoreError> {
        let purchase = store::buy_bundle(&mut self.state, bundle_id)?;
        Ok(self.commit_with_scan(purchase))
    }

    pub fn buy_or_toggle_decoration(
        &mut self,
        decoration_id: &str,
    ) -> Result<SessionOutcome<DecorationOutcome>, StoreError> {
        let outcome = store::buy_or_toggle_decoration(&mut self.state, decoration_id)?;
        Ok(self.commit_with_scan(outcome))
    }

    pub fn upgrade_skill(&mut self, id: SkillId) -> Result<SessionOutcome<SkillUpgrade>, SkillError> {
        let upgrade = skills::upgrade_skill(&mut self.state, id)?;
        Ok(self.commit_with_scan(upgrade))
    }

    pub fn set_language(&mut self, language: Language) -> SessionOutcome<()> {
        self.state.set_language(language);
        self.commit_with_scan(())
    }

    pub fn set_theme(&mut self, theme: ThemeId) -> Result<SessionOutcome<()>, ThemeError> {
        self.state.set_theme(theme)?;
        Ok(self.commit_with_scan(()))
    }

    /// Counts a click on the developer credit. The fifth click unlocks
    /// the settings easter egg.
    pub fn register_logo_click(&mut self) -> SessionOutcome<u32> {
        let clicks = self.state.register_logo_click();
        let manual = clicks >= crate::constants::LOGO_CLICKS_FOR_CURIOUS_MIND
            && achievements::unlock_curious_mind(&mut self.state);
        let newly = achievements::scan(&mut self.state);
        self.commit();
        let notification = newly
            .last()
            .copied()
            .or_else(|| manual.then_some(AchievementId::CuriousMind));
        SessionOutcome {
            value: clicks,
            notification,
        }
    }

    pub fn debug_grant_resources(&mut self) -> SessionOutcome<u32> {
        let levels = self.state.debug_grant_resources();
        self.commit_with_scan(levels)
    }

    /// Serializes the current state for clipboard export.
    ///
    /// # Errors
    ///
    /// Returns an error when the state cannot be serialized.
    pub fn export(&self) -> Result<String, SaveError> {
        save::encode(&self.state)
    }

    /// Replaces the running game with a pasted save. Malformed input
    /// leaves the current state untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob fails validation.
    pub fn import(&mut self, raw: &str) -> Result<SessionOutcome<()>, SaveError> {
        let mut state = save::decode(raw)?;
        state.ensure_rng();
        self.state = state;
        Ok(self.commit_with_scan(()))
    }

    /// Deletes the save slot and starts over.
    pub fn reset(&mut self, seed: u64, today: &str) {
        if let Err(err) = self.storage.delete_save() {
            self.save_error = Some(err);
        }
        self.state = GameState::new_game(seed, today);
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        slot: Rc<RefCell<Option<GameState>>>,
    }

    impl GameStorage for MemoryStorage {
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

    #[derive(Debug, thiserror::Error)]
    #[error("storage down")]
    struct StorageDown;

    struct BrokenStorage;

    impl GameStorage for BrokenStorage {
        type Error = StorageDown;

        fn save_game(&self, _state: &GameState) -> Result<(), Self::Error> {
            Err(StorageDown)
        }

        fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
            Err(StorageDown)
        }

        fn delete_save(&self) -> Result<(), Self::Error> {
            Err(StorageDown)
        }
    }

    fn fresh_session() -> (HabitSession<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::default();
        let session = HabitSession::load_or_create(storage.clone(), 21, "2024-03-01");
        (session, storage)
    }

    #[test]
    fn commands_persist_after_each_commit() {
        let (mut session, storage) = fresh_session();
        let outcome = session.trigger_habit("h1").expect("trigger");
        assert_eq!(outcome.notification, None);
        let saved = storage.slot.borrow().clone().expect("saved");
        assert!(saved.is_triggered_on("2024-03-01", "h1"));
        assert_eq!(saved.gold, session.state().gold);
    }

    #[test]
    fn achievement_toast_reports_the_last_unlock() {
        let storage = MemoryStorage::default();
        let mut state = GameState::new_game(3, "2024-03-01");
        state.gold = 1_500;
        let mut session = HabitSession::new(storage, state);
        let outcome = session.trigger_habit("h1").expect("trigger");
        assert_eq!(outcome.notification, Some(AchievementId::Midas));
        assert!(session
            .state()
            .unlocked_achievements
            .contains(&AchievementId::Midas));
    }

    #[test]
    fn load_or_create_reuses_the_stored_save() {
        let (mut session, storage) = fresh_session();
        session.trigger_habit("h1").expect("trigger");
        let gold = session.state().gold;
        drop(session);
        let revived = HabitSession::load_or_create(storage, 99, "2024-06-01");
        assert_eq!(revived.state().gold, gold);
        assert_eq!(revived.state().simulated_date, "2024-03-01");
    }

    #[test]
    fn broken_storage_degrades_to_a_fresh_game() {
        let mut session = HabitSession::load_or_create(BrokenStorage, 4, "2024-03-02");
        assert_eq!(session.state().simulated_date, "2024-03-02");
        assert_eq!(session.state().gold, 50);
        // The initial write failed and is waiting to be surfaced.
        assert!(session.take_save_error().is_some());
        assert!(session.take_save_error().is_none());
    }

    #[test]
    fn advance_to_replays_missed_days() {
        let (mut session, storage) = fresh_session();
        let outcome = session.advance_to("2024-03-04").expect("advance");
        assert_eq!(outcome.value.len(), 3);
        assert_eq!(session.state().simulated_date, "2024-03-04");
        // Polling again does nothing.
        let outcome = session.advance_to("2024-03-04").expect("advance");
        assert!(outcome.value.is_empty());
        let saved = storage.slot.borrow().clone().expect("saved");
        assert_eq!(saved.simulated_date, "2024-03-04");
    }

    #[test]
    fn import_round_trips_and_rejects_garbage() {
        let (mut session, _storage) = fresh_session();
        session.trigger_habit("h2").expect("trigger");
        let exported = session.export().expect("export");

        let (mut other, storage) = fresh_session();
        other.import(&exported).expect("import");
        assert_eq!(other.state().gold, session.state().gold);
        assert!(storage.slot.borrow().is_some());

        let before = other.state().gold;
        assert!(other.import("{broken").is_err());
        assert_eq!(other.state().gold, before);
    }

    #[test]
    fn reset_clears_the_slot_and_state() {
        let (mut session, storage) = fresh_session();
        session.trigger_habit("h1").expect("trigger");
        session.reset(77, "2024-05-05");
        assert_eq!(session.state().gold, 50);
        assert_eq!(session.state().seed, 77);
        let saved = storage.slot.borrow().clone().expect("saved");
        assert_eq!(saved.simulated_date, "2024-05-05");
        assert!(saved.history.is_empty());
    }

    #[test]
    fn fifth_dev_click_unlocks_the_easter_egg() {
        let (mut session, _storage) = fresh_session();
        for _ in 0..4 {
            assert_eq!(session.register_logo_click().notification, None);
        }
        let outcome = session.register_logo_click();
        assert_eq!(outcome.value, 5);
        assert_eq!(outcome.notification, Some(AchievementId::CuriousMind));
        // Further clicks stay quiet.
        assert_eq!(session.register_logo_click().notification, None);
    }
}
