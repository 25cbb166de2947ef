//! Achievement catalog and the unlock scan that runs after every
//! committed transition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog;
use crate::constants::{
    ANTI_DISCIPLINE_STREAK, FIRST_STEP_HABIT_COUNT, GAME_OVER_UNLOCK_COUNT, HABIT_THEORY_STREAK,
    METICULOUS_DECORATIONS, MIDAS_GOLD, RED_LINE_STREAK, RED_LINE_WINDOW_DAYS, SKILL_LEVEL_CAP,
    WISE_BOOSTER_CHARGES,
};
use crate::state::{GameState, SkillId};
use crate::stats;

/// Ids earned by a single scan pass; passes rarely yield more than one.
pub type UnlockSet = SmallVec<[AchievementId; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstStep,
    QuickLearner,
    Survivor,
    WorthTrying,
    CleanRoom,
    AntiDiscipline,
    RedLine,
    HabitTheory,
    Midas,
    ThisYear,
    Hercules,
    Stonks,
    BargainHunter,
    DaVinci,
    Wise,
    Symmetry,
    Perfect,
    Meticulous,
    CuriousMind,
    GameOver,
}

impl AchievementId {
    pub const ALL: [Self; 20] = [
        Self::FirstStep,
        Self::QuickLearner,
        Self::Survivor,
        Self::WorthTrying,
        Self::CleanRoom,
        Self::AntiDiscipline,
        Self::RedLine,
        Self::HabitTheory,
        Self::Midas,
        Self::ThisYear,
        Self::Hercules,
        Self::Stonks,
        Self::BargainHunter,
        Self::DaVinci,
        Self::Wise,
        Self::Symmetry,
        Self::Perfect,
        Self::Meticulous,
        Self::CuriousMind,
        Self::GameOver,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstStep => "first_step",
            Self::QuickLearner => "quick_learner",
            Self::Survivor => "survivor",
            Self::WorthTrying => "worth_trying",
            Self::CleanRoom => "clean_room",
            Self::AntiDiscipline => "anti_discipline",
            Self::RedLine => "red_line",
            Self::HabitTheory => "habit_theory",
            Self::Midas => "midas",
            Self::ThisYear => "this_year",
            Self::Hercules => "hercules",
            Self::Stonks => "stonks",
            Self::BargainHunter => "bargain_hunter",
            Self::DaVinci => "da_vinci",
            Self::Wise => "wise",
            Self::Symmetry => "symmetry",
            Self::Perfect => "perfect",
            Self::Meticulous => "meticulous",
            Self::CuriousMind => "curious_mind",
            Self::GameOver => "game_over",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

impl From<AchievementId> for String {
    fn from(id: AchievementId) -> Self {
        id.as_str().to_string()
    }
}

/// Runs every automatic predicate and appends the newly earned ids to
/// the unlock list. Predicates see the list as it stood before this
/// pass, so `game_over` only counts earlier unlocks. Returns the fresh
/// ids in catalog order; callers toast the last one.
pub fn scan(state: &mut GameState) -> UnlockSet {
    let newly: UnlockSet = AchievementId::ALL
        .into_iter()
        .filter(|id| *id != AchievementId::CuriousMind)
        .filter(|id| !state.unlocked_achievements.contains(id))
        .filter(|id| satisfied(state, *id))
        .collect();
    state.unlocked_achievements.extend(newly.iter().copied());
    newly
}

/// The settings easter egg bypasses the scan entirely. Returns false
/// when it was already unlocked.
pub fn unlock_curious_mind(state: &mut GameState) -> bool {
    if state
        .unlocked_achievements
        .contains(&AchievementId::CuriousMind)
    {
        return false;
    }
    state
        .unlocked_achievements
        .push(AchievementId::CuriousMind);
    true
}

fn satisfied(state: &GameState, id: AchievementId) -> bool {
    match id {
        AchievementId::FirstStep => state.habits.len() > FIRST_STEP_HABIT_COUNT,
        AchievementId::QuickLearner => state.inventory.booster_used > 0,
        AchievementId::Survivor => state.inventory.freeze_charges > 0,
        AchievementId::WorthTrying => !state.inventory.purchased_templates.is_empty(),
        AchievementId::CleanRoom => {
            state
                .inventory
                .active_decorations
                .get(catalog::WALL_SLOT)
                .map(String::as_str)
                == Some(catalog::PLAIN_WALL_ITEM)
        }
        AchievementId::AntiDiscipline => state
            .bad_habits()
            .any(|habit| stats::habit_streak(state, &habit.id) >= ANTI_DISCIPLINE_STREAK),
        AchievementId::RedLine => {
            state.login_streak >= RED_LINE_STREAK
                && state
                    .bad_habits()
                    .any(|habit| stats::avoidance_days(state, &habit.id) >= RED_LINE_WINDOW_DAYS)
        }
        AchievementId::HabitTheory => state.login_streak >= HABIT_THEORY_STREAK,
        AchievementId::Midas => state.gold >= MIDAS_GOLD,
        AchievementId::ThisYear => state.inventory.owns_decoration(catalog::VISION_BOARD_ITEM),
        AchievementId::Hercules => state.skill_level(SkillId::S1) >= SKILL_LEVEL_CAP,
        AchievementId::Stonks => state.skill_level(SkillId::S6) >= SKILL_LEVEL_CAP,
        AchievementId::BargainHunter => state.skill_level(SkillId::S3) >= SKILL_LEVEL_CAP,
        AchievementId::DaVinci => state.skills.iter().all(|skill| skill.level >= 1),
        AchievementId::Wise => state.inventory.booster_charges >= WISE_BOOSTER_CHARGES,
        AchievementId::Symmetry => {
            let dist = stats::distribution(state);
            dist.good > 0 && dist.good == dist.bad
        }
        AchievementId::Perfect => state
            .skills
            .iter()
            .all(|skill| skill.level >= SKILL_LEVEL_CAP),
        AchievementId::Meticulous => {
            state.inventory.owned_decorations.len() >= METICULOUS_DECORATIONS
                && state.inventory.active_decorations.len() >= METICULOUS_DECORATIONS
        }
        AchievementId::CuriousMind => false,
        AchievementId::GameOver => state.unlocked_achievements.len() >= GAME_OVER_UNLOCK_COUNT,
    }
}
