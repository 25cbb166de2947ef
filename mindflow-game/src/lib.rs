//! Mind'N Flow Game Engine
//!
//! Platform-agnostic core logic for the Mind'N Flow habit RPG.
//! This crate provides all game mechanics without UI or platform-specific
//! dependencies; the browser shell drives it through [`HabitSession`].

pub mod achievements;
pub mod catalog;
pub mod constants;
pub mod day_cycle;
pub mod numbers;
pub mod progression;
pub mod save;
pub mod session;
pub mod skills;
pub mod state;
pub mod stats;
pub mod store;
pub mod suggestions;

// Re-export commonly used types
pub use achievements::{AchievementId, UnlockSet};
pub use catalog::{
    BundleDef, BundleHabitDef, DecorationDef, StoreGroup, BUNDLES, DECORATIONS, SKILL_TIER_COSTS,
};
pub use constants::{HABIT_ROSTER_MAX, HABIT_ROSTER_MIN};
pub use day_cycle::{AdvanceError, DayCloseSummary};
pub use progression::{
    calculate_rewards, career_xp_percent, financial_gold_percent, max_hp_for, xp_for_level, Reward,
};
pub use save::{SaveError, CURRENT_SAVE_VERSION};
pub use session::{HabitSession, SessionOutcome};
pub use skills::{upgrade_skill, SkillError, SkillUpgrade};
pub use state::{
    Difficulty, GameState, Habit, HabitEditError, HabitKind, Inventory, Language, RepairError,
    ReviveError, Skill, SkillId, ThemeError, ThemeId, TriggerError, TriggerOutcome,
};
pub use stats::{
    activity_series, avoidance_days, completion_dots, distribution, habit_streak,
    next_streak_reward, repair_candidates, ActivityPoint, ActivityWindow, DayMark,
    HabitDistribution, RepairCandidate,
};
pub use store::{
    booster_price, bundle_days_left, bundle_price, decoration_price, freeze_price, potion_price,
    social_discount_percent, BundlePurchase, DecorationOutcome, PotionOutcome, StoreError,
};
pub use suggestions::{fallback_list, HabitSuggester, StaticSuggester, MAX_SUGGESTIONS};

/// Trait for abstracting save persistence
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be saved.
    fn save_game(&self, state: &GameState) -> Result<(), Self::Error>;

    /// Read the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the game state cannot be loaded.
    fn load_game(&self) -> Result<Option<GameState>, Self::Error>;

    /// Delete the save slot
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self) -> Result<(), Self::Error>;
}
