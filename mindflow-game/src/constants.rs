//! Centralized balance and tuning constants for the Mind'N Flow engine.
//!
//! These values define the deterministic math for progression, streaks,
//! and the store economy. Keeping them together ensures that gameplay can
//! only be adjusted via code changes reviewed in version control, rather
//! than through external JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_DAY_PENALTY: &str = "log.day.penalty";
pub(crate) const LOG_DAY_STREAK: &str = "log.day.streak";
pub(crate) const LOG_DAY_FREEZE_USED: &str = "log.day.freeze-used";
pub(crate) const LOG_DAY_STREAK_LOST: &str = "log.day.streak-lost";
pub(crate) const LOG_TEMPLATE_EXPIRED: &str = "log.template.expired";
pub(crate) const LOG_TEMPLATE_PENALTY: &str = "log.template.penalty";
pub(crate) const LOG_REVIVED: &str = "log.revived";
pub(crate) const LOG_DAY_REPAIRED: &str = "log.day-repaired";
pub(crate) const LOG_REGRET_PREFIX: &str = "messages.regret.";
pub(crate) const LOG_CONGRAT_PREFIX: &str = "messages.congrat.";
pub(crate) const REGRET_MESSAGE_COUNT: u32 = 8;
pub(crate) const CONGRAT_MESSAGE_COUNT: u32 = 10;

// Level curve --------------------------------------------------------------
pub(crate) const LEVEL_THRESHOLDS: [i64; 18] = [
    30, 40, 50, 80, 100, 120, 150, 180, 200, 250, 300, 400, 500, 750, 1_000, 1_250, 1_500, 2_000,
];
pub(crate) const LEVEL_CURVE_TAIL_BASE: i64 = 2_000;
pub(crate) const LEVEL_CURVE_TAIL_STEP: i64 = 100;

// Health -------------------------------------------------------------------
pub(crate) const BASE_MAX_HP: i32 = 100;
pub(crate) const MAX_HP_TIER_BONUS: [i32; 3] = [25, 25, 50];
pub(crate) const REWARD_HP_PER_PHYSICAL_LEVEL: i32 = 2;

// Reward bases by difficulty ----------------------------------------------
pub(crate) const REWARD_EASY: (i32, i64, i64) = (5, 5, 10);
pub(crate) const REWARD_MEDIUM: (i32, i64, i64) = (10, 10, 25);
pub(crate) const REWARD_HARD: (i32, i64, i64) = (20, 20, 50);
pub(crate) const CAREER_XP_PCT: [f64; 3] = [0.10, 0.25, 0.50];
pub(crate) const FINANCIAL_GOLD_PCT_PER_LEVEL: f64 = 0.15;
pub(crate) const BOOSTER_XP_MULTIPLIER: i64 = 2;

// Streak accounting --------------------------------------------------------
pub(crate) const STREAK_REWARD_BASE: i64 = 25;
pub(crate) const STREAK_REWARD_STEP: i64 = 10;
pub(crate) const STREAK_REWARD_CAP: i64 = 150;
pub(crate) const AVOIDED_BAD_BONUS: i64 = 10;
pub(crate) const MISSED_PENALTY_DIVISOR: i64 = 2;

// Templates ----------------------------------------------------------------
pub(crate) const TEMPLATE_ACTIVE_DAYS: u64 = 7;
pub(crate) const TEMPLATE_PENALTY_MULTIPLIER: i64 = 2;

// Store economy ------------------------------------------------------------
pub(crate) const BOOSTER_BASE_PRICE: i64 = 300;
pub(crate) const BOOSTER_CHARGES_PER_PURCHASE: i32 = 4;
pub(crate) const FREEZE_BASE_PRICE: i64 = 500;
pub(crate) const POTION_BASE_PRICE: i64 = 200;
pub(crate) const POTION_PRICE_PER_LEVEL: i64 = 50;
pub(crate) const POTION_XP_RATE: f64 = 0.25;
pub(crate) const PRICE_INFLATION_RATE: f64 = 1.1;
pub(crate) const SOCIAL_DISCOUNT_PER_LEVEL: f64 = 0.05;
pub(crate) const REVIVE_COST_RATE: f64 = 0.8;

// Habit roster -------------------------------------------------------------
/// Hard cap on the habit roster, shared with the web manager UI.
pub const HABIT_ROSTER_MAX: usize = 8;
/// Deleting below this roster size is rejected.
pub const HABIT_ROSTER_MIN: usize = 2;

// Skills -------------------------------------------------------------------
pub(crate) const SKILL_LEVEL_CAP: u8 = 3;

// Achievement thresholds ---------------------------------------------------
pub(crate) const FIRST_STEP_HABIT_COUNT: usize = 3;
pub(crate) const ANTI_DISCIPLINE_STREAK: u32 = 3;
pub(crate) const RED_LINE_STREAK: u32 = 7;
pub(crate) const RED_LINE_WINDOW_DAYS: u32 = 7;
pub(crate) const HABIT_THEORY_STREAK: u32 = 21;
pub(crate) const MIDAS_GOLD: i64 = 1_000;
pub(crate) const WISE_BOOSTER_CHARGES: i32 = 5;
pub(crate) const METICULOUS_DECORATIONS: usize = 12;
pub(crate) const GAME_OVER_UNLOCK_COUNT: usize = 19;
pub(crate) const LOGO_CLICKS_FOR_CURIOUS_MIND: u32 = 5;
pub(crate) const HABIT_STREAK_LOOKBACK_DAYS: u64 = 365;
pub(crate) const AVOIDANCE_LOOKBACK_DAYS: u64 = 30;

// Initial state ------------------------------------------------------------
pub(crate) const INITIAL_GOLD: i64 = 50;
pub(crate) const INITIAL_LOGIN_STREAK: u32 = 1;

// Debug grants -------------------------------------------------------------
pub(crate) const DEBUG_GRANT_XP: i64 = 500;
pub(crate) const DEBUG_GRANT_GOLD: i64 = 500;

// Statistics ---------------------------------------------------------------
pub(crate) const ACTIVITY_WEEK_DAYS: u64 = 7;
pub(crate) const ACTIVITY_MONTH_DAYS: u64 = 30;
pub(crate) const REPAIR_CANDIDATE_DAYS: u64 = 5;
