//! Leveling curve, trigger reward math and the max-hp ladder.

use crate::constants::{
    BASE_MAX_HP, BOOSTER_XP_MULTIPLIER, CAREER_XP_PCT, FINANCIAL_GOLD_PCT_PER_LEVEL,
    LEVEL_CURVE_TAIL_BASE, LEVEL_CURVE_TAIL_STEP, LEVEL_THRESHOLDS, MAX_HP_TIER_BONUS,
    REWARD_EASY, REWARD_HARD, REWARD_HP_PER_PHYSICAL_LEVEL, REWARD_MEDIUM,
};
use crate::numbers::{floor_f64_to_i64, i64_to_f64};
use crate::state::{Difficulty, GameState, Skill, SkillId};

/// Payout of a single trigger after skill bonuses. For bad habits `hp`
/// is read as damage instead of healing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub hp: i32,
    pub xp: i64,
    pub gold: i64,
    /// Career share of the xp, surfaced separately in the UI.
    pub bonus_xp: i64,
}

/// Xp needed to leave the given level. Flattens into a linear tail past
/// the threshold table.
#[must_use]
pub fn xp_for_level(level: i32) -> i64 {
    if level <= 0 {
        return LEVEL_THRESHOLDS[0];
    }
    let table_len = i32::try_from(LEVEL_THRESHOLDS.len()).unwrap_or(i32::MAX);
    if level > table_len {
        return LEVEL_CURVE_TAIL_BASE + i64::from(level - table_len) * LEVEL_CURVE_TAIL_STEP;
    }
    LEVEL_THRESHOLDS[usize::try_from(level - 1).unwrap_or(0)]
}

fn branch_level(skills: &[Skill], id: SkillId) -> u8 {
    skills.iter().find(|s| s.id == id).map_or(0, |s| s.level)
}

/// Career xp share for a branch level, from the tier table.
fn career_pct(level: u8) -> f64 {
    if level == 0 {
        return 0.0;
    }
    let index = usize::from(level - 1).min(CAREER_XP_PCT.len() - 1);
    CAREER_XP_PCT[index]
}

/// Career xp share at `level` as a whole-number percent, for display.
#[must_use]
pub fn career_xp_percent(level: u8) -> u32 {
    u32::try_from(floor_f64_to_i64(career_pct(level) * 100.0)).unwrap_or(0)
}

/// Financial gold bonus at `level` as a whole-number percent, for display.
#[must_use]
pub fn financial_gold_percent(level: u8) -> u32 {
    let pct = f64::from(level) * FINANCIAL_GOLD_PCT_PER_LEVEL * 100.0;
    u32::try_from(floor_f64_to_i64(pct)).unwrap_or(0)
}

#[must_use]
pub fn calculate_rewards(difficulty: Difficulty, skills: &[Skill], booster: bool) -> Reward {
    let (base_hp, base_xp, base_gold) = match difficulty {
        Difficulty::Easy => REWARD_EASY,
        Difficulty::Medium => REWARD_MEDIUM,
        Difficulty::Hard => REWARD_HARD,
    };
    let physical = i32::from(branch_level(skills, SkillId::S1));
    let career = career_pct(branch_level(skills, SkillId::S4));
    let financial = f64::from(branch_level(skills, SkillId::S6));

    let bonus_xp = floor_f64_to_i64(i64_to_f64(base_xp) * career);
    let mut xp = floor_f64_to_i64(i64_to_f64(base_xp) * (1.0 + career));
    let gold = floor_f64_to_i64(
        i64_to_f64(base_gold) * (1.0 + financial * FINANCIAL_GOLD_PCT_PER_LEVEL),
    );
    let hp = base_hp + physical * REWARD_HP_PER_PHYSICAL_LEVEL;
    if booster {
        xp *= BOOSTER_XP_MULTIPLIER;
    }
    Reward {
        hp,
        xp,
        gold,
        bonus_xp,
    }
}

/// Settles pending level-ups, carrying leftover xp across each step.
/// Always leaves `xp_to_next_level` consistent with `level`.
pub fn resolve_level_ups(state: &mut GameState) -> u32 {
    let mut gained = 0;
    let mut target = xp_for_level(state.level);
    while state.xp >= target {
        state.xp -= target;
        state.level += 1;
        state.perk_points += 1;
        gained += 1;
        target = xp_for_level(state.level);
    }
    state.xp_to_next_level = target;
    gained
}

/// Max hp for a Physical branch level: 100/125/150/200.
#[must_use]
pub fn max_hp_for(physical_level: u8) -> i32 {
    let tiers = usize::from(physical_level).min(MAX_HP_TIER_BONUS.len());
    BASE_MAX_HP + MAX_HP_TIER_BONUS[..tiers].iter().sum::<i32>()
}
