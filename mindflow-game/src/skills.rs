//! Perk point spending on the six skill branches.

use thiserror::Error;

use crate::catalog::SKILL_TIER_COSTS;
use crate::constants::SKILL_LEVEL_CAP;
use crate::state::{GameState, SkillId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("skill is already at max level")]
    MaxedOut,
    #[error("not enough perk points: need {required}, have {available}")]
    NotEnoughPerkPoints { required: i32, available: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillUpgrade {
    pub skill: SkillId,
    pub level: u8,
    pub cost: i32,
    /// True when the upgrade raised `max_hp` (Physical tiers heal to full).
    pub max_hp_raised: bool,
}

/// Raises one skill by exactly one level in exchange for perk points.
pub fn upgrade_skill(state: &mut GameState, id: SkillId) -> Result<SkillUpgrade, SkillError> {
    let level = state.skill_level(id);
    if level >= SKILL_LEVEL_CAP {
        return Err(SkillError::MaxedOut);
    }
    let cost = i32::from(SKILL_TIER_COSTS[usize::from(level)]);
    if state.perk_points < cost {
        return Err(SkillError::NotEnoughPerkPoints {
            required: cost,
            available: state.perk_points,
        });
    }
    state.perk_points -= cost;
    for skill in &mut state.skills {
        if skill.id == id {
            skill.level = level + 1;
        }
    }
    let max_hp_raised = state.recompute_max_hp();
    Ok(SkillUpgrade {
        skill: id,
        level: level + 1,
        cost,
        max_hp_raised,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_tier_raises_and_refills_hp() {
        let mut state = GameState::new_game(1, "2024-03-01");
        state.perk_points = 1;
        state.hp = 40;
        let upgrade = upgrade_skill(&mut state, SkillId::S1).expect("upgrade");
        assert_eq!(
            upgrade,
            SkillUpgrade {
                skill: SkillId::S1,
                level: 1,
                cost: 1,
                max_hp_raised: true
            }
        );
        assert_eq!(state.perk_points, 0);
        assert_eq!(state.skill_level(SkillId::S1), 1);
        assert_eq!(state.max_hp, 125);
        assert_eq!(state.hp, 125);
    }

    #[test]
    fn other_branches_leave_hp_alone() {
        let mut state = GameState::new_game(1, "2024-03-01");
        state.perk_points = 1;
        state.hp = 40;
        let upgrade = upgrade_skill(&mut state, SkillId::S3).expect("upgrade");
        assert!(!upgrade.max_hp_raised);
        assert_eq!(state.max_hp, 100);
        assert_eq!(state.hp, 40);
    }

    #[test]
    fn rejects_without_points() {
        let mut state = GameState::new_game(1, "2024-03-01");
        assert_eq!(
            upgrade_skill(&mut state, SkillId::S2),
            Err(SkillError::NotEnoughPerkPoints {
                required: 1,
                available: 0
            })
        );
        assert_eq!(state.skill_level(SkillId::S2), 0);
    }

    #[test]
    fn rejects_past_the_cap() {
        let mut state = GameState::new_game(1, "2024-03-01");
        state.perk_points = 4;
        for _ in 0..3 {
            upgrade_skill(&mut state, SkillId::S5).expect("upgrade");
        }
        assert_eq!(state.skill_level(SkillId::S5), 3);
        assert_eq!(upgrade_skill(&mut state, SkillId::S5), Err(SkillError::MaxedOut));
        assert_eq!(state.perk_points, 1);
    }
}
