//! Versioned save migration and the import/export codec.
//!
//! Saves carry a `save_version` cursor. Loading runs every migration
//! step from that cursor up to [`CURRENT_SAVE_VERSION`]; each step is
//! total and safe to rerun, so decoding the same blob twice converges.

use serde_json::Value;
use thiserror::Error;

use crate::progression::xp_for_level;
use crate::state::{parse_day, GameState, Skill, SkillId, ThemeId, EPOCH_DAY};

pub const CURRENT_SAVE_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("save data is not valid json: {0}")]
    Malformed(String),
    #[error("save data is missing numeric hp and gold")]
    MissingVitals,
}

/// Serializes a state for storage or clipboard export.
pub fn encode(state: &GameState) -> Result<String, SaveError> {
    serde_json::to_string(state).map_err(|err| SaveError::Malformed(err.to_string()))
}

/// Parses a save blob and lifts it to the current version. Used both by
/// the storage backends and by paste-import, so a foreign blob gets the
/// same vetting as our own.
pub fn decode(raw: &str) -> Result<GameState, SaveError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| SaveError::Malformed(err.to_string()))?;
    let has_vitals = value.get("hp").is_some_and(Value::is_number)
        && value.get("gold").is_some_and(Value::is_number);
    if !has_vitals {
        return Err(SaveError::MissingVitals);
    }
    let mut state: GameState =
        serde_json::from_value(value).map_err(|err| SaveError::Malformed(err.to_string()))?;
    migrate(&mut state);
    Ok(state)
}

/// Runs the numbered migration steps up to the current version.
pub fn migrate(state: &mut GameState) {
    while state.save_version < CURRENT_SAVE_VERSION {
        match state.save_version {
            0 => normalize_legacy(state),
            1 => recompute_derived(state),
            _ => {}
        }
        state.save_version += 1;
    }
}

/// v0 -> v1: repair fields older builds left loose.
fn normalize_legacy(state: &mut GameState) {
    let saved = std::mem::take(&mut state.skills);
    state.skills = SkillId::ALL
        .into_iter()
        .map(|id| Skill {
            id,
            level: saved
                .iter()
                .find(|skill| skill.id == id)
                .map_or(0, |skill| skill.level),
        })
        .collect();

    let max_suffix = state
        .habits
        .iter()
        .filter_map(|habit| habit.id.strip_prefix('h'))
        .filter_map(|digits| digits.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    state.habit_seq = state.habit_seq.max(max_suffix.saturating_add(1));

    if state.login_streak == 0 {
        state.login_streak = 1;
    }
    if state.inventory.owned_themes.is_empty() {
        state.inventory.owned_themes = ThemeId::ALL.to_vec();
    }
    if parse_day(&state.simulated_date).is_none() {
        state.simulated_date = EPOCH_DAY.to_string();
    }
}

/// v1 -> v2: derived numbers are recomputed instead of trusted.
fn recompute_derived(state: &mut GameState) {
    state.xp_to_next_level = xp_for_level(state.level);
    state.recompute_max_hp();
    state.clamp_vitals();
}
