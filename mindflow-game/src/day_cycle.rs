//! Day rollover: nightly accounting, streak upkeep and bundle expiry.
//!
//! Days close one at a time. Catching up after an absence replays the
//! same nightly close once per elapsed day, so a long gap costs exactly
//! what the same gap would have cost while watching the clock.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::catalog;
use crate::constants::{
    AVOIDED_BAD_BONUS, LOG_DAY_FREEZE_USED, LOG_DAY_PENALTY, LOG_DAY_STREAK, LOG_DAY_STREAK_LOST,
    LOG_TEMPLATE_EXPIRED, LOG_TEMPLATE_PENALTY, MISSED_PENALTY_DIVISOR, STREAK_REWARD_BASE,
    STREAK_REWARD_CAP, STREAK_REWARD_STEP, TEMPLATE_ACTIVE_DAYS, TEMPLATE_PENALTY_MULTIPLIER,
};
use crate::progression::calculate_rewards;
use crate::state::{day_key, parse_day, GameState, HabitKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvanceError {
    #[error("invalid day key: {0}")]
    InvalidDate(String),
}

/// Everything one nightly close did, for the UI to narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCloseSummary {
    pub closed_date: String,
    pub new_date: String,
    pub hp_penalty: i32,
    pub gold_penalty: i64,
    pub streak_reward: i64,
    pub avoided_bonus: i64,
    pub streak: u32,
    pub freeze_consumed: bool,
    pub streak_lost: bool,
    pub expired_bundles: Vec<String>,
    pub dropped_bundles: Vec<String>,
    pub bundle_penalty: i64,
}

/// Closes the current day and lands on the next one.
pub fn advance_one_day(state: &mut GameState) -> Result<DayCloseSummary, AdvanceError> {
    let closed = state.simulated_date.clone();
    let closed_day =
        parse_day(&closed).ok_or_else(|| AdvanceError::InvalidDate(closed.clone()))?;
    let next_day = closed_day
        .succ_opt()
        .ok_or_else(|| AdvanceError::InvalidDate(closed.clone()))?;
    Ok(close_day(state, &closed, closed_day, &day_key(next_day)))
}

/// Replays nightly closes until the state reaches `target`. A target on
/// or before the current day is a no-op, so the catch-up check can run
/// on every tick.
pub fn advance_to(
    state: &mut GameState,
    target: &str,
) -> Result<Vec<DayCloseSummary>, AdvanceError> {
    let target_day =
        parse_day(target).ok_or_else(|| AdvanceError::InvalidDate(target.to_string()))?;
    let mut summaries = Vec::new();
    loop {
        let current = parse_day(&state.simulated_date)
            .ok_or_else(|| AdvanceError::InvalidDate(state.simulated_date.clone()))?;
        if current >= target_day {
            break;
        }
        summaries.push(advance_one_day(state)?);
    }
    Ok(summaries)
}

fn close_day(
    state: &mut GameState,
    closed: &str,
    closed_day: NaiveDate,
    next: &str,
) -> DayCloseSummary {
    let actions = state.history_for(closed).to_vec();

    let mut hp_penalty = 0_i32;
    let mut gold_penalty = 0_i64;
    for habit in state.habits.iter().filter(|h| h.kind == HabitKind::Good) {
        if !actions.iter().any(|id| id == &habit.id) {
            let reward = calculate_rewards(habit.difficulty, &state.skills, false);
            hp_penalty += reward.hp / 2;
            gold_penalty += reward.gold / MISSED_PENALTY_DIVISOR;
        }
    }

    let done_good = state
        .habits
        .iter()
        .any(|h| h.kind == HabitKind::Good && actions.iter().any(|id| id == &h.id));
    let avoided_bad = state
        .habits
        .iter()
        .filter(|h| h.kind == HabitKind::Bad && !actions.iter().any(|id| id == &h.id))
        .count();

    let mut streak_reward = 0_i64;
    let mut avoided_bonus = 0_i64;
    let mut freeze_consumed = false;
    let mut streak_lost = false;
    if done_good || avoided_bad > 0 {
        state.login_streak += 1;
        streak_reward = (STREAK_REWARD_BASE + STREAK_REWARD_STEP * i64::from(state.login_streak))
            .min(STREAK_REWARD_CAP);
        if avoided_bad > 0 {
            avoided_bonus = AVOIDED_BAD_BONUS * i64::try_from(avoided_bad).unwrap_or(0);
        }
    } else if state.inventory.freeze_charges > 0 {
        state.inventory.freeze_charges -= 1;
        freeze_consumed = true;
    } else {
        state.login_streak = 0;
        streak_lost = true;
    }

    state.hp = (state.hp - hp_penalty).max(0);
    state.gold = (state.gold + streak_reward + avoided_bonus - gold_penalty).max(0);
    state.simulated_date = next.to_string();
    state.last_login_date = next.to_string();
    // The one-freeze-per-day purchase window resets with the date.
    state.inventory.last_freeze_date = None;

    if hp_penalty > 0 {
        state.logs.push(LOG_DAY_PENALTY.to_string());
    }
    if streak_reward > 0 {
        state.logs.push(LOG_DAY_STREAK.to_string());
    }
    if freeze_consumed {
        state.logs.push(LOG_DAY_FREEZE_USED.to_string());
    }
    if streak_lost {
        state.logs.push(LOG_DAY_STREAK_LOST.to_string());
    }

    let (expired_bundles, dropped_bundles, bundle_penalty) = sweep_bundles(state, closed_day);

    DayCloseSummary {
        closed_date: closed.to_string(),
        new_date: next.to_string(),
        hp_penalty,
        gold_penalty,
        streak_reward,
        avoided_bonus,
        streak: state.login_streak,
        freeze_consumed,
        streak_lost,
        expired_bundles,
        dropped_bundles,
        bundle_penalty,
    }
}

/// Retires bundles whose week is over, and drops a bundle early with a
/// double-price fine when any of its habits slipped on the closed day.
fn sweep_bundles(state: &mut GameState, yesterday: NaiveDate) -> (Vec<String>, Vec<String>, i64) {
    let Some(now) = parse_day(&state.simulated_date) else {
        return (Vec::new(), Vec::new(), 0);
    };
    let yesterday_key = day_key(yesterday);

    let owned = state.inventory.purchased_templates.clone();
    let mut expired = Vec::new();
    let mut dropped = Vec::new();
    let mut penalty = 0_i64;
    for id in owned {
        let expiry = state
            .inventory
            .template_expiry
            .get(&id)
            .and_then(|raw| parse_day(raw));
        let Some(expiry) = expiry else {
            // No usable expiry record; retire quietly.
            remove_bundle(state, &id);
            continue;
        };
        if now > expiry {
            remove_bundle(state, &id);
            state.logs.push(LOG_TEMPLATE_EXPIRED.to_string());
            expired.push(id);
            continue;
        }

        let Some(purchase_day) = expiry.checked_sub_days(Days::new(TEMPLATE_ACTIVE_DAYS)) else {
            continue;
        };
        if yesterday < purchase_day {
            continue;
        }
        let mut has_members = false;
        let mut missed_good = false;
        let mut triggered_bad = false;
        {
            let actions = state.history_for(&yesterday_key);
            for habit in state
                .habits
                .iter()
                .filter(|h| h.template_id.as_deref() == Some(id.as_str()))
            {
                has_members = true;
                let acted = actions.iter().any(|a| a == &habit.id);
                match habit.kind {
                    HabitKind::Good if !acted => missed_good = true,
                    HabitKind::Bad if acted => triggered_bad = true,
                    _ => {}
                }
            }
        }
        if has_members && (missed_good || triggered_bad) {
            remove_bundle(state, &id);
            penalty += catalog::bundle(&id).map_or(0, |b| b.price) * TEMPLATE_PENALTY_MULTIPLIER;
            state.logs.push(LOG_TEMPLATE_PENALTY.to_string());
            dropped.push(id);
        }
    }

    if penalty > 0 {
        state.gold = (state.gold - penalty).max(0);
    }
    (expired, dropped, penalty)
}

fn remove_bundle(state: &mut GameState, bundle_id: &str) {
    state
        .habits
        .retain(|h| h.template_id.as_deref() != Some(bundle_id));
    state
        .inventory
        .purchased_templates
        .retain(|t| t != bundle_id);
    state.inventory.template_expiry.remove(bundle_id);
}
