//! Read-only statistics derived from the trigger history.

use chrono::Days;

use crate::constants::{
    ACTIVITY_MONTH_DAYS, ACTIVITY_WEEK_DAYS, AVOIDANCE_LOOKBACK_DAYS, HABIT_STREAK_LOOKBACK_DAYS,
    REPAIR_CANDIDATE_DAYS, STREAK_REWARD_BASE, STREAK_REWARD_CAP, STREAK_REWARD_STEP,
};
use crate::state::{day_key, parse_day, GameState, HabitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityWindow {
    #[default]
    Week,
    Month,
}

impl ActivityWindow {
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Week => ACTIVITY_WEEK_DAYS,
            Self::Month => ACTIVITY_MONTH_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPoint {
    pub day: String,
    pub net: i32,
}

/// Daily net score over the window ending at the simulated date, oldest
/// day first. Good triggers score +1, bad triggers -1, ids of deleted
/// habits score nothing.
#[must_use]
pub fn activity_series(state: &GameState, window: ActivityWindow) -> Vec<ActivityPoint> {
    let Some(today) = parse_day(&state.simulated_date) else {
        return Vec::new();
    };
    let mut series = Vec::new();
    for offset in (0..window.days()).rev() {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        let key = day_key(day);
        let net = net_score(state, &key);
        series.push(ActivityPoint { day: key, net });
    }
    series
}

fn net_score(state: &GameState, day: &str) -> i32 {
    let mut score = 0;
    for id in state.history_for(day) {
        match state.habit(id).map(|habit| habit.kind) {
            Some(HabitKind::Good) => score += 1,
            Some(HabitKind::Bad) => score -= 1,
            None => {}
        }
    }
    score
}

/// Consecutive triggered days ending at the simulated date. An
/// untriggered today does not break the chain, it just does not count.
#[must_use]
pub fn habit_streak(state: &GameState, habit_id: &str) -> u32 {
    let Some(today) = parse_day(&state.simulated_date) else {
        return 0;
    };
    let mut streak = 0;
    for offset in 0..HABIT_STREAK_LOOKBACK_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if state.is_triggered_on(&day_key(day), habit_id) {
            streak += 1;
        } else if offset == 0 {
            continue;
        } else {
            break;
        }
    }
    streak
}

/// Consecutive untriggered days counting back from today inclusive.
#[must_use]
pub fn avoidance_days(state: &GameState, habit_id: &str) -> u32 {
    let Some(today) = parse_day(&state.simulated_date) else {
        return 0;
    };
    let mut days = 0;
    for offset in 0..AVOIDANCE_LOOKBACK_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if state.is_triggered_on(&day_key(day), habit_id) {
            break;
        }
        days += 1;
    }
    days
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HabitDistribution {
    pub good: usize,
    pub bad: usize,
}

impl HabitDistribution {
    #[must_use]
    pub const fn total(self) -> usize {
        self.good + self.bad
    }
}

#[must_use]
pub fn distribution(state: &GameState) -> HabitDistribution {
    HabitDistribution {
        good: state.good_habits().count(),
        bad: state.bad_habits().count(),
    }
}

/// Gold the next day close will pay if the streak survives it.
#[must_use]
pub fn next_streak_reward(state: &GameState) -> i64 {
    let next = i64::from(state.login_streak) + 1;
    (STREAK_REWARD_BASE + STREAK_REWARD_STEP * next).min(STREAK_REWARD_CAP)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMark {
    pub day: String,
    pub done: bool,
}

/// Last seven days of one habit, oldest first.
#[must_use]
pub fn completion_dots(state: &GameState, habit_id: &str) -> Vec<DayMark> {
    let Some(today) = parse_day(&state.simulated_date) else {
        return Vec::new();
    };
    let mut marks = Vec::new();
    for offset in (0..ACTIVITY_WEEK_DAYS).rev() {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            continue;
        };
        let key = day_key(day);
        let done = state.is_triggered_on(&key, habit_id);
        marks.push(DayMark { day: key, done });
    }
    marks
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairCandidate {
    pub day: String,
    pub days_ago: u64,
}

/// The recent past days a streak freeze may rewrite, most recent first.
/// A day is offered unless every good habit was done and no bad one was.
#[must_use]
pub fn repair_candidates(state: &GameState) -> Vec<RepairCandidate> {
    let Some(today) = parse_day(&state.simulated_date) else {
        return Vec::new();
    };
    let mut candidates = Vec::new();
    for days_ago in 1..=REPAIR_CANDIDATE_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(days_ago)) else {
            break;
        };
        let key = day_key(day);
        if !is_perfect_day(state, &key) {
            candidates.push(RepairCandidate { day: key, days_ago });
        }
    }
    candidates
}

fn is_perfect_day(state: &GameState, day: &str) -> bool {
    let all_good_done = state
        .good_habits()
        .all(|habit| state.is_triggered_on(day, &habit.id));
    let any_bad_done = state
        .bad_habits()
        .any(|habit| state.is_triggered_on(day, &habit.id));
    all_good_done && !any_bad_done
}
