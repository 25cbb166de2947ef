use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::achievements::AchievementId;
use crate::catalog;
use crate::constants::{
    BASE_MAX_HP, CONGRAT_MESSAGE_COUNT, DEBUG_GRANT_GOLD, DEBUG_GRANT_XP, HABIT_ROSTER_MAX,
    HABIT_ROSTER_MIN, INITIAL_GOLD, INITIAL_LOGIN_STREAK, LOG_CONGRAT_PREFIX, LOG_DAY_REPAIRED,
    LOG_REGRET_PREFIX, LOG_REVIVED, REGRET_MESSAGE_COUNT, REVIVE_COST_RATE,
};
use crate::numbers::{floor_f64_to_i64, i64_to_f64};
use crate::progression::{calculate_rewards, resolve_level_ups, xp_for_level};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub(crate) const EPOCH_DAY: &str = "2024-01-01";
const SEED_HABIT_COUNT: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    #[default]
    Good,
    Bad,
}

impl HabitKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for HabitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            _ => Err(()),
        }
    }
}

impl From<HabitKind> for String {
    fn from(value: HabitKind) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillId {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
}

impl SkillId {
    pub const ALL: [Self; 6] = [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5, Self::S6];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S1 => "s1",
            Self::S2 => "s2",
            Self::S3 => "s3",
            Self::S4 => "s4",
            Self::S5 => "s5",
            Self::S6 => "s6",
        }
    }

    /// Stable branch key used for i18n lookups and decoration requirements.
    #[must_use]
    pub const fn branch(self) -> &'static str {
        match self {
            Self::S1 => "physical",
            Self::S2 => "mental",
            Self::S3 => "social",
            Self::S4 => "career",
            Self::S5 => "creative",
            Self::S6 => "financial",
        }
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s1" => Ok(Self::S1),
            "s2" => Ok(Self::S2),
            "s3" => Ok(Self::S3),
            "s4" => Ok(Self::S4),
            "s5" => Ok(Self::S5),
            "s6" => Ok(Self::S6),
            _ => Err(()),
        }
    }
}

impl From<SkillId> for String {
    fn from(value: SkillId) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Cozy,
    Dark,
    Minimal,
}

impl ThemeId {
    pub const ALL: [Self; 3] = [Self::Cozy, Self::Dark, Self::Minimal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cozy => "cozy",
            Self::Dark => "dark",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cozy" => Ok(Self::Cozy),
            "dark" => Ok(Self::Dark),
            "minimal" => Ok(Self::Minimal),
            _ => Err(()),
        }
    }
}

impl From<ThemeId> for String {
    fn from(value: ThemeId) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Self::Tr),
            "en" => Ok(Self::En),
            _ => Err(()),
        }
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.as_str().to_string()
    }
}

/// A tracked habit, either one to build or one to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub kind: HabitKind,
    pub difficulty: Difficulty,
    /// Set when the habit arrived as part of a purchased bundle.
    #[serde(default)]
    pub template_id: Option<String>,
}

/// Progress in one of the six skill branches. Costs and caps live in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    #[serde(default)]
    pub level: u8,
}

fn default_owned_themes() -> Vec<ThemeId> {
    ThemeId::ALL.to_vec()
}

/// Consumables, bundles, decorations and themes the player holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub booster_charges: i32,
    #[serde(default)]
    pub booster_bought: u32,
    #[serde(default)]
    pub booster_used: u32,
    #[serde(default)]
    pub freeze_charges: i32,
    #[serde(default)]
    pub freeze_bought: u32,
    /// Day key of the last freeze purchase; caps freezes at one per day.
    #[serde(default)]
    pub last_freeze_date: Option<String>,
    #[serde(default)]
    pub purchased_templates: Vec<String>,
    /// Bundle id -> day key after which the bundle's habits expire.
    #[serde(default)]
    pub template_expiry: BTreeMap<String, String>,
    #[serde(default)]
    pub owned_decorations: Vec<String>,
    /// Slot category -> equipped decoration id. Absent key means an empty slot.
    #[serde(default)]
    pub active_decorations: BTreeMap<String, String>,
    #[serde(default = "default_owned_themes")]
    pub owned_themes: Vec<ThemeId>,
    #[serde(default)]
    pub active_theme: ThemeId,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            booster_charges: 0,
            booster_bought: 0,
            booster_used: 0,
            freeze_charges: 0,
            freeze_bought: 0,
            last_freeze_date: None,
            purchased_templates: Vec::new(),
            template_expiry: BTreeMap::new(),
            owned_decorations: Vec::new(),
            active_decorations: BTreeMap::new(),
            owned_themes: default_owned_themes(),
            active_theme: ThemeId::default(),
        }
    }
}

impl Inventory {
    #[must_use]
    pub fn owns_decoration(&self, id: &str) -> bool {
        self.owned_decorations.iter().any(|d| d == id)
    }

    #[must_use]
    pub fn owns_template(&self, id: &str) -> bool {
        self.purchased_templates.iter().any(|t| t == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("habits cannot be triggered while defeated")]
    Defeated,
    #[error("habit already recorded for today")]
    AlreadyTriggered,
    #[error("unknown habit: {0}")]
    UnknownHabit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviveError {
    #[error("cannot revive while still standing")]
    NotDefeated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    #[error("no freeze charges available")]
    NoFreezeCharges,
    #[error("invalid day key: {0}")]
    InvalidDate(String),
    #[error("only past days can be repaired")]
    NotInPast,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitEditError {
    #[error("habit name cannot be empty")]
    EmptyName,
    #[error("habit roster is full")]
    RosterFull,
    #[error("habit roster cannot shrink further")]
    RosterAtMinimum,
    #[error("bundle habits cannot be edited")]
    TemplateManaged,
    #[error("unknown habit: {0}")]
    UnknownHabit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme is not owned: {0}")]
    NotOwned(ThemeId),
}

/// What a single habit trigger did to the state, for the UI to narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerOutcome {
    pub kind: HabitKind,
    pub hp_delta: i32,
    pub xp_gained: i64,
    pub bonus_xp: i64,
    pub gold_gained: i64,
    pub levels_gained: u32,
    pub booster_spent: bool,
    pub booster_charges_left: i32,
    /// Regret key for bad habits, congratulation key when the day completes.
    pub message_key: Option<String>,
    pub all_good_done: bool,
}

fn default_login_streak() -> u32 {
    INITIAL_LOGIN_STREAK
}

fn default_day() -> String {
    String::from(EPOCH_DAY)
}

fn default_habit_seq() -> u64 {
    SEED_HABIT_COUNT + 1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Migration cursor; bumped by the save chain, never by gameplay.
    #[serde(default)]
    pub save_version: u32,
    pub seed: u64,
    pub hp: i32,
    pub max_hp: i32,
    pub xp: i64,
    /// Always recomputed from `level` on load, never trusted from a save.
    pub xp_to_next_level: i64,
    pub level: i32,
    #[serde(default)]
    pub perk_points: i32,
    pub gold: i64,
    pub habits: Vec<Habit>,
    #[serde(default = "catalog::default_skills")]
    pub skills: Vec<Skill>,
    /// Day key -> habit ids triggered that day.
    #[serde(default)]
    pub history: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default = "default_login_streak")]
    pub login_streak: u32,
    /// The engine's current day, advanced one rollover at a time.
    #[serde(default = "default_day")]
    pub simulated_date: String,
    #[serde(default)]
    pub last_login_date: String,
    #[serde(default)]
    pub unlocked_achievements: Vec<AchievementId>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub logo_clicks: u32,
    #[serde(default = "default_habit_seq")]
    pub habit_seq: u64,
    pub logs: Vec<String>,
    #[serde(skip)]
    pub rng: Option<ChaCha20Rng>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            save_version: crate::save::CURRENT_SAVE_VERSION,
            seed: 0,
            hp: BASE_MAX_HP,
            max_hp: BASE_MAX_HP,
            xp: 0,
            xp_to_next_level: xp_for_level(1),
            level: 1,
            perk_points: 0,
            gold: INITIAL_GOLD,
            habits: catalog::seed_habits(Language::default()),
            skills: catalog::default_skills(),
            history: BTreeMap::new(),
            inventory: Inventory::default(),
            login_streak: default_login_streak(),
            simulated_date: default_day(),
            last_login_date: default_day(),
            unlocked_achievements: Vec::new(),
            language: Language::default(),
            logo_clicks: 0,
            habit_seq: default_habit_seq(),
            logs: Vec::new(),
            rng: None,
        }
    }
}

impl GameState {
    /// Fresh state anchored to the supplied day, with a seeded flavor RNG.
    #[must_use]
    pub fn new_game(seed: u64, today: &str) -> Self {
        Self {
            seed,
            simulated_date: today.to_string(),
            last_login_date: today.to_string(),
            rng: Some(ChaCha20Rng::seed_from_u64(seed)),
            ..Self::default()
        }
    }

    /// Reseeds the flavor RNG after deserialization.
    pub fn ensure_rng(&mut self) {
        if self.rng.is_none() {
            self.rng = Some(ChaCha20Rng::seed_from_u64(self.seed));
        }
    }

    #[must_use]
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn good_habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(|h| h.kind == HabitKind::Good)
    }

    pub fn bad_habits(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter().filter(|h| h.kind == HabitKind::Bad)
    }

    #[must_use]
    pub fn history_for(&self, date: &str) -> &[String] {
        self.history.get(date).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_triggered_on(&self, date: &str, habit_id: &str) -> bool {
        self.history_for(date).iter().any(|id| id == habit_id)
    }

    #[must_use]
    pub fn skill_level(&self, id: SkillId) -> u8 {
        self.skills
            .iter()
            .find(|s| s.id == id)
            .map_or(0, |s| s.level)
    }

    #[must_use]
    pub fn completed_good_today(&self) -> usize {
        let today = self.history_for(&self.simulated_date);
        self.good_habits()
            .filter(|h| today.iter().any(|id| id == &h.id))
            .count()
    }

    #[must_use]
    pub fn all_good_done_today(&self) -> bool {
        let today = self.history_for(&self.simulated_date);
        let mut any = false;
        for habit in self.good_habits() {
            any = true;
            if !today.iter().any(|id| id == &habit.id) {
                return false;
            }
        }
        any
    }

    /// Re-derives `max_hp` from the Physical branch. A change refills hp.
    pub fn recompute_max_hp(&mut self) -> bool {
        let target = crate::progression::max_hp_for(self.skill_level(SkillId::S1));
        if target == self.max_hp {
            return false;
        }
        self.max_hp = target;
        self.hp = target;
        true
    }

    /// Adds xp and settles any level-ups. Returns levels gained.
    pub fn grant_xp(&mut self, amount: i64) -> u32 {
        self.xp += amount;
        resolve_level_ups(self)
    }

    pub fn trigger_habit(&mut self, habit_id: &str) -> Result<TriggerOutcome, TriggerError> {
        if self.hp <= 0 {
            return Err(TriggerError::Defeated);
        }
        let (kind, difficulty) = self
            .habits
            .iter()
            .find(|h| h.id == habit_id)
            .map(|h| (h.kind, h.difficulty))
            .ok_or_else(|| TriggerError::UnknownHabit(habit_id.to_string()))?;
        let today = self.simulated_date.clone();
        if self.is_triggered_on(&today, habit_id) {
            return Err(TriggerError::AlreadyTriggered);
        }

        // A held booster charge is spent on any trigger, good or bad.
        let booster_spent = self.inventory.booster_charges > 0;
        let reward = calculate_rewards(difficulty, &self.skills, booster_spent);
        if booster_spent {
            self.inventory.booster_charges -= 1;
            self.inventory.booster_used += 1;
        }
        self.history.entry(today).or_default().push(habit_id.to_string());

        let mut xp_gained = 0;
        let mut gold_gained = 0;
        let mut levels_gained = 0;
        let mut message_key = None;
        let hp_before = self.hp;
        match kind {
            HabitKind::Good => {
                self.hp = (self.hp + reward.hp).min(self.max_hp);
                self.gold += reward.gold;
                gold_gained = reward.gold;
                xp_gained = reward.xp;
                levels_gained = self.grant_xp(reward.xp);
            }
            HabitKind::Bad => {
                self.hp = (self.hp - reward.hp).max(0);
                message_key = Some(self.pick_message_key(LOG_REGRET_PREFIX, REGRET_MESSAGE_COUNT));
            }
        }
        let hp_delta = self.hp - hp_before;

        let all_good_done = kind == HabitKind::Good && self.all_good_done_today();
        if all_good_done {
            message_key = Some(self.pick_message_key(LOG_CONGRAT_PREFIX, CONGRAT_MESSAGE_COUNT));
        }

        Ok(TriggerOutcome {
            kind,
            hp_delta,
            xp_gained,
            bonus_xp: reward.bonus_xp,
            gold_gained,
            levels_gained,
            booster_spent,
            booster_charges_left: self.inventory.booster_charges,
            message_key,
            all_good_done,
        })
    }

    /// What a revive would cost right now. Free when broke.
    #[must_use]
    pub fn revive_cost(&self) -> i64 {
        floor_f64_to_i64(i64_to_f64(self.gold) * REVIVE_COST_RATE)
    }

    /// Pays out of current gold to restore full hp.
    pub fn revive(&mut self) -> Result<i64, ReviveError> {
        if self.hp > 0 {
            return Err(ReviveError::NotDefeated);
        }
        let cost = self.revive_cost();
        self.gold -= cost;
        self.hp = self.max_hp;
        self.logs.push(LOG_REVIVED.to_string());
        Ok(cost)
    }

    /// Spends a freeze charge to rewrite a past day as fully completed.
    pub fn repair_day(&mut self, date: &str) -> Result<(), RepairError> {
        if self.inventory.freeze_charges <= 0 {
            return Err(RepairError::NoFreezeCharges);
        }
        let day = parse_day(date).ok_or_else(|| RepairError::InvalidDate(date.to_string()))?;
        let today = parse_day(&self.simulated_date)
            .ok_or_else(|| RepairError::InvalidDate(self.simulated_date.clone()))?;
        if day >= today {
            return Err(RepairError::NotInPast);
        }
        self.inventory.freeze_charges -= 1;
        let good_ids: Vec<String> = self.good_habits().map(|h| h.id.clone()).collect();
        self.history.insert(date.to_string(), good_ids);
        self.logs.push(LOG_DAY_REPAIRED.to_string());
        Ok(())
    }

    pub fn add_habit(
        &mut self,
        name: &str,
        kind: HabitKind,
        difficulty: Difficulty,
    ) -> Result<String, HabitEditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitEditError::EmptyName);
        }
        if self.habits.len() >= HABIT_ROSTER_MAX {
            return Err(HabitEditError::RosterFull);
        }
        let id = self.next_habit_id();
        self.habits.push(Habit {
            id: id.clone(),
            name: name.to_string(),
            kind,
            difficulty,
            template_id: None,
        });
        Ok(id)
    }

    pub fn update_habit(
        &mut self,
        id: &str,
        name: &str,
        kind: HabitKind,
        difficulty: Difficulty,
    ) -> Result<(), HabitEditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitEditError::EmptyName);
        }
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| HabitEditError::UnknownHabit(id.to_string()))?;
        if habit.template_id.is_some() {
            return Err(HabitEditError::TemplateManaged);
        }
        habit.name = name.to_string();
        habit.kind = kind;
        habit.difficulty = difficulty;
        Ok(())
    }

    pub fn delete_habit(&mut self, id: &str) -> Result<(), HabitEditError> {
        if self.habits.len() <= HABIT_ROSTER_MIN {
            return Err(HabitEditError::RosterAtMinimum);
        }
        let index = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| HabitEditError::UnknownHabit(id.to_string()))?;
        self.habits.remove(index);
        Ok(())
    }

    pub(crate) fn next_habit_id(&mut self) -> String {
        let id = format!("h{}", self.habit_seq);
        self.habit_seq += 1;
        id
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_theme(&mut self, theme: ThemeId) -> Result<(), ThemeError> {
        if !self.inventory.owned_themes.contains(&theme) {
            return Err(ThemeError::NotOwned(theme));
        }
        self.inventory.active_theme = theme;
        Ok(())
    }

    pub fn register_logo_click(&mut self) -> u32 {
        self.logo_clicks = self.logo_clicks.saturating_add(1);
        self.logo_clicks
    }

    /// Developer shortcut behind the debug panel. Returns levels gained.
    pub fn debug_grant_resources(&mut self) -> u32 {
        self.gold += DEBUG_GRANT_GOLD;
        self.grant_xp(DEBUG_GRANT_XP)
    }

    pub fn clamp_vitals(&mut self) {
        self.hp = self.hp.clamp(0, self.max_hp);
        if self.gold < 0 {
            self.gold = 0;
        }
        if self.xp < 0 {
            self.xp = 0;
        }
    }

    /// Picks `prefix{n}` with the session RNG; falls back to index 0 without one.
    pub fn pick_message_key(&mut self, prefix: &str, count: u32) -> String {
        let index = match self.rng.as_mut() {
            Some(rng) => rng.gen_range(0..count),
            None => 0,
        };
        format!("{prefix}{index}")
    }
}

pub(crate) fn parse_day(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()
}

pub(crate) fn day_key(day: chrono::NaiveDate) -> String {
    day.format(DATE_KEY_FORMAT).to_string()
}
