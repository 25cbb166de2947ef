//! Store pricing and purchases: consumables, habit bundles and room
//! decorations. Repeat purchases inflate consumable prices and the
//! Social branch discounts everything.

use chrono::Days;
use thiserror::Error;

use crate::catalog::{self, DecorationDef};
use crate::constants::{
    BOOSTER_BASE_PRICE, BOOSTER_CHARGES_PER_PURCHASE, HABIT_ROSTER_MAX, POTION_BASE_PRICE,
    POTION_PRICE_PER_LEVEL, POTION_XP_RATE, PRICE_INFLATION_RATE, SOCIAL_DISCOUNT_PER_LEVEL,
    FREEZE_BASE_PRICE, TEMPLATE_ACTIVE_DAYS,
};
use crate::numbers::{floor_f64_to_i64, i64_to_f64};
use crate::state::{day_key, parse_day, GameState, Habit, SkillId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("not enough gold: need {required}, have {available}")]
    InsufficientGold { required: i64, available: i64 },
    #[error("only one freeze can be bought per day")]
    FreezeLimitReached,
    #[error("bundle already owned: {0}")]
    BundleOwned(String),
    #[error("unknown bundle: {0}")]
    UnknownBundle(String),
    #[error("habit roster cannot fit the bundle")]
    RosterFull,
    #[error("unknown decoration: {0}")]
    UnknownDecoration(String),
    #[error("decoration locked behind {skill} level {level}")]
    SkillGate { skill: SkillId, level: u8 },
    #[error("desk items need the work desk first")]
    DeskLocked,
    #[error("invalid day key: {0}")]
    InvalidDate(String),
}

/// Applies the Social branch discount to a price.
#[must_use]
pub fn discounted(state: &GameState, price: i64) -> i64 {
    let social = state.skill_level(SkillId::S3);
    if social == 0 {
        return price;
    }
    let rate = f64::from(social) * SOCIAL_DISCOUNT_PER_LEVEL;
    floor_f64_to_i64(i64_to_f64(price) * (1.0 - rate))
}

/// Current Social discount as a whole-number percent, for display.
#[must_use]
pub fn social_discount_percent(state: &GameState) -> u32 {
    let social = state.skill_level(SkillId::S3);
    let pct = f64::from(social) * SOCIAL_DISCOUNT_PER_LEVEL * 100.0;
    u32::try_from(floor_f64_to_i64(pct)).unwrap_or(0)
}

/// Days until a purchased bundle expires, by the engine calendar.
/// `None` when the bundle has no active expiry.
#[must_use]
pub fn bundle_days_left(state: &GameState, bundle_id: &str) -> Option<i64> {
    let expiry = parse_day(state.inventory.template_expiry.get(bundle_id)?)?;
    let today = parse_day(&state.simulated_date)?;
    Some(expiry.signed_duration_since(today).num_days())
}

fn inflated(base: i64, purchases: u32) -> i64 {
    let exponent = i32::try_from(purchases).unwrap_or(i32::MAX);
    floor_f64_to_i64(i64_to_f64(base) * PRICE_INFLATION_RATE.powi(exponent))
}

#[must_use]
pub fn booster_price(state: &GameState) -> i64 {
    discounted(state, inflated(BOOSTER_BASE_PRICE, state.inventory.booster_bought))
}

#[must_use]
pub fn freeze_price(state: &GameState) -> i64 {
    discounted(state, inflated(FREEZE_BASE_PRICE, state.inventory.freeze_bought))
}

#[must_use]
pub fn potion_price(state: &GameState) -> i64 {
    discounted(
        state,
        POTION_BASE_PRICE + POTION_PRICE_PER_LEVEL * i64::from(state.level),
    )
}

#[must_use]
pub fn bundle_price(state: &GameState, bundle_id: &str) -> Option<i64> {
    catalog::bundle(bundle_id).map(|b| discounted(state, b.price))
}

#[must_use]
pub fn decoration_price(state: &GameState, def: &DecorationDef) -> i64 {
    discounted(state, def.price)
}

fn charge(state: &mut GameState, cost: i64) -> Result<(), StoreError> {
    if state.gold < cost {
        return Err(StoreError::InsufficientGold {
            required: cost,
            available: state.gold,
        });
    }
    state.gold -= cost;
    Ok(())
}

/// Buys a 4-charge xp booster pack. Returns the gold paid.
pub fn buy_booster(state: &mut GameState) -> Result<i64, StoreError> {
    let cost = booster_price(state);
    charge(state, cost)?;
    state.inventory.booster_charges += BOOSTER_CHARGES_PER_PURCHASE;
    state.inventory.booster_bought += 1;
    Ok(cost)
}

/// Buys one streak freeze, at most once per day.
pub fn buy_freeze(state: &mut GameState) -> Result<i64, StoreError> {
    let cost = freeze_price(state);
    if state.gold < cost {
        return Err(StoreError::InsufficientGold {
            required: cost,
            available: state.gold,
        });
    }
    if state.inventory.last_freeze_date.as_deref() == Some(state.simulated_date.as_str()) {
        return Err(StoreError::FreezeLimitReached);
    }
    state.gold -= cost;
    state.inventory.freeze_charges += 1;
    state.inventory.freeze_bought += 1;
    state.inventory.last_freeze_date = Some(state.simulated_date.clone());
    Ok(cost)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionOutcome {
    pub cost: i64,
    pub xp_gained: i64,
    pub levels_gained: u32,
}

/// Buys an xp potion worth a quarter of the current level target.
pub fn buy_potion(state: &mut GameState) -> Result<PotionOutcome, StoreError> {
    let cost = potion_price(state);
    charge(state, cost)?;
    let gain = floor_f64_to_i64(i64_to_f64(state.xp_to_next_level) * POTION_XP_RATE);
    let levels_gained = state.grant_xp(gain);
    Ok(PotionOutcome {
        cost,
        xp_gained: gain,
        levels_gained,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePurchase {
    pub cost: i64,
    pub habit_ids: Vec<String>,
    pub expires: String,
}

/// Buys a habit bundle: its habits join the roster for a week.
pub fn buy_bundle(state: &mut GameState, bundle_id: &str) -> Result<BundlePurchase, StoreError> {
    let bundle = catalog::bundle(bundle_id)
        .ok_or_else(|| StoreError::UnknownBundle(bundle_id.to_string()))?;
    let cost = discounted(state, bundle.price);
    if state.gold < cost {
        return Err(StoreError::InsufficientGold {
            required: cost,
            available: state.gold,
        });
    }
    if state.inventory.owns_template(bundle_id) {
        return Err(StoreError::BundleOwned(bundle_id.to_string()));
    }
    if state.habits.len() + bundle.habits.len() > HABIT_ROSTER_MAX {
        return Err(StoreError::RosterFull);
    }
    let today = parse_day(&state.simulated_date)
        .ok_or_else(|| StoreError::InvalidDate(state.simulated_date.clone()))?;
    let expiry = today
        .checked_add_days(Days::new(TEMPLATE_ACTIVE_DAYS))
        .ok_or_else(|| StoreError::InvalidDate(state.simulated_date.clone()))?;

    state.gold -= cost;
    let language = state.language;
    let mut habit_ids = Vec::with_capacity(bundle.habits.len());
    for def in bundle.habits {
        let id = state.next_habit_id();
        habit_ids.push(id.clone());
        state.habits.push(Habit {
            id,
            name: def.name(language).to_string(),
            kind: def.kind,
            difficulty: def.difficulty,
            template_id: Some(bundle_id.to_string()),
        });
    }
    let expires = day_key(expiry);
    state
        .inventory
        .purchased_templates
        .push(bundle_id.to_string());
    state
        .inventory
        .template_expiry
        .insert(bundle_id.to_string(), expires.clone());
    Ok(BundlePurchase {
        cost,
        habit_ids,
        expires,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationOutcome {
    Bought { cost: i64 },
    Equipped,
    Unequipped,
}

/// First click buys, later clicks toggle the slot. Toggling is free.
pub fn buy_or_toggle_decoration(
    state: &mut GameState,
    decoration_id: &str,
) -> Result<DecorationOutcome, StoreError> {
    let def = catalog::decoration(decoration_id)
        .ok_or_else(|| StoreError::UnknownDecoration(decoration_id.to_string()))?;

    if state.inventory.owns_decoration(decoration_id) {
        let slot = def.category.to_string();
        let equipped_here = state.inventory.active_decorations.get(&slot).map(String::as_str)
            == Some(decoration_id);
        if equipped_here {
            state.inventory.active_decorations.remove(&slot);
            return Ok(DecorationOutcome::Unequipped);
        }
        state
            .inventory
            .active_decorations
            .insert(slot, decoration_id.to_string());
        return Ok(DecorationOutcome::Equipped);
    }

    if let Some((skill, level)) = def.requires {
        if state.skill_level(skill) < level {
            return Err(StoreError::SkillGate { skill, level });
        }
    }
    if catalog::is_desk_category(def.category)
        && !state.inventory.owns_decoration(catalog::WORK_DESK_ITEM)
    {
        return Err(StoreError::DeskLocked);
    }
    let cost = decoration_price(state, def);
    charge(state, cost)?;
    state
        .inventory
        .owned_decorations
        .push(decoration_id.to_string());
    Ok(DecorationOutcome::Bought { cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HabitKind;

    fn rich(today: &str, gold: i64) -> GameState {
        let mut state = GameState::new_game(3, today);
        state.gold = gold;
        state
    }

    fn set_skill(state: &mut GameState, id: SkillId, level: u8) {
        for skill in &mut state.skills {
            if skill.id == id {
                skill.level = level;
            }
        }
    }

    #[test]
    fn consumable_prices_inflate_per_purchase() {
        let mut state = rich("2024-03-01", 100_000);
        assert_eq!(booster_price(&state), 300);
        assert_eq!(buy_booster(&mut state), Ok(300));
        assert_eq!(booster_price(&state), 330);
        assert_eq!(buy_booster(&mut state), Ok(330));
        assert_eq!(booster_price(&state), 363);
        assert_eq!(state.inventory.booster_charges, 8);
        assert_eq!(state.inventory.booster_bought, 2);
        assert_eq!(state.gold, 100_000 - 300 - 330);
    }

    #[test]
    fn social_branch_discounts_prices() {
        let mut state = rich("2024-03-01", 100_000);
        set_skill(&mut state, SkillId::S3, 1);
        assert_eq!(booster_price(&state), 285);
        set_skill(&mut state, SkillId::S3, 3);
        assert_eq!(booster_price(&state), 255);
        state.inventory.booster_bought = 2;
        assert_eq!(booster_price(&state), 308);
        assert_eq!(freeze_price(&state), 425);
    }

    #[test]
    fn freeze_limited_to_one_per_day() {
        let mut state = rich("2024-03-01", 10_000);
        assert_eq!(buy_freeze(&mut state), Ok(500));
        assert_eq!(
            state.inventory.last_freeze_date.as_deref(),
            Some("2024-03-01")
        );
        assert_eq!(buy_freeze(&mut state), Err(StoreError::FreezeLimitReached));
        assert_eq!(state.inventory.freeze_charges, 1);

        // A fresh day reopens the window at an inflated price.
        crate::day_cycle::advance_one_day(&mut state).expect("advance");
        assert_eq!(buy_freeze(&mut state), Ok(550));
        assert_eq!(state.inventory.freeze_charges, 2);
    }

    #[test]
    fn potion_grants_quarter_of_target() {
        let mut state = rich("2024-03-01", 10_000);
        let outcome = buy_potion(&mut state).expect("potion");
        assert_eq!(outcome.cost, 250);
        assert_eq!(outcome.xp_gained, 7);
        assert_eq!(outcome.levels_gained, 0);
        assert_eq!(state.xp, 7);
    }

    #[test]
    fn potion_can_level_up() {
        let mut state = rich("2024-03-01", 10_000);
        state.xp = 28;
        let outcome = buy_potion(&mut state).expect("potion");
        assert_eq!(outcome.levels_gained, 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 5);
        assert_eq!(state.xp_to_next_level, 40);
    }

    #[test]
    fn purchases_reject_thin_wallets() {
        let mut state = rich("2024-03-01", 10);
        assert_eq!(
            buy_booster(&mut state),
            Err(StoreError::InsufficientGold {
                required: 300,
                available: 10
            })
        );
        assert_eq!(state.gold, 10);
    }

    #[test]
    fn bundle_purchase_installs_habits_for_a_week() {
        let mut state = rich("2024-03-01", 1_000);
        let purchase = buy_bundle(&mut state, "deep_focus").expect("bundle");
        assert_eq!(purchase.cost, 500);
        assert_eq!(purchase.habit_ids.len(), 2);
        assert_eq!(purchase.expires, "2024-03-08");
        assert_eq!(state.habits.len(), 5);
        assert!(state.inventory.owns_template("deep_focus"));
        assert_eq!(
            state.inventory.template_expiry.get("deep_focus"),
            Some(&String::from("2024-03-08"))
        );
        let installed = state.habit(&purchase.habit_ids[0]).expect("habit");
        assert_eq!(installed.template_id.as_deref(), Some("deep_focus"));
        assert_eq!(installed.kind, HabitKind::Good);
        assert_eq!(state.gold, 500);
    }

    #[test]
    fn bundle_rejects_repeat_and_overflow() {
        let mut state = rich("2024-03-01", 10_000);
        buy_bundle(&mut state, "deep_focus").expect("bundle");
        assert_eq!(
            buy_bundle(&mut state, "deep_focus"),
            Err(StoreError::BundleOwned(String::from("deep_focus")))
        );
        // 5 habits held; the three-habit detox bundle would make 8. Fill one more.
        state
            .add_habit("stretch", HabitKind::Good, crate::state::Difficulty::Easy)
            .expect("add");
        assert_eq!(
            buy_bundle(&mut state, "dopamine_detox"),
            Err(StoreError::RosterFull)
        );
        assert_eq!(
            buy_bundle(&mut state, "mystery"),
            Err(StoreError::UnknownBundle(String::from("mystery")))
        );
    }

    #[test]
    fn decoration_buy_then_toggle() {
        let mut state = rich("2024-03-01", 1_000);
        let outcome = buy_or_toggle_decoration(&mut state, "DEK001").expect("buy");
        assert_eq!(outcome, DecorationOutcome::Bought { cost: 50 });
        assert_eq!(state.gold, 950);
        assert!(state.inventory.owns_decoration("DEK001"));
        assert!(state.inventory.active_decorations.is_empty());

        let outcome = buy_or_toggle_decoration(&mut state, "DEK001").expect("equip");
        assert_eq!(outcome, DecorationOutcome::Equipped);
        assert_eq!(
            state.inventory.active_decorations.get("wall_base"),
            Some(&String::from("DEK001"))
        );

        let outcome = buy_or_toggle_decoration(&mut state, "DEK001").expect("unequip");
        assert_eq!(outcome, DecorationOutcome::Unequipped);
        assert!(state.inventory.active_decorations.is_empty());
        // Toggling never charged gold again.
        assert_eq!(state.gold, 950);
    }

    #[test]
    fn decoration_gates_enforced() {
        let mut state = rich("2024-03-01", 100_000);
        assert_eq!(
            buy_or_toggle_decoration(&mut state, "DEK_LAMP"),
            Err(StoreError::SkillGate {
                skill: SkillId::S2,
                level: 1
            })
        );
        set_skill(&mut state, SkillId::S2, 1);
        // Skill gate cleared, but lamps sit on the desk.
        assert_eq!(
            buy_or_toggle_decoration(&mut state, "DEK_LAMP"),
            Err(StoreError::DeskLocked)
        );
        set_skill(&mut state, SkillId::S4, 1);
        buy_or_toggle_decoration(&mut state, "DEK_TABLE").expect("desk");
        buy_or_toggle_decoration(&mut state, "DEK_LAMP").expect("lamp");
        assert!(state.inventory.owns_decoration("DEK_LAMP"));
        assert_eq!(
            buy_or_toggle_decoration(&mut state, "DEK404"),
            Err(StoreError::UnknownDecoration(String::from("DEK404")))
        );
    }
}
