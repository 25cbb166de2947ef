use std::rc::Rc;
use yew::prelude::*;

use crate::game::{
    booster_price, bundle_price, catalog, decoration_price, freeze_price, potion_price,
    social_discount_percent, DecorationDef, GameState, StoreGroup, BUNDLES, DECORATIONS,
    HABIT_ROSTER_MAX,
};
use crate::i18n;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Bundles,
    Bonuses,
    Decor,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Bundles, Self::Bonuses, Self::Decor];

    const fn label_key(self) -> &'static str {
        match self {
            Self::Bundles => "store.tab_bundles",
            Self::Bonuses => "store.tab_bonuses",
            Self::Decor => "store.tab_decor",
        }
    }

    const fn desc_key(self) -> &'static str {
        match self {
            Self::Bundles => "store.bundles_desc",
            Self::Bonuses => "store.bonuses_desc",
            Self::Decor => "store.decor_desc",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<GameState>,
    pub on_buy_booster: Callback<()>,
    pub on_buy_freeze: Callback<()>,
    pub on_buy_potion: Callback<()>,
    pub on_buy_bundle: Callback<String>,
    pub on_decoration: Callback<String>,
}

fn price_tag(price: i64) -> String {
    format!("{} 🪙", i18n::fmt_number(price))
}

fn bonus_card(
    item_key: &str,
    held: Option<String>,
    price: i64,
    disabled_label: Option<String>,
    affordable: bool,
    on_buy: &Callback<()>,
) -> Html {
    let on_click = {
        let cb = on_buy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (label, blocked) = match disabled_label {
        Some(text) => (text, true),
        None => (price_tag(price), false),
    };
    html! {
        <div key={item_key.to_string()} class="store-card">
            <h3>{ i18n::t(&format!("store.items.{item_key}.name")) }</h3>
            <p class="store-card__desc">{ i18n::t(&format!("store.items.{item_key}.desc")) }</p>
            { held.map(|text| html! { <p class="store-card__held">{ text }</p> }).unwrap_or_default() }
            <button
                type="button"
                class="store-card__buy"
                disabled={blocked || !affordable}
                onclick={on_click}
            >
                { label }
            </button>
        </div>
    }
}

fn decoration_card(state: &GameState, def: &DecorationDef, on_decoration: &Callback<String>) -> Html {
    let id = def.id;
    let owned = state.inventory.owns_decoration(id);
    let equipped = state
        .inventory
        .active_decorations
        .get(def.category)
        .is_some_and(|active| active == id);
    let price = decoration_price(state, def);

    let gate = if owned {
        None
    } else if let Some((skill, level)) = def.requires {
        let have = state.skill_level(skill);
        (have < level).then(|| {
            let skill_name = i18n::t(&format!("skills.tree.{skill}.name"));
            i18n::tr(
                "store.skill_req",
                &[("skill", format!("{skill_name} Lv{level}"))],
            )
        })
    } else if catalog::is_desk_category(def.category)
        && !state.inventory.owns_decoration(catalog::WORK_DESK_ITEM)
    {
        Some(i18n::t("store.lock_table"))
    } else {
        None
    };

    let button = if let Some(hint) = gate {
        html! { <button type="button" class="store-card__buy" disabled={true}>{ hint }</button> }
    } else {
        let on_click = {
            let cb = on_decoration.clone();
            Callback::from(move |_| cb.emit(id.to_string()))
        };
        let (label, blocked) = if equipped {
            (i18n::t("store.equipped"), false)
        } else if owned {
            (i18n::t("store.equip"), false)
        } else {
            (price_tag(price), state.gold < price)
        };
        html! {
            <button
                type="button"
                class={classes!("store-card__buy", equipped.then_some("store-card__buy--equipped"))}
                disabled={blocked}
                onclick={on_click}
            >
                { label }
            </button>
        }
    };

    html! {
        <div key={id} class="store-card store-card--decor">
            <h3>{ i18n::t(&format!("decor.items.{id}")) }</h3>
            <p class="store-card__desc">{ i18n::t(&format!("decor.category.{}", def.category)) }</p>
            { button }
        </div>
    }
}

/// The three-tab store: habit bundles, consumables and room decor.
#[function_component(StorePage)]
pub fn store_page(props: &Props) -> Html {
    let tab = use_state(|| Tab::Bundles);
    let state = &props.state;
    let today = state.simulated_date.as_str();
    let discount = social_discount_percent(state);

    let active_tab = *tab;
    let tabs = html! {
        <div class="store-tabs" role="tablist">
            { for Tab::ALL.iter().map(|candidate| {
                let selected = *candidate == active_tab;
                let on_click = {
                    let tab = tab.clone();
                    let candidate = *candidate;
                    Callback::from(move |_| tab.set(candidate))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={if selected { "true" } else { "false" }}
                        class={classes!("store-tabs__tab", selected.then_some("store-tabs__tab--active"))}
                        onclick={on_click}
                    >
                        { i18n::t(candidate.label_key()) }
                    </button>
                }
            }) }
        </div>
    };

    let body = match active_tab {
        Tab::Bundles => html! {
            <div class="store-grid">
                { for BUNDLES.iter().map(|def| {
                    let owned = state.inventory.owns_template(def.id);
                    let overflow = state.habits.len() + def.habits.len() > HABIT_ROSTER_MAX;
                    let price = bundle_price(state, def.id).unwrap_or(def.price);
                    let on_click = {
                        let cb = props.on_buy_bundle.clone();
                        let id = def.id.to_string();
                        Callback::from(move |_| cb.emit(id.clone()))
                    };
                    let (label, blocked) = if owned {
                        (i18n::t("store.owned"), true)
                    } else if overflow {
                        (i18n::t("store.limit_reached"), true)
                    } else {
                        (price_tag(price), state.gold < price)
                    };
                    html! {
                        <div key={def.id} class="store-card store-card--bundle">
                            <h3>{ i18n::t(&format!("store.pack.{}.name", def.id)) }</h3>
                            <p class="store-card__desc">{ i18n::t(&format!("store.pack.{}.desc", def.id)) }</p>
                            <ul class="store-card__contents">
                                { for def.habits.iter().map(|habit| html! {
                                    <li>{ habit.name(state.language) }</li>
                                }) }
                            </ul>
                            <button
                                type="button"
                                class="store-card__buy"
                                disabled={blocked}
                                onclick={on_click}
                            >
                                { label }
                            </button>
                        </div>
                    }
                }) }
            </div>
        },
        Tab::Bonuses => {
            let freeze_today = state.inventory.last_freeze_date.as_deref() == Some(today);
            html! {
                <div class="store-grid">
                    { bonus_card(
                        "booster",
                        Some(format!("⚡ x{}", state.inventory.booster_charges)),
                        booster_price(state),
                        None,
                        state.gold >= booster_price(state),
                        &props.on_buy_booster,
                    ) }
                    { bonus_card(
                        "freeze",
                        Some(format!("🧊 x{}", state.inventory.freeze_charges)),
                        freeze_price(state),
                        freeze_today.then(|| i18n::t("store.come_tomorrow")),
                        state.gold >= freeze_price(state),
                        &props.on_buy_freeze,
                    ) }
                    { bonus_card(
                        "potion",
                        None,
                        potion_price(state),
                        None,
                        state.gold >= potion_price(state),
                        &props.on_buy_potion,
                    ) }
                </div>
            }
        }
        Tab::Decor => html! {
            <>
                { for StoreGroup::ALL.iter().map(|group| html! {
                    <section key={group.as_str()} class="store-section">
                        <h2>{ i18n::t(&format!("store.group.{}", group.as_str())) }</h2>
                        <div class="store-grid">
                            { for DECORATIONS
                                .iter()
                                .filter(|def| def.group == *group)
                                .map(|def| decoration_card(state, def, &props.on_decoration)) }
                        </div>
                    </section>
                }) }
            </>
        },
    };

    html! {
        <section class="page page--store">
            <h1>{ i18n::t("store.title") }</h1>
            <p class="page__desc">{ i18n::t("store.desc") }</p>
            { if discount > 0 {
                html! {
                    <p class="store-discount">
                        { i18n::tr("store.discount", &[("pct", discount.to_string())]) }
                    </p>
                }
            } else {
                Html::default()
            } }
            { tabs }
            <p class="store-tab-desc">{ i18n::t(active_tab.desc_key()) }</p>
            { body }
        </section>
    }
}
