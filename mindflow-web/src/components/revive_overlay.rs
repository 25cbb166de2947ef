use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cost: i64,
    pub on_revive: Callback<()>,
}

/// Blocking overlay shown while the player is passed out. The only way
/// out is the revive button; the cost was computed by the engine.
#[function_component(ReviveOverlay)]
pub fn revive_overlay(props: &Props) -> Html {
    let cost_line = if props.cost <= 0 {
        i18n::t("revive.free")
    } else {
        i18n::tr("revive.cost", &[("gold", i18n::fmt_number(props.cost))])
    };
    let on_click = {
        let cb = props.on_revive.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="revive-overlay" role="alertdialog" aria-label={i18n::t("revive.title")}>
            <div class="revive-overlay__card">
                <span class="revive-overlay__icon" aria-hidden="true">{"💤"}</span>
                <h2>{ i18n::t("revive.title") }</h2>
                <p>{ i18n::t("revive.desc") }</p>
                <p class="revive-overlay__cost">{ cost_line }</p>
                <button type="button" class="revive-overlay__button" onclick={on_click}>
                    { i18n::t("revive.button") }
                </button>
            </div>
        </div>
    }
}
