use yew::prelude::*;

use crate::components::modal::Modal;
use crate::game::RepairCandidate;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    pub candidates: Vec<RepairCandidate>,
    pub freeze_charges: i32,
    pub on_repair: Callback<String>,
}

/// Streak-freeze spender: pick a recent missed day and mark it perfect.
#[function_component(RepairDialog)]
pub fn repair_dialog(props: &Props) -> Html {
    let rows = if props.candidates.is_empty() {
        html! { <p class="repair__none">{ i18n::t("repair.none") }</p> }
    } else {
        html! {
            <ul class="repair__days">
                { for props.candidates.iter().map(|candidate| {
                    let on_click = {
                        let cb = props.on_repair.clone();
                        let day = candidate.day.clone();
                        Callback::from(move |_| cb.emit(day.clone()))
                    };
                    html! {
                        <li key={candidate.day.clone()} class="repair__day">
                            <span class="repair__date">{ i18n::fmt_date_iso(&candidate.day) }</span>
                            <span class="repair__ago">
                                { i18n::tr("repair.days_ago", &[("days", candidate.days_ago.to_string())]) }
                            </span>
                            <button
                                type="button"
                                class="repair__button"
                                disabled={props.freeze_charges <= 0}
                                onclick={on_click}
                            >
                                { i18n::t("repair.button") }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <Modal
            open={props.open}
            title={i18n::t("repair.title")}
            description={i18n::t("repair.desc")}
            on_close={props.on_close.clone()}
            return_focus_id="open-repair"
        >
            <p class="repair__charges">{ format!("🧊 x{}", props.freeze_charges) }</p>
            { rows }
            <p class="repair__hint">{ i18n::t("repair.window_hint") }</p>
        </Modal>
    }
}
