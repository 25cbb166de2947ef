use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_grant: Callback<()>,
    pub on_skip_day: Callback<()>,
}

/// Floating developer drawer: the resource grant and the day skip.
#[function_component(DebugPanel)]
pub fn debug_panel(props: &Props) -> Html {
    let on_toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_grant = {
        let cb = props.on_grant.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_skip = {
        let cb = props.on_skip_day.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="debug-panel">
            <button
                type="button"
                class="debug-panel__toggle"
                aria-expanded={if props.open { "true" } else { "false" }}
                aria-label={i18n::t("debug.title")}
                onclick={on_toggle}
            >
                {"🛠️"}
            </button>
            { if props.open {
                html! {
                    <div class="debug-panel__drawer">
                        <h3>{ i18n::t("debug.title") }</h3>
                        <button type="button" class="debug-panel__action" onclick={on_grant}>
                            { i18n::t("debug.grant") }
                        </button>
                        <button type="button" class="debug-panel__action" onclick={on_skip}>
                            { i18n::t("debug.skip_day") }
                        </button>
                    </div>
                }
            } else {
                Html::default()
            } }
        </div>
    }
}
