use yew::prelude::*;

use crate::i18n;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Route,
    pub on_select: Callback<Route>,
}

/// Bottom tab bar for the five main views.
#[function_component(NavBar)]
pub fn nav_bar(props: &Props) -> Html {
    html! {
        <nav class="tab-bar" aria-label="Main">
            { for Route::TABS.iter().map(|tab| {
                let selected = *tab == props.active;
                let on_click = {
                    let cb = props.on_select.clone();
                    let tab = *tab;
                    Callback::from(move |_| cb.emit(tab))
                };
                let label = tab.nav_key().map(i18n::t).unwrap_or_default();
                html! {
                    <button
                        type="button"
                        class={classes!("tab-bar__tab", selected.then_some("tab-bar__tab--active"))}
                        aria-current={selected.then_some("page")}
                        onclick={on_click}
                    >
                        { label }
                    </button>
                }
            }) }
        </nav>
    }
}
