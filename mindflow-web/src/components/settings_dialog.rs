use std::rc::Rc;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::game::{GameState, ThemeId};
use crate::i18n;

const FEATURE_COUNT: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    About,
    Themes,
    Data,
}

impl Tab {
    const ALL: [Self; 3] = [Self::About, Self::Themes, Self::Data];

    const fn label_key(self) -> &'static str {
        match self {
            Self::About => "settings.about",
            Self::Themes => "settings.themes",
            Self::Data => "settings.data",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    pub state: Rc<GameState>,
    pub on_language_change: Callback<String>,
    pub on_theme_change: Callback<ThemeId>,
    pub on_export: Callback<()>,
    pub on_import: Callback<String>,
    pub on_reset: Callback<()>,
    pub on_dev_click: Callback<()>,
}

#[function_component(SettingsDialog)]
pub fn settings_dialog(props: &Props) -> Html {
    let tab = use_state(|| Tab::About);
    let import_ref = use_node_ref();

    let on_language_change = {
        let cb = props.on_language_change.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                use wasm_bindgen::JsCast;

                if let Some(select) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    cb.emit(select.value());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = cb;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    let on_import_click = {
        let cb = props.on_import.clone();
        let import_ref = import_ref.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |_| {
                if let Some(area) = import_ref.cast::<web_sys::HtmlTextAreaElement>() {
                    let raw = area.value();
                    if !raw.trim().is_empty() {
                        cb.emit(raw);
                        area.set_value("");
                    }
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (cb, import_ref);
            Callback::from(|_e: MouseEvent| {})
        }
    };

    let on_export_click = {
        let cb = props.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_reset_click = {
        let cb = props.on_reset.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |_| {
                let confirmed = crate::dom::window()
                    .confirm_with_message(&i18n::t("settings.reset_confirm"))
                    .unwrap_or(false);
                if confirmed {
                    cb.emit(());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = cb;
            Callback::from(|_e: MouseEvent| {})
        }
    };
    let on_dev_click = {
        let cb = props.on_dev_click.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let active_tab = *tab;
    let tabs = html! {
        <div class="dialog-tabs" role="tablist">
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
                        class={classes!("dialog-tabs__tab", selected.then_some("dialog-tabs__tab--active"))}
                        onclick={on_click}
                    >
                        { i18n::t(candidate.label_key()) }
                    </button>
                }
            }) }
        </div>
    };

    let body = match active_tab {
        Tab::About => html! {
            <div class="settings-about">
                <h3>{ i18n::t("settings.features_title") }</h3>
                <ul class="settings-about__features">
                    { for (0..FEATURE_COUNT).map(|index| html! {
                        <li>{ i18n::t(&format!("settings.features.{index}")) }</li>
                    }) }
                </ul>
                <label class="settings-about__language">
                    { i18n::t("settings.language") }
                    <select value={i18n::current_lang()} onchange={on_language_change}>
                        { for i18n::locales().iter().map(|locale| html! {
                            <option
                                value={locale.code}
                                selected={locale.code == i18n::current_lang()}
                            >
                                { locale.name }
                            </option>
                        }) }
                    </select>
                </label>
                <div class="settings-about__credit">
                    <span>{ i18n::t("settings.dev") }</span>
                    <button type="button" class="settings-about__dev" onclick={on_dev_click}>
                        {"Ritalin"}
                    </button>
                    <p class="settings-about__quote">{ i18n::t("settings.dev_quote") }</p>
                </div>
            </div>
        },
        Tab::Themes => html! {
            <div class="settings-themes">
                { for ThemeId::ALL.iter().map(|theme| {
                    let theme = *theme;
                    let owned = props.state.inventory.owned_themes.contains(&theme);
                    let active = props.state.inventory.active_theme == theme;
                    let on_click = {
                        let cb = props.on_theme_change.clone();
                        Callback::from(move |_| cb.emit(theme))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "settings-themes__choice",
                                active.then_some("settings-themes__choice--active"),
                            )}
                            disabled={!owned}
                            onclick={on_click}
                        >
                            { i18n::t(&format!("settings.theme.{theme}")) }
                        </button>
                    }
                }) }
            </div>
        },
        Tab::Data => html! {
            <div class="settings-data">
                <button type="button" class="settings-data__export" onclick={on_export_click}>
                    { i18n::t("settings.export") }
                </button>
                <textarea
                    ref={import_ref.clone()}
                    class="settings-data__import-input"
                    placeholder={i18n::t("settings.import_placeholder")}
                    rows="4"
                />
                <button type="button" class="settings-data__import" onclick={on_import_click}>
                    { i18n::t("settings.import") }
                </button>
                <button type="button" class="settings-data__reset" onclick={on_reset_click}>
                    { i18n::t("settings.reset") }
                </button>
            </div>
        },
    };

    html! {
        <Modal
            open={props.open}
            title={i18n::t("settings.title")}
            on_close={props.on_close.clone()}
            return_focus_id="open-settings"
        >
            { tabs }
            { body }
        </Modal>
    }
}
