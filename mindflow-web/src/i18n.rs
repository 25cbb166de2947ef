//! Runtime localization: bundled JSON catalogs, a thread-local active
//! bundle and the `t`/`tr` lookup helpers the views render through.
//! Missing keys fall back to the English catalog, then to the key itself.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::cell::RefCell;

/// localStorage key remembering the locale across reloads.
const LOCALE_KEY: &str = "mindflow.locale";

/// English first; it doubles as the fallback catalog.
const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("tr", include_str!("../i18n/tr.json")),
];

pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALES: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "tr",
        name: "Türkçe",
    },
];

/// Locales selectable from the settings dialog.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALES
}

struct I18nBundle {
    lang: String,
    translations: Value,
}

static EN_FALLBACK: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(LOCALE_TABLE[0].1).unwrap_or(Value::Null));

fn bundle_for(code: &str) -> I18nBundle {
    let (lang, raw) = LOCALE_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .copied()
        .unwrap_or(LOCALE_TABLE[0]);
    I18nBundle {
        lang: lang.to_string(),
        translations: serde_json::from_str(raw).unwrap_or(Value::Null),
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(bundle_for(&saved_lang()));
}

#[cfg(target_arch = "wasm32")]
fn saved_lang() -> String {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
        .unwrap_or_else(|| String::from("tr"))
}

#[cfg(not(target_arch = "wasm32"))]
fn saved_lang() -> String {
    String::from("en")
}

/// Activate a locale and remember the choice. Unknown codes activate the
/// English fallback.
pub fn set_lang(code: &str) {
    CURRENT.with(|cell| {
        *cell.borrow_mut() = bundle_for(code);
    });
    persist_lang(&current_lang());
}

#[cfg(target_arch = "wasm32")]
fn persist_lang(code: &str) {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(LOCALE_KEY, code);
    }
    if let Some(root) = crate::dom::document().document_element() {
        let _ = root.set_attribute("lang", code);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_lang(_code: &str) {}

/// Code of the active locale, e.g. `"tr"`.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn get_nested<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    let mut node = root;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    Some(node)
}

fn render_value(value: &Value, vars: &[(&str, String)]) -> Option<String> {
    let template = value.as_str()?;
    let mut out = template.to_string();
    for (name, replacement) in vars {
        let doubled = format!("{{{{{name}}}}}");
        let single = format!("{{{name}}}");
        out = out.replace(&doubled, replacement);
        out = out.replace(&single, replacement);
    }
    Some(out)
}

fn resolve(key: &str, vars: &[(&str, String)]) -> String {
    let from_current = CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested(&bundle.translations, key).and_then(|value| render_value(value, vars))
    });
    if let Some(text) = from_current {
        return text;
    }
    get_nested(&EN_FALLBACK, key)
        .and_then(|value| render_value(value, vars))
        .unwrap_or_else(|| key.to_string())
}

/// Translate a dotted key in the active locale.
#[must_use]
pub fn t(key: &str) -> String {
    resolve(key, &[])
}

/// Translate a dotted key, substituting `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, vars: &[(&str, String)]) -> String {
    resolve(key, vars)
}

/// Format an integer with the active locale's digit grouping.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn fmt_number(value: i64) -> String {
    use wasm_bindgen::JsValue;

    let locales = js_sys::Array::of1(&JsValue::from_str(&current_lang()));
    let options = js_sys::Object::new();
    let formatter = js_sys::Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(
            &JsValue::UNDEFINED,
            &JsValue::from_f64(mindflow_game::numbers::i64_to_f64(value)),
        )
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn fmt_number(value: i64) -> String {
    value.to_string()
}

/// Format a 0..=1 ratio as a whole-number percent.
#[must_use]
pub fn fmt_pct(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Format a `YYYY-MM-DD` day key as a locale date string.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn fmt_date_iso(day: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(day));
    let locales = js_sys::Array::of1(&JsValue::from_str(&current_lang()));
    let options = js_sys::Object::new();
    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::UNDEFINED, &JsValue::from(date))
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| day.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn fmt_date_iso(day: &str) -> String {
    day.to_string()
}

/// Short weekday label ("Fri", "Cum") for a `YYYY-MM-DD` day key.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn fmt_weekday_short(day: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(day));
    let locales = js_sys::Array::of1(&JsValue::from_str(&current_lang()));
    let options = js_sys::Object::new();
    let set = js_sys::Reflect::set(
        &options,
        &JsValue::from_str("weekday"),
        &JsValue::from_str("short"),
    );
    if set.is_err() {
        return fallback_weekday(day);
    }
    let formatter = js_sys::Intl::DateTimeFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::UNDEFINED, &JsValue::from(date))
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| fallback_weekday(day))
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn fmt_weekday_short(day: &str) -> String {
    fallback_weekday(day)
}

/// `MM-DD` tail of the day key, used when no formatter is available.
fn fallback_weekday(day: &str) -> String {
    day.get(5..).map_or_else(|| day.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_keys_with_variables() {
        set_lang("en");
        let text = tr("hud.level_display", &[("level", String::from("4"))]);
        assert_eq!(text, "Level 4");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key_itself() {
        set_lang("en");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn unknown_locale_activates_the_english_fallback() {
        set_lang("xx");
        assert_eq!(current_lang(), "en");
        assert_eq!(t("nav.home"), "My Home");
    }

    #[test]
    fn numeric_message_groups_resolve_by_index() {
        set_lang("en");
        let text = t("messages.regret.3");
        assert_ne!(text, "messages.regret.3");
        assert!(!text.is_empty());
    }

    #[test]
    fn turkish_catalog_is_complete_for_navigation() {
        set_lang("tr");
        assert_eq!(t("nav.home"), "Evim");
        assert_eq!(t("nav.store"), "Market");
    }

    #[test]
    fn day_log_keys_resolve_in_both_catalogs() {
        for code in ["en", "tr"] {
            set_lang(code);
            for key in [
                "log.day.penalty",
                "log.day.freeze-used",
                "log.day-repaired",
                "log.template.penalty",
            ] {
                assert_ne!(t(key), key, "missing {key} in {code}");
            }
        }
    }

    #[test]
    fn weekday_fallback_uses_the_iso_tail() {
        assert_eq!(fmt_weekday_short("2024-03-08"), "03-08");
    }

    #[test]
    fn percent_formatting_rounds_to_whole_numbers() {
        assert_eq!(fmt_pct(0.675), "68%");
        assert_eq!(fmt_pct(0.0), "0%");
    }
}
