#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use mindflow_web::app::App;
use mindflow_web::dom;
use mindflow_web::game::{catalog, GameState, GameStorage, Language, LocalSaveStore};
use mindflow_web::i18n;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn seed_save(mutate: impl FnOnce(&mut GameState)) {
    let mut state = GameState::new_game(7, &mindflow_web::game::today_string());
    state.language = Language::En;
    state.habits = catalog::seed_habits(Language::En);
    mutate(&mut state);
    LocalSaveStore.save_game(&state).expect("seed save");
}

fn render_app() {
    // Pin the URL so the router resolves the home view regardless of
    // how the test page was served.
    if let Ok(history) = dom::window().history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/"));
    }
    Renderer::<App>::with_root(ensure_app_root()).render();
}

/// Mount and post-boot renders are flushed on microtasks, so give the
/// scheduler a breath before poking at the DOM.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20);
    });
    let _ = JsFuture::from(promise).await;
}

fn body_html() -> String {
    dom::document().body().expect("document body").inner_html()
}

#[wasm_bindgen_test]
async fn app_boots_from_the_seeded_save() {
    seed_save(|_| {});
    render_app();
    settle().await;

    let doc = dom::document();
    let main = doc.get_element_by_id("main").expect("main landmark");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert!(
        doc.get_element_by_id(mindflow_web::a11y::STATUS_REGION_ID)
            .is_some(),
        "live status region must exist"
    );

    let tabs = doc
        .query_selector_all(".tab-bar__tab")
        .expect("query tab bar");
    assert_eq!(tabs.length(), 5, "all five views get a tab");
    assert!(body_html().contains("My Home"));
}

#[wasm_bindgen_test]
async fn boot_applies_the_saved_locale() {
    seed_save(|_| {});
    i18n::set_lang("tr");
    render_app();
    settle().await;

    let html = dom::document()
        .document_element()
        .expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
}

#[wasm_bindgen_test]
async fn tab_click_navigates_to_the_store() {
    seed_save(|_| {});
    render_app();
    settle().await;

    let tabs = dom::document()
        .query_selector_all(".tab-bar__tab")
        .expect("query tab bar");
    let store_tab: HtmlElement = tabs
        .item(3)
        .expect("store tab")
        .dyn_into()
        .expect("cast to element");
    store_tab.click();
    settle().await;

    assert!(body_html().contains("Dopamine Detox"));
}

#[wasm_bindgen_test]
fn save_slot_roundtrips_through_local_storage() {
    let mut state = GameState::new_game(11, "2024-03-05");
    state.gold = 777;
    LocalSaveStore.save_game(&state).expect("save");

    let loaded = LocalSaveStore
        .load_game()
        .expect("load")
        .expect("slot is occupied");
    assert_eq!(loaded.gold, 777);
    assert_eq!(loaded.simulated_date, "2024-03-05");

    LocalSaveStore.delete_save().expect("delete");
    assert!(LocalSaveStore.load_game().expect("reload").is_none());
}
