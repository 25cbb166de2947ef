mod handlers;

pub use handlers::AppHandlers;
pub(crate) use handlers::{narrate_close, notify_unlock};

use crate::app::state::AppState;
use crate::components::achievements_dialog::AchievementsDialog;
use crate::components::debug_panel::DebugPanel;
use crate::components::header::StatusBar;
use crate::components::nav::NavBar;
use crate::components::repair_dialog::RepairDialog;
use crate::components::revive_overlay::ReviveOverlay;
use crate::components::settings_dialog::SettingsDialog;
use crate::components::toast::{ToastAction, ToastTrayView};
use crate::game::repair_candidates;
use crate::pages::habits::HabitsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::skills::SkillsPage;
use crate::pages::stats::StatsPage;
use crate::pages::store::StorePage;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state);

    let Some(game) = (*state.game).clone() else {
        return render_boot_splash();
    };
    let game = Rc::new(game);
    let active = route.copied().unwrap_or(Route::Home);

    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |target: Route| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&target);
            }
        })
    };
    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    let open_settings = {
        let show = state.show_settings.clone();
        Callback::from(move |()| show.set(true))
    };
    let close_settings = {
        let show = state.show_settings.clone();
        Callback::from(move |()| show.set(false))
    };
    let open_achievements = {
        let show = state.show_achievements.clone();
        Callback::from(move |()| show.set(true))
    };
    let close_achievements = {
        let show = state.show_achievements.clone();
        Callback::from(move |()| show.set(false))
    };
    let open_repair = {
        let show = state.show_repair.clone();
        Callback::from(move |()| show.set(true))
    };
    let close_repair = {
        let show = state.show_repair.clone();
        Callback::from(move |()| show.set(false))
    };
    let toggle_debug = {
        let show = state.show_debug.clone();
        let open = *state.show_debug;
        Callback::from(move |()| show.set(!open))
    };
    let dismiss_toast = {
        let toasts = state.toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let page = match active {
        Route::Home => html! {
            <HomePage state={game.clone()} on_trigger={handlers.trigger.clone()} />
        },
        Route::Habits => html! {
            <HabitsPage
                state={game.clone()}
                suggestions={(*state.suggestions).clone()}
                on_trigger={handlers.trigger.clone()}
                on_create={handlers.create_habit.clone()}
                on_update={handlers.update_habit.clone()}
                on_delete={handlers.delete_habit.clone()}
                on_suggest={handlers.suggest.clone()}
            />
        },
        Route::Skills => html! {
            <SkillsPage state={game.clone()} on_upgrade={handlers.upgrade_skill.clone()} />
        },
        Route::Store => html! {
            <StorePage
                state={game.clone()}
                on_buy_booster={handlers.buy_booster.clone()}
                on_buy_freeze={handlers.buy_freeze.clone()}
                on_buy_potion={handlers.buy_potion.clone()}
                on_buy_bundle={handlers.buy_bundle.clone()}
                on_decoration={handlers.decoration.clone()}
            />
        },
        Route::Stats => html! {
            <StatsPage state={game.clone()} on_open_repair={open_repair} />
        },
        Route::NotFound => html! {
            <NotFound on_go_home={go_home} />
        },
    };

    html! {
        <>
            <StatusBar
                state={game.clone()}
                on_open_settings={open_settings}
                on_open_achievements={open_achievements}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div
                    id={crate::a11y::STATUS_REGION_ID}
                    class="visually-hidden"
                    role="status"
                    aria-live="polite"
                ></div>
                { page }
            </main>
            <NavBar active={active} on_select={on_select} />
            <ToastTrayView items={state.toasts.items.clone()} on_dismiss={dismiss_toast} />
            <SettingsDialog
                open={*state.show_settings}
                on_close={close_settings}
                state={game.clone()}
                on_language_change={handlers.lang_change.clone()}
                on_theme_change={handlers.theme_change.clone()}
                on_export={handlers.export_save.clone()}
                on_import={handlers.import_save.clone()}
                on_reset={handlers.reset.clone()}
                on_dev_click={handlers.dev_click.clone()}
            />
            <AchievementsDialog
                open={*state.show_achievements}
                on_close={close_achievements}
                unlocked={game.unlocked_achievements.clone()}
            />
            <RepairDialog
                open={*state.show_repair}
                on_close={close_repair}
                candidates={repair_candidates(&game)}
                freeze_charges={game.inventory.freeze_charges}
                on_repair={handlers.repair.clone()}
            />
            if game.hp <= 0 {
                <ReviveOverlay cost={game.revive_cost()} on_revive={handlers.revive.clone()} />
            }
            <DebugPanel
                open={*state.show_debug}
                on_toggle={toggle_debug}
                on_grant={handlers.grant_resources.clone()}
                on_skip_day={handlers.skip_day.clone()}
            />
        </>
    }
}

fn render_boot_splash() -> Html {
    html! {
        <main id="main" role="main" aria-busy="true">
            <section class="boot-splash">
                <h1>{ "Mind'N Flow" }</h1>
                <p class="boot-splash__pulse">{ "..." }</p>
            </section>
        </main>
    }
}
