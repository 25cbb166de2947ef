use yew::prelude::*;

use crate::components::modal::Modal;
use crate::game::AchievementId;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    pub unlocked: Vec<AchievementId>,
}

/// Badge wall: every achievement with its unlock state.
#[function_component(AchievementsDialog)]
pub fn achievements_dialog(props: &Props) -> Html {
    let total = AchievementId::ALL.len();
    let done = props.unlocked.len();
    let title = format!("{} ({done}/{total})", i18n::t("achievements.title"));

    html! {
        <Modal
            open={props.open}
            title={title}
            on_close={props.on_close.clone()}
            return_focus_id="open-achievements"
        >
            <ul class="achievement-grid">
                { for AchievementId::ALL.iter().map(|id| {
                    let unlocked = props.unlocked.contains(id);
                    html! {
                        <li
                            key={id.as_str()}
                            class={classes!(
                                "achievement",
                                (!unlocked).then_some("achievement--locked"),
                            )}
                        >
                            <span class="achievement__icon" aria-hidden="true">
                                { if unlocked { "🏅" } else { "🔒" } }
                            </span>
                            <span class="achievement__name">
                                { i18n::t(&format!("achievements.list.{id}.name")) }
                            </span>
                            <span class="achievement__desc">
                                { i18n::t(&format!("achievements.list.{id}.desc")) }
                            </span>
                        </li>
                    }
                }) }
            </ul>
        </Modal>
    }
}
