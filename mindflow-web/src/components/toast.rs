//! Transient feedback messages. The tray lives in a reducer so dismiss
//! timers scheduled long ago still act on the current list.

use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: i32 = 3200;
/// Tray depth cap so a burst of events stays readable.
const MAX_VISIBLE: usize = 4;

static TOAST_IDS: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastTray {
    pub items: Vec<Toast>,
}

impl Reducible for ToastTray {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast) => {
                items.push(toast);
                while items.len() > MAX_VISIBLE {
                    items.remove(0);
                }
            }
            ToastAction::Dismiss(id) => items.retain(|toast| toast.id != id),
        }
        Rc::new(Self { items })
    }
}

pub fn info(tray: &UseReducerHandle<ToastTray>, text: String) {
    push(tray, ToastKind::Info, text);
}

pub fn success(tray: &UseReducerHandle<ToastTray>, text: String) {
    push(tray, ToastKind::Success, text);
}

pub fn error(tray: &UseReducerHandle<ToastTray>, text: String) {
    push(tray, ToastKind::Error, text);
}

/// Append a toast, announce it to assistive tech and schedule dismissal.
pub fn push(tray: &UseReducerHandle<ToastTray>, kind: ToastKind, text: String) {
    crate::a11y::set_status(&text);
    let id = TOAST_IDS.fetch_add(1, Ordering::Relaxed);
    tray.dispatch(ToastAction::Push(Toast { id, kind, text }));
    schedule_dismiss(tray, id);
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(tray: &UseReducerHandle<ToastTray>, id: u32) {
    let tray = tray.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = crate::dom::sleep_ms(TOAST_DISMISS_MS).await;
        tray.dispatch(ToastAction::Dismiss(id));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_tray: &UseReducerHandle<ToastTray>, _id: u32) {}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastTrayView)]
pub fn toast_tray_view(props: &Props) -> Html {
    if props.items.is_empty() {
        return Html::default();
    }
    html! {
        <div class="toast-tray">
            { for props.items.iter().map(|toast| {
                let on_dismiss = {
                    let cb = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <button
                        type="button"
                        key={toast.id.to_string()}
                        class={classes!("toast", toast.kind.class())}
                        onclick={on_dismiss}
                    >
                        { toast.text.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
