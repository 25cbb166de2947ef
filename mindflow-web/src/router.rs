//! Route table for the five main tabs.

use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/habits")]
    Habits,
    #[at("/skills")]
    Skills,
    #[at("/store")]
    Store,
    #[at("/stats")]
    Stats,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Localization key of the tab label, `None` for non-tab routes.
    #[must_use]
    pub const fn nav_key(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("nav.home"),
            Self::Habits => Some("nav.habits"),
            Self::Skills => Some("nav.skills"),
            Self::Store => Some("nav.store"),
            Self::Stats => Some("nav.stats"),
            Self::NotFound => None,
        }
    }

    /// The five routes shown in the bottom navigation, in tab order.
    pub const TABS: [Self; 5] = [
        Self::Home,
        Self::Habits,
        Self::Skills,
        Self::Store,
        Self::Stats,
    ];
}
