use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use inkline_utils::constants::TOAST_DISMISS_DELAY;
use inkline_utils::notification::Toast;

/// The navigable sections of the landing page. The strum string form doubles
/// as the DOM anchor id of the section element.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, IntoStaticStr, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Articles,
    About,
    Portfolio,
    Projects,
    Contact,
}

impl Section {
    pub fn anchor(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Articles => "Articles",
            Section::About => "About me",
            Section::Portfolio => "Portfolio",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Global UI state provided through context by the App component.
#[derive(Copy, Clone)]
pub struct GlobalState {
    /// last clicked navigation target, cosmetic highlight only
    pub active_section: RwSignal<Section>,
    /// article whose comments modal is open, if any
    pub open_article_id: RwSignal<Option<i64>>,
    pub toast: RwSignal<Option<Toast>>,
    toast_serial: RwSignal<usize>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(Section::default()),
            open_article_id: RwSignal::new(None),
            toast: RwSignal::new(None),
            toast_serial: RwSignal::new(0),
        }
    }

    /// Replaces the displayed toast and schedules its dismissal. The serial
    /// guards the timer: a stale timer must not clear a newer toast.
    pub fn push_toast(&self, toast: Toast) {
        let serial = self.toast_serial.get_untracked() + 1;
        self.toast_serial.set(serial);
        self.toast.set(Some(toast));

        let toast_slot = self.toast;
        let toast_serial = self.toast_serial;
        set_timeout(
            move || {
                if toast_serial.try_get_untracked() == Some(serial) {
                    toast_slot.try_set(None);
                }
            },
            TOAST_DISMISS_DELAY,
        );
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use leptos::prelude::*;
    use strum::IntoEnumIterator;

    use inkline_utils::notification::Toast;

    use crate::state::{GlobalState, Section};

    #[test]
    fn test_section_anchor_and_label() {
        assert_eq!(Section::Home.anchor(), "home");
        assert_eq!(Section::Articles.anchor(), "articles");
        assert_eq!(Section::Contact.anchor(), "contact");
        assert_eq!(Section::About.label(), "About me");
        for section in Section::iter() {
            assert!(!section.anchor().is_empty());
            assert!(!section.label().is_empty());
        }
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!(Section::from_str("portfolio").expect("Section should parse"), Section::Portfolio);
        assert!(Section::from_str("blog").is_err());
    }

    #[test]
    fn test_global_state_defaults() {
        let owner = Owner::new();
        owner.set();
        let state = GlobalState::new();
        assert_eq!(state.active_section.get_untracked(), Section::Home);
        assert_eq!(state.open_article_id.get_untracked(), None);
        assert_eq!(state.toast.get_untracked(), None);
    }

    #[test]
    fn test_dismiss_toast() {
        let owner = Owner::new();
        owner.set();
        let state = GlobalState::new();
        state.toast.set(Some(Toast::error("Error", "Could not load comments")));
        state.dismiss_toast();
        assert_eq!(state.toast.get_untracked(), None);
    }
}
