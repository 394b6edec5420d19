use crate::config::ScrollConfig;

// class marker carried by the toggle and the panel while open, and by the current nav link
pub const ACTIVE_MARKER: &str = "active";

// mobile menu state
//
// the toggle button and the menu panel both carry an "active" marker; rendering both from
// this one value keeps them in sync
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    OutsideClick,
    Escape,
    Resize,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    // every event other than the toggle closes the menu, whether or not it was open
    pub fn apply(self, event: MenuEvent) -> Self {
        match (event, self) {
            (MenuEvent::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuEvent::Toggle, MenuState::Open) => MenuState::Closed,
            (MenuEvent::LinkClicked, _)
            | (MenuEvent::OutsideClick, _)
            | (MenuEvent::Escape, _)
            | (MenuEvent::Resize, _) => MenuState::Closed,
        }
    }
}

// in-page anchor target of a nav link
//
// only "#id" hrefs resolve; anything else leaves the scroll position alone
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

// vertical offset to scroll to so that a section lands just below the fixed navbar
pub fn anchor_scroll_offset(section_top: f64, config: &ScrollConfig) -> f64 {
    section_top - config.header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [MenuEvent; 5] = [
        MenuEvent::Toggle,
        MenuEvent::LinkClicked,
        MenuEvent::OutsideClick,
        MenuEvent::Escape,
        MenuEvent::Resize,
    ];

    #[test]
    fn toggle_parity() {
        for start in [MenuState::Closed, MenuState::Open] {
            let mut state = start;
            for n in 1..=6 {
                state = state.apply(MenuEvent::Toggle);
                if n % 2 == 0 {
                    assert_eq!(state, start);
                } else {
                    assert_ne!(state, start);
                }
            }
        }
    }

    #[test]
    fn resize_always_closes() {
        assert_eq!(MenuState::Open.apply(MenuEvent::Resize), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Resize), MenuState::Closed);
    }

    #[test]
    fn only_toggle_can_open() {
        for event in ALL_EVENTS {
            let next = MenuState::Closed.apply(event);
            assert_eq!(next.is_open(), event == MenuEvent::Toggle, "{event:?}");
        }
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn anchor_offset_accounts_for_navbar() {
        let config = ScrollConfig::default();
        assert_eq!(anchor_scroll_offset(870.0, &config), 800.0);
    }
}
