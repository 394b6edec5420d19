use crate::config::RevealConfig;

pub const VISIBLE_CLASS: &str = "visible";

// an element group that fades or slides in the first time it is scrolled into view
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealTarget {
    pub selector: &'static str,
    pub class: &'static str,
}

const fn target(selector: &'static str, class: &'static str) -> RevealTarget {
    RevealTarget { selector, class }
}

pub const REVEAL_TARGETS: &[RevealTarget] = &[
    target(".section-header", "fade-in"),
    target(".hero-text", "slide-in-left"),
    target(".hero-image", "slide-in-right"),
    target(".about-text", "slide-in-left"),
    target(".about-image", "slide-in-right"),
    target(".project-card", "fade-in"),
    target(".skill-category", "fade-in"),
    target(".contact-info", "slide-in-left"),
    target(".contact-form", "slide-in-right"),
];

// css animation-delay for the index-th element of a selector group
//
// computed from whole milliseconds so index 3 gives "0.3s", not the float-noise
// "0.30000000000000004s"; both parse to the same css time
pub fn stagger_delay(index: usize, config: &RevealConfig) -> String {
    let millis = index as f64 * f64::from(config.stagger_ms);
    format!("{}s", millis / 1000.0)
}

// intersection observer root margin, shrinking only the bottom edge
pub fn root_margin(config: &RevealConfig) -> String {
    format!("0px 0px -{}px 0px", config.bottom_margin)
}

// one-way reveal latch
//
// once an element has been seen it stays visible, even if it later leaves the viewport
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn from_marker(visible: bool) -> Self {
        if visible {
            RevealState::Visible
        } else {
            RevealState::Hidden
        }
    }

    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if intersecting => RevealState::Visible,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_staggered_by_index() {
        let config = RevealConfig::default();

        assert_eq!(stagger_delay(0, &config), "0s");
        assert_eq!(stagger_delay(1, &config), "0.1s");
        assert_eq!(stagger_delay(3, &config), "0.3s");
        assert_eq!(stagger_delay(12, &config), "1.2s");
    }

    #[test]
    fn margin_shrinks_bottom_only() {
        assert_eq!(root_margin(&RevealConfig::default()), "0px 0px -50px 0px");
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();

        state = state.observe(false);
        assert!(!state.is_visible());

        state = state.observe(true);
        assert!(state.is_visible());

        // scrolled back out, then in again
        state = state.observe(false);
        assert!(state.is_visible());
        state = state.observe(true);
        assert!(state.is_visible());
    }

    #[test]
    fn targets_cover_every_animated_group() {
        let classes: Vec<_> = REVEAL_TARGETS.iter().map(|t| t.class).collect();

        assert_eq!(REVEAL_TARGETS.len(), 9);
        assert!(classes.iter().all(|c| ["fade-in", "slide-in-left", "slide-in-right"].contains(c)));
        assert!(REVEAL_TARGETS.iter().any(|t| t.selector == ".contact-form"));
    }
}
