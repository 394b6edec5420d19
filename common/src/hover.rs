use crate::config::HoverConfig;

pub const LINK_TRANSITION: &str = "all 0.3s ease";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pointer {
    Enter,
    Leave,
}

// inline style written directly onto a hovered element
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InlineStyle {
    pub transform: &'static str,
    pub opacity: Option<&'static str>,
}

pub fn skill_item_style(pointer: Pointer) -> InlineStyle {
    let transform = match pointer {
        Pointer::Enter => "translateY(-5px) rotate(2deg)",
        Pointer::Leave => "translateY(0) rotate(0deg)",
    };

    InlineStyle {
        transform,
        opacity: None,
    }
}

// project card links start hidden; this is also their initial state
pub fn project_link_style(pointer: Pointer) -> InlineStyle {
    match pointer {
        Pointer::Enter => InlineStyle {
            transform: "scale(1) translateY(0)",
            opacity: Some("1"),
        },
        Pointer::Leave => InlineStyle {
            transform: "scale(0.8) translateY(10px)",
            opacity: Some("0"),
        },
    }
}

// links on a card are revealed one after another on enter; leave hides them all at once
pub fn link_reveal_delay(index: usize, config: &HoverConfig) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.link_stagger_ms)
}
