// stylesheets for the elements this crate creates; each is injected into <head> at most once
mod components;
mod variables;

pub use components::{NOTIFICATION_STYLES, SCROLL_TOP_STYLES};

pub const SCROLL_TOP_STYLE_ID: &str = "scroll-to-top-styles";
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";
