// palette shared by the injected stylesheets
//
// the host page owns its own theme; these only cover the elements this crate creates
pub const ACCENT: &str = "#6366f1";
pub const ACCENT_DARK: &str = "#4f46e5";
pub const SUCCESS: &str = "#10b981";
pub const ERROR: &str = "#ef4444";
pub const INFO: &str = "#6366f1";

pub const MOBILE_BREAKPOINT: &str = "768px";
