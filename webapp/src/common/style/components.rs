use constcat::concat;

use super::variables::{ACCENT, ACCENT_DARK, ERROR, INFO, MOBILE_BREAKPOINT, SUCCESS};

pub const SCROLL_TOP_STYLES: &str = concat!(
    r#"
.scroll-to-top {
    position: fixed;
    bottom: 20px;
    right: 20px;
    width: 50px;
    height: 50px;
    background: "#,
    ACCENT,
    r#";
    color: white;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    opacity: 0;
    visibility: hidden;
    transition: all 0.3s ease;
    z-index: 1000;
    box-shadow: 0 4px 12px rgba(99, 102, 241, 0.3);
    font-size: 1.2rem;
}

.scroll-to-top:hover {
    background: "#,
    ACCENT_DARK,
    r#";
    transform: translateY(-3px);
    box-shadow: 0 6px 20px rgba(99, 102, 241, 0.4);
}

.scroll-to-top.visible {
    opacity: 1;
    visibility: visible;
}

@media (max-width: "#,
    MOBILE_BREAKPOINT,
    r#") {
    .scroll-to-top {
        bottom: 15px;
        right: 15px;
        width: 45px;
        height: 45px;
        font-size: 1rem;
    }
}
"#
);

pub const NOTIFICATION_STYLES: &str = concat!(
    r#"
.notification {
    position: fixed;
    top: 90px;
    right: 20px;
    padding: 1rem 1.5rem;
    border-radius: 8px;
    color: white;
    font-weight: 500;
    z-index: 1001;
    transform: translateX(100%);
    transition: transform 0.3s ease;
    max-width: 300px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
}

.notification-success {
    background: "#,
    SUCCESS,
    r#";
}

.notification-error {
    background: "#,
    ERROR,
    r#";
}

.notification-info {
    background: "#,
    INFO,
    r#";
}

.notification.show {
    transform: translateX(0);
}

@media (max-width: "#,
    MOBILE_BREAKPOINT,
    r#") {
    .notification {
        top: 80px;
        right: 15px;
        left: 15px;
        max-width: none;
    }
}
"#
);
