// portfolio page view-model
//
// everything in here is platform independent: the webapp crate owns the dom handles and
// renders these states onto class markers and inline styles, so the decisions themselves can
// be exercised on the host without a browser
pub mod config;
pub mod contact;
pub mod hover;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod typing;

// document.readyState while the parser is still running; "interactive" and "complete" both
// mean the markup is available
pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_defers_attach() {
        assert!(document_is_loading("loading"));
        assert!(!document_is_loading("interactive"));
        assert!(!document_is_loading("complete"));
    }
}
