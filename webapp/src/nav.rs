use std::rc::Rc;

use anyhow::Result;
use folio_common::menu::{MenuEvent, anchor_scroll_offset, anchor_target};
use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Node};

use crate::{common::dom::smooth_scroll_to, page::Page};

impl Page {
    pub fn attach_nav(self: &Rc<Self>) -> Result<()> {
        if let Some(toggle) = &self.nav_toggle {
            let page = self.clone();
            EventListener::new(toggle, "click", move |_| page.menu_event(MenuEvent::Toggle)).forget();
        } else {
            warn!("no #nav-toggle on page, mobile menu cannot be opened");
        }

        for link in &self.nav_links {
            let page = self.clone();
            let target = link.clone();
            EventListener::new_with_options(
                link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    page.menu_event(MenuEvent::LinkClicked);

                    let href = target.get_attribute("href").unwrap_or_default();
                    if let Some(id) = anchor_target(&href) {
                        event.prevent_default();
                        page.scroll_to_section(id);
                    }
                },
            )
            .forget();
        }

        let page = self.clone();
        EventListener::new(&self.document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if page.is_outside_menu(target.as_ref()) {
                page.menu_event(MenuEvent::OutsideClick);
            }
        })
        .forget();

        let page = self.clone();
        EventListener::new_with_options(
            &self.document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };

                match event.key().as_str() {
                    "Escape" => page.menu_event(MenuEvent::Escape),
                    "Home" if event.ctrl_key() => {
                        event.prevent_default();
                        page.scroll_to_top();
                    }
                    _ => {}
                }
            },
        )
        .forget();

        let page = self.clone();
        EventListener::new(&self.window, "resize", move |_| {
            page.menu_event(MenuEvent::Resize);
            if let Err(err) = page.update_active_link() {
                warn!("failed to update nav link on resize: {err:#}");
            }
        })
        .forget();

        Ok(())
    }

    // a click counts as outside only if it landed in neither the panel nor its toggle
    fn is_outside_menu(&self, target: Option<&Node>) -> bool {
        let (Some(toggle), Some(menu)) = (&self.nav_toggle, &self.nav_menu) else {
            return false;
        };

        !menu.contains(target) && !toggle.contains(target)
    }

    // missing sections are not an error, the link just doesn't scroll
    fn scroll_to_section(&self, id: &str) {
        let Some(section) = self
            .document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            debug!("nav target #{id} not found");
            return;
        };

        let top = anchor_scroll_offset(f64::from(section.offset_top()), &self.config.scroll);
        smooth_scroll_to(&self.window, top);
    }

    pub fn scroll_to_top(&self) {
        smooth_scroll_to(&self.window, 0.0);
    }
}
