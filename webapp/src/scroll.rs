use std::rc::Rc;

use anyhow::Result;
use folio_common::{
    menu::ACTIVE_MARKER,
    scroll::{NAVBAR_BACKDROP, ScrollView, SectionBounds, active_section},
};
use gloo_events::EventListener;
use tracing::{error, trace};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlElement};

use crate::{
    common::{
        dom::{append_to_body, create_html, inject_stylesheet, js_err, select_all, set_marker, set_style},
        style::{SCROLL_TOP_STYLE_ID, SCROLL_TOP_STYLES},
    },
    page::Page,
};

const SCROLL_TOP_VISIBLE: &str = "visible";

impl Page {
    pub(crate) fn create_scroll_top_button(document: &Document) -> Result<HtmlElement> {
        inject_stylesheet(document, SCROLL_TOP_STYLE_ID, SCROLL_TOP_STYLES)?;

        let button = create_html(document, "button")?;
        button.set_inner_html(r#"<i class="fas fa-chevron-up"></i>"#);
        button.set_class_name("scroll-to-top");
        button.set_attribute("aria-label", "Scroll to top").map_err(js_err)?;

        append_to_body(document, &button)?;
        Ok(button)
    }

    pub fn attach_scroll(self: &Rc<Self>) -> Result<()> {
        let page = self.clone();
        EventListener::new(&self.window, "scroll", move |_| page.request_scroll_frame()).forget();

        let page = self.clone();
        EventListener::new(&self.scroll_top, "click", move |_| page.scroll_to_top()).forget();

        Ok(())
    }

    // scroll events arrive far more often than frames are drawn, so the work is deferred to the
    // next animation frame and any events before then are dropped
    fn request_scroll_frame(self: &Rc<Self>) {
        let page = self.clone();
        let scheduled = self.frame.borrow_mut().schedule(|| {
            let callback = Closure::once_into_js(move || {
                if let Err(err) = page.handle_scroll() {
                    error!("scroll update failed: {err:#}");
                }
                page.frame.borrow_mut().complete();
            });

            self.window.request_animation_frame(callback.unchecked_ref())
        });

        match scheduled {
            Ok(true) => trace!("scroll frame requested"),
            Ok(false) => {}
            Err(err) => error!("failed to request animation frame: {}", js_err(err)),
        }
    }

    pub fn handle_scroll(&self) -> Result<()> {
        let view = ScrollView::at(self.scroll_offset(), &self.config.scroll);

        set_marker(&self.scroll_top, SCROLL_TOP_VISIBLE, view.show_scroll_top)?;

        if let Some(navbar) = &self.navbar {
            set_style(navbar, "background", view.navbar_background())?;
            set_style(navbar, "backdrop-filter", NAVBAR_BACKDROP)?;
        }

        self.update_active_link()
    }

    // sections are measured fresh every time since layout can shift under us
    pub fn update_active_link(&self) -> Result<()> {
        let sections: Vec<_> = select_all(&self.document, "section")?
            .into_iter()
            .map(|section| {
                SectionBounds::new(
                    section.get_attribute("id"),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect();

        let Some(active) = active_section(&sections, self.scroll_offset(), &self.config.scroll)
        else {
            return Ok(());
        };

        let href = active.link_href();
        for link in &self.nav_links {
            let current = href.is_some() && link.get_attribute("href") == href;
            set_marker(link, ACTIVE_MARKER, current)?;
        }

        Ok(())
    }
}
