use std::rc::Rc;

use anyhow::Result;
use folio_common::hover::{
    InlineStyle, LINK_TRANSITION, Pointer, link_reveal_delay, project_link_style, skill_item_style,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use tracing::error;
use web_sys::HtmlElement;

use crate::{
    common::dom::{select_all, select_all_within, set_style},
    page::Page,
};

const POINTER_EVENTS: [(&str, Pointer); 2] =
    [("mouseenter", Pointer::Enter), ("mouseleave", Pointer::Leave)];

fn apply_style(element: &HtmlElement, style: InlineStyle) {
    let mut result = set_style(element, "transform", style.transform);
    if let Some(opacity) = style.opacity {
        result = result.and_then(|_| set_style(element, "opacity", opacity));
    }

    if let Err(err) = result {
        error!("failed to apply hover style: {err:#}");
    }
}

impl Page {
    pub fn attach_hover(self: &Rc<Self>) -> Result<()> {
        for item in select_all(&self.document, ".skill-item")? {
            for (event, pointer) in POINTER_EVENTS {
                let target = item.clone();
                EventListener::new(&item, event, move |_| {
                    apply_style(&target, skill_item_style(pointer))
                })
                .forget();
            }
        }

        for card in select_all(&self.document, ".project-card")? {
            let links = Rc::new(select_all_within(&card, ".project-link")?);

            for link in links.iter() {
                apply_style(link, project_link_style(Pointer::Leave));
                set_style(link, "transition", LINK_TRANSITION)?;
            }

            let revealed = links.clone();
            let config = self.config.hover.clone();
            EventListener::new(&card, "mouseenter", move |_| {
                for (index, link) in revealed.iter().enumerate() {
                    let link = link.clone();
                    Timeout::new(link_reveal_delay(index, &config), move || {
                        apply_style(&link, project_link_style(Pointer::Enter))
                    })
                    .forget();
                }
            })
            .forget();

            EventListener::new(&card, "mouseleave", move |_| {
                for link in links.iter() {
                    apply_style(link, project_link_style(Pointer::Leave));
                }
            })
            .forget();
        }

        Ok(())
    }
}
