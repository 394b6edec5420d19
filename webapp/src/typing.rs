use std::rc::Rc;

use anyhow::Result;
use folio_common::typing::{Typewriter, TypingStep, heading_with_prefix, split_prefix};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::{
    common::dom::{js_err, select},
    page::Page,
};

const NAME_SELECTOR: &str = ".highlight";

impl Page {
    pub fn attach_typing(self: &Rc<Self>) -> Result<()> {
        let Some(title) = select::<HtmlElement>(&self.document, ".hero-title")? else {
            return Ok(());
        };
        let Some(name_span) = title.query_selector(NAME_SELECTOR).map_err(js_err)? else {
            return Ok(());
        };

        let html = title.inner_html();
        let Some(prefix) = split_prefix(&html) else {
            warn!("hero title name span has unexpected markup, skipping typing effect");
            return Ok(());
        };

        let typewriter = Typewriter::new(prefix, name_span.text_content().unwrap_or_default());
        title.set_inner_html(&heading_with_prefix(prefix));

        let config = self.config.typing.clone();
        spawn_local(async move {
            TimeoutFuture::new(config.start_delay_ms).await;

            for step in typewriter {
                render_step(&title, step);
                TimeoutFuture::new(config.interval_ms).await;
            }

            debug!("typing effect finished");
        });

        Ok(())
    }
}

fn render_step(title: &HtmlElement, step: TypingStep) {
    match step {
        TypingStep::Prefix(prefix) => title.set_inner_html(&heading_with_prefix(&prefix)),
        // every prefix render replaces the span, so it has to be looked up again
        TypingStep::Name(name) => match title.query_selector(NAME_SELECTOR) {
            Ok(Some(span)) => span.set_text_content(Some(&name)),
            _ => warn!("hero name span disappeared while typing"),
        },
    }
}
