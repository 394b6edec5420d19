use std::rc::Rc;

use anyhow::Result;
use folio_common::{
    contact::{ContactForm, PendingSubmit, SUCCESS_MESSAGE},
    notify::NotificationKind,
};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use crate::{
    common::dom::{js_err, select},
    page::Page,
};

const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;

impl Page {
    pub fn attach_contact(self: &Rc<Self>) -> Result<()> {
        let Some(form) = select::<HtmlFormElement>(&self.document, ".contact-form")? else {
            debug!("no contact form on page");
            return Ok(());
        };

        let page = self.clone();
        let target = form.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();

                if let Err(err) = page.submit_contact(&target) {
                    error!("contact form submission failed: {err:#}");
                }
            },
        )
        .forget();

        Ok(())
    }

    // there is no transport behind this form; a successful submission only waits out the
    // configured latency and then reports success
    fn submit_contact(self: &Rc<Self>, form: &HtmlFormElement) -> Result<()> {
        let data = FormData::new_with_form(form).map_err(js_err)?;
        let contact = ContactForm::from_fields(|field| data.get(field.name()).as_string());

        if let Err(err) = contact.validate() {
            debug!(?err, "contact form rejected");
            self.notify(&err.to_string(), NotificationKind::Error);
            return Ok(());
        }

        let button = form
            .query_selector(SUBMIT_SELECTOR)
            .map_err(js_err)?
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

        let pending = button.as_ref().map(|button| {
            let pending = PendingSubmit::begin(button.text_content().unwrap_or_default());
            button.set_text_content(Some(pending.label()));
            button.set_disabled(true);
            pending
        });

        if button.is_none() {
            warn!("contact form has no submit button");
        }

        info!("simulating contact form submission");

        let page = self.clone();
        let form = form.clone();
        let latency = self.config.contact.latency_ms;
        spawn_local(async move {
            TimeoutFuture::new(latency).await;

            page.notify(SUCCESS_MESSAGE, NotificationKind::Success);
            form.reset();

            if let (Some(button), Some(pending)) = (button, pending) {
                button.set_text_content(Some(&pending.finish()));
                button.set_disabled(false);
            }
        });

        Ok(())
    }
}
