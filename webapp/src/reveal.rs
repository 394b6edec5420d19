use std::rc::Rc;

use anyhow::Result;
use folio_common::reveal::{REVEAL_TARGETS, RevealState, VISIBLE_CLASS, root_margin, stagger_delay};
use js_sys::Array;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    common::dom::{js_err, select_all, set_marker, set_style},
    page::Page,
};

impl Page {
    pub fn attach_reveal(self: &Rc<Self>) -> Result<()> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();

                    let seen = RevealState::from_marker(target.class_list().contains(VISIBLE_CLASS));
                    if seen.observe(entry.is_intersecting()).is_visible() {
                        if let Err(err) = set_marker(&target, VISIBLE_CLASS, true) {
                            error!("failed to reveal element: {err:#}");
                        }
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.config.reveal.threshold));
        options.set_root_margin(&root_margin(&self.config.reveal));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_err)?;

        // the observer lives as long as the page does
        callback.forget();

        let mut observed = 0;
        for target in REVEAL_TARGETS {
            for (index, element) in select_all(&self.document, target.selector)?
                .into_iter()
                .enumerate()
            {
                element.class_list().add_1(target.class).map_err(js_err)?;
                set_style(&element, "animation-delay", &stagger_delay(index, &self.config.reveal))?;
                observer.observe(&element);
                observed += 1;
            }
        }

        debug!(observed, "reveal observer attached");
        Ok(())
    }
}
