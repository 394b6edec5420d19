use std::rc::Rc;

use anyhow::Result;
use folio_common::notify::{NotificationKind, NotificationTimeline, SHOW_CLASS};
use gloo_timers::callback::Timeout;
use tracing::{debug, error};

use crate::{
    common::{
        dom::{append_to_body, create_html, inject_stylesheet, set_marker},
        style::{NOTIFICATION_STYLE_ID, NOTIFICATION_STYLES},
    },
    page::Page,
};

impl Page {
    // always succeeds from the caller's point of view; dom failures are only logged
    pub fn notify(self: &Rc<Self>, message: &str, kind: NotificationKind) {
        if let Err(err) = self.show_notification(message, kind) {
            error!("failed to show {kind} notification: {err:#}");
        }
    }

    fn show_notification(self: &Rc<Self>, message: &str, kind: NotificationKind) -> Result<()> {
        inject_stylesheet(&self.document, NOTIFICATION_STYLE_ID, NOTIFICATION_STYLES)?;

        let node = create_html(&self.document, "div")?;
        node.set_class_name(&kind.class_name());
        node.set_text_content(Some(message));

        let (id, evicted) = self.notifications.borrow_mut().show(node.clone());
        if let Some(old) = evicted {
            old.remove();
        }

        append_to_body(&self.document, &node)?;
        debug!(%kind, "notification shown");

        let timeline = NotificationTimeline::new(&self.config.notify);

        let shown = node.clone();
        Timeout::new(timeline.show_at, move || {
            if let Err(err) = set_marker(&shown, SHOW_CLASS, true) {
                error!("failed to slide notification in: {err:#}");
            }
        })
        .forget();

        // these timers cannot be cancelled; an evicted node is already detached, so removing it
        // again is harmless and release() ignores the stale id
        let page = self.clone();
        Timeout::new(timeline.hide_at, move || {
            if let Err(err) = set_marker(&node, SHOW_CLASS, false) {
                error!("failed to slide notification out: {err:#}");
            }

            Timeout::new(timeline.remove_at - timeline.hide_at, move || {
                node.remove();
                page.notifications.borrow_mut().release(id);
            })
            .forget();
        })
        .forget();

        Ok(())
    }
}
