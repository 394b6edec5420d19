use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use anyhow::Result;
use folio_common::{
    config::FolioConfig,
    document_is_loading,
    menu::{ACTIVE_MARKER, MenuEvent, MenuState},
    notify::NotificationSlot,
    scroll::FrameGate,
};
use gloo_console::error as console_error;
use gloo_events::EventListener;
use tracing::{Level, debug, error, instrument, warn};
use web_sys::{Document, HtmlElement, Window};

use crate::common::dom::{select, select_all, set_marker};

pub const CONFIG_ELEMENT_ID: &str = "folio-config";

// page controller
//
// every dom handle the behaviors need is looked up once here and shared with the event
// handlers through an Rc; the only mutable state is the menu flag, the pending scroll frame
// and the live notification
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: FolioConfig,

    pub navbar: Option<HtmlElement>,
    pub nav_toggle: Option<HtmlElement>,
    pub nav_menu: Option<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub scroll_top: HtmlElement,

    pub menu: Cell<MenuState>,
    pub frame: RefCell<FrameGate<i32>>,
    pub notifications: RefCell<NotificationSlot<HtmlElement>>,
}

// entry point; waits for the document to finish parsing if the module loaded early
pub fn start() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))?;

    if document_is_loading(&document.ready_state()) {
        debug!("document still loading, deferring attach");

        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            if let Err(err) = Page::attach(window, document) {
                error!("failed to attach page behaviors: {err:#}");
            }
        })
        .forget();

        return Ok(());
    }

    Page::attach(window, document).map(|_| ())
}

// read the optional inline toml block; anything wrong with it falls back to the defaults
#[instrument(level=Level::DEBUG, skip_all)]
pub fn load_config(document: &Document) -> FolioConfig {
    let Some(doc) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        debug!("no inline config, using defaults");
        return FolioConfig::default();
    };

    match FolioConfig::from_toml(&doc) {
        Ok(config) => {
            debug!("parsed inline config");
            config
        }
        Err(err) => {
            console_error!(format!("Failed to parse #{CONFIG_ELEMENT_ID}: {err}"));
            warn!("ignoring malformed inline config: {err:#}");
            FolioConfig::default()
        }
    }
}

type AttachStep = fn(&Rc<Page>) -> Result<()>;

impl Page {
    pub fn new(window: Window, document: Document, config: FolioConfig) -> Result<Self> {
        let navbar = select::<HtmlElement>(&document, "#navbar")?;
        let nav_toggle = select::<HtmlElement>(&document, "#nav-toggle")?;
        let nav_menu = select::<HtmlElement>(&document, "#nav-menu")?;
        let nav_links = select_all(&document, ".nav-link")?;

        if navbar.is_none() {
            warn!("no #navbar on page, navbar styling disabled");
        }

        let scroll_top = Self::create_scroll_top_button(&document)?;

        Ok(Page {
            window,
            document,
            config,
            navbar,
            nav_toggle,
            nav_menu,
            nav_links,
            scroll_top,
            menu: Cell::new(MenuState::default()),
            frame: RefCell::new(FrameGate::new()),
            notifications: RefCell::new(NotificationSlot::new()),
        })
    }

    // each behavior is attached independently so that a page missing one set of elements still
    // gets the rest
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn attach(window: Window, document: Document) -> Result<Rc<Self>> {
        let config = load_config(&document);
        let page = Rc::new(Page::new(window, document, config)?);

        let steps: [(&str, AttachStep); 6] = [
            ("navigation", Page::attach_nav),
            ("scroll", Page::attach_scroll),
            ("reveal", Page::attach_reveal),
            ("contact form", Page::attach_contact),
            ("hover effects", Page::attach_hover),
            ("typing effect", Page::attach_typing),
        ];

        for (name, step) in steps {
            match step(&page) {
                Ok(()) => debug!("attached {name}"),
                Err(err) => warn!("skipping {name}: {err:#}"),
            }
        }

        if let Err(err) = page.update_active_link() {
            warn!("failed to set initial nav link: {err:#}");
        }

        Ok(page)
    }

    pub fn menu_event(&self, event: MenuEvent) {
        let state = self.menu.get().apply(event);
        self.menu.set(state);

        for element in [&self.nav_toggle, &self.nav_menu].into_iter().flatten() {
            if let Err(err) = set_marker(element, ACTIVE_MARKER, state.is_open()) {
                error!("failed to render menu state: {err:#}");
            }
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }
}
