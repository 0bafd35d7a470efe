//! Navbar Burgers
//!
//! Each `.navbar-burger` toggles `is-active` on itself and on the menu
//! named by its `data-target`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::Document;

use crate::config::NavbarConfig;
use crate::error::{Result, UiError};
use crate::listener::EventListener;
use crate::page::{Page, PageElement, WebElement, WebPage};

/// Toggle the active class on `burger` and its menu together.
///
/// The menu is resolved first; if it is missing neither element changes.
pub fn toggle_burger<P: Page>(page: &P, burger: &P::Element, config: &NavbarConfig) -> Result<bool> {
    let target_id = burger.data(&config.target_data_key).ok_or_else(|| UiError::MissingData {
        element: burger.label(),
        attribute: config.target_data_key.clone(),
    })?;
    let menu = page
        .element_by_id(&target_id)
        .ok_or_else(|| UiError::missing(target_id.as_str()))?;

    let active = burger.toggle_class(&config.active_class)?;
    menu.toggle_class(&config.active_class)?;
    Ok(active)
}

/// `document.readyState` values after which the burgers can be looked up
pub fn parsing_finished(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Click listeners for every burger present when bound.
///
/// While the document is still loading, binding waits for `DOMContentLoaded`.
pub struct NavbarBinding {
    listeners: Rc<RefCell<Vec<EventListener>>>,
    bound: Rc<Cell<bool>>,
    _pending: Option<EventListener>,
}

impl NavbarBinding {
    pub fn bind(document: &Document, config: NavbarConfig) -> Result<Self> {
        let listeners = Rc::new(RefCell::new(Vec::new()));
        let bound = Rc::new(Cell::new(false));

        if parsing_finished(&document.ready_state()) {
            *listeners.borrow_mut() = bind_burgers(document, &config)?;
            bound.set(true);
            return Ok(Self {
                listeners,
                bound,
                _pending: None,
            });
        }

        let slot = Rc::clone(&listeners);
        let done = Rc::clone(&bound);
        let doc = document.clone();
        let pending = EventListener::new(document.as_ref(), "DOMContentLoaded", move |_| {
            if done.replace(true) {
                return;
            }
            match bind_burgers(&doc, &config) {
                Ok(bound) => *slot.borrow_mut() = bound,
                Err(e) => log::error!("binding navbar burgers failed: {}", e),
            }
        })?;
        Ok(Self {
            listeners,
            bound,
            _pending: Some(pending),
        })
    }

    /// Number of burgers with a click listener
    pub fn burgers(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Still waiting for `DOMContentLoaded`
    pub fn is_pending(&self) -> bool {
        !self.bound.get()
    }
}

fn bind_burgers(document: &Document, config: &NavbarConfig) -> Result<Vec<EventListener>> {
    let page = WebPage::new(document.clone());
    let burgers = page.elements_by_class(&config.burger_class);
    log::debug!("binding {} navbar burgers", burgers.len());

    burgers
        .into_iter()
        .map(|burger: WebElement| {
            let target = burger.0.clone();
            let page = page.clone();
            let config = config.clone();
            EventListener::new(target.as_ref(), "click", move |_| {
                if let Err(e) = toggle_burger(&page, &burger, &config) {
                    log::warn!("navbar toggle skipped: {}", e);
                }
            })
        })
        .collect()
}
