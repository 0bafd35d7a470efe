//! Admin UI
//!
//! Installs every page behavior against one document and owns the
//! resulting listeners. Dropping the handle removes all of them.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::checkbox::check_all_from;
use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::keyboard::bind_keyboard;
use crate::listener::EventListener;
use crate::navbar::NavbarBinding;
use crate::notify::ErrorNotifier;
use crate::page::{WebElement, WebPage};
use crate::sort::SortToggler;

const CHECK_ALL_GLOBAL: &str = "checkAll";
const SORT_BY_GLOBAL: &str = "sort_by";

pub struct AdminUi {
    _keyboard: EventListener,
    _navbar: NavbarBinding,
    _errors: ErrorNotifier,
    _globals: Option<PageGlobals>,
}

impl AdminUi {
    pub fn install(document: &Document, config: UiConfig) -> Result<Self> {
        let keyboard = bind_keyboard(document, config.keyboard)?;
        let navbar = NavbarBinding::bind(document, config.navbar)?;
        let errors = ErrorNotifier::install(document, config.notifications)?;

        let globals = match document.default_view() {
            Some(window) => Some(PageGlobals::install(window, document, SortToggler::new(config.sort))?),
            None => {
                log::warn!("document has no window, skipping {} and {}", CHECK_ALL_GLOBAL, SORT_BY_GLOBAL);
                None
            }
        };

        if navbar.is_pending() {
            log::info!("admin ui installed, navbar burgers bind on DOMContentLoaded");
        } else {
            log::info!("admin ui installed ({} navbar burgers)", navbar.burgers());
        }
        Ok(Self {
            _keyboard: keyboard,
            _navbar: navbar,
            _errors: errors,
            _globals: globals,
        })
    }

    pub fn dispose(self) {
        log::info!("admin ui removed");
    }
}

/// `window.checkAll(box)` and `window.sort_by(column)` for inline template handlers
struct PageGlobals {
    window: Window,
    _check_all: Closure<dyn FnMut(JsValue)>,
    _sort_by: Closure<dyn FnMut(String)>,
}

impl PageGlobals {
    fn install(window: Window, document: &Document, toggler: SortToggler) -> Result<Self> {
        let page = WebPage::new(document.clone());
        let check_all = Closure::<dyn FnMut(JsValue)>::new(move |trigger: JsValue| {
            match trigger.dyn_into::<Element>() {
                Ok(el) => {
                    check_all_from(&page, &WebElement(el));
                }
                Err(_) => log::warn!("{} called without an element", CHECK_ALL_GLOBAL),
            }
        });

        let page = WebPage::new(document.clone());
        let sort_by = Closure::<dyn FnMut(String)>::new(move |column: String| {
            if let Err(e) = toggler.sort_by(&page, &column) {
                log::warn!("sort by {} skipped: {}", column, e);
            }
        });

        set_global(&window, CHECK_ALL_GLOBAL, check_all.as_ref())?;
        set_global(&window, SORT_BY_GLOBAL, sort_by.as_ref())?;
        Ok(Self {
            window,
            _check_all: check_all,
            _sort_by: sort_by,
        })
    }
}

fn set_global(window: &Window, name: &str, value: &JsValue) -> Result<()> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), value).map_err(UiError::from_js)?;
    Ok(())
}

impl Drop for PageGlobals {
    fn drop(&mut self) {
        for name in [CHECK_ALL_GLOBAL, SORT_BY_GLOBAL] {
            let _ = js_sys::Reflect::delete_property(self.window.as_ref(), &JsValue::from_str(name));
        }
    }
}
