//! Error Notifications
//!
//! Every failed htmx request adds a dismissible error banner after the
//! notifications container. Banners stack and are removed one at a time.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::config::NotificationConfig;
use crate::error::{Result, UiError};
use crate::listener::EventListener;
use crate::page::{Banner, Page, WebPage, BANNER_ATTRIBUTE};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = htmx, js_name = on)]
    fn htmx_on(event: &str, handler: &js_sys::Function) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = htmx, js_name = off)]
    fn htmx_off(event: &str, handler: &js_sys::Function) -> std::result::Result<JsValue, JsValue>;
}

impl From<&NotificationConfig> for Banner {
    fn from(config: &NotificationConfig) -> Self {
        Banner {
            class: config.banner_class.clone(),
            dismiss_class: config.dismiss_class.clone(),
            message: config.message.clone(),
        }
    }
}

/// Insert one error banner right after the notifications container
pub fn show_error_banner<P: Page>(page: &P, config: &NotificationConfig) -> Result<P::Element> {
    let container = page
        .element_by_id(&config.container_id)
        .ok_or_else(|| UiError::missing(config.container_id.as_str()))?;
    page.insert_banner_after(&container, &Banner::from(config))
}

/// Banner owning the clicked dismiss control, if any
fn dismissed_banner(target: &Element, dismiss_class: &str) -> Option<Element> {
    if !target.class_list().contains(dismiss_class) {
        return None;
    }
    target.parent_element().filter(|parent| parent.has_attribute(BANNER_ATTRIBUTE))
}

/// One delegated click listener that removes a banner when its dismiss control is clicked
pub fn bind_dismiss(document: &Document, dismiss_class: &str) -> Result<EventListener> {
    let dismiss_class = dismiss_class.to_string();
    EventListener::new(document.as_ref(), "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(banner) = dismissed_banner(&target, &dismiss_class) {
            banner.remove();
        }
    })
}

/// Error banners: the request error subscription plus banner dismissal
pub struct ErrorNotifier {
    _subscription: ErrorSubscription,
    _dismiss: EventListener,
}

impl ErrorNotifier {
    pub fn install(document: &Document, config: NotificationConfig) -> Result<Self> {
        let dismiss = bind_dismiss(document, &config.dismiss_class)?;
        let subscription = ErrorSubscription::subscribe(document, config)?;
        Ok(Self {
            _subscription: subscription,
            _dismiss: dismiss,
        })
    }
}

/// Subscription to the request error event
pub enum ErrorSubscription {
    /// Registered through `htmx.on`, removed with `htmx.off`
    Htmx {
        event: String,
        callback: Closure<dyn FnMut(Event)>,
    },
    /// `htmx` global missing; listening for the bubbled event on the document
    Document(EventListener),
}

impl ErrorSubscription {
    pub fn subscribe(document: &Document, config: NotificationConfig) -> Result<Self> {
        let page = WebPage::new(document.clone());
        let event = config.error_event.clone();
        let handler = move |_: Event| {
            if let Err(e) = show_error_banner(&page, &config) {
                log::warn!("could not show error banner: {}", e);
            }
        };

        let callback = Closure::<dyn FnMut(Event)>::new(handler.clone());
        match htmx_on(&event, callback.as_ref().unchecked_ref()) {
            Ok(_) => Ok(Self::Htmx { event, callback }),
            Err(e) => {
                log::info!("htmx unavailable ({}), listening on document", UiError::from_js(e));
                drop(callback);
                let listener = EventListener::new(document.as_ref(), &event, handler)?;
                Ok(Self::Document(listener))
            }
        }
    }
}

impl Drop for ErrorSubscription {
    fn drop(&mut self) {
        if let Self::Htmx { event, callback } = self {
            if let Err(e) = htmx_off(event, callback.as_ref().unchecked_ref()) {
                log::warn!("htmx.off failed: {}", UiError::from_js(e));
            }
        }
    }
}
