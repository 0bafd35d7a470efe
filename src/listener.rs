//! Event Listener Handles
//!
//! DOM listeners owned by a Rust value: the callback stays alive for as
//! long as the handle does and is removed from its target on drop.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::{Result, UiError};

pub struct EventListener {
    target: EventTarget,
    event_type: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Add `handler` for `event_type` on `target`
    pub fn new<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(UiError::from_js)?;
        Ok(Self {
            target: target.clone(),
            event_type: event_type.to_string(),
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event_type, self.callback.as_ref().unchecked_ref());
    }
}
