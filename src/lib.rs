//! Admin UI Page Helpers
//!
//! Keyboard paging, "select all" checkboxes, column sorting, navbar
//! burgers and htmx error banners for the server-rendered admin pages.

mod app;
mod checkbox;
mod config;
mod error;
mod keyboard;
mod listener;
mod navbar;
mod notify;
mod page;
mod sort;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use app::AdminUi;
pub use checkbox::{check_all, check_all_from};
pub use config::{
    KeyboardConfig, NavbarConfig, NotificationConfig, SortConfig, SortMarkers, UiConfig, CONFIG_ELEMENT_ID,
};
pub use error::{Result, UiError};
pub use keyboard::{bind_keyboard, handle_keydown, key_code_for, Direction, KeyAction, KeyOutcome};
pub use listener::EventListener;
pub use navbar::{parsing_finished, toggle_burger, NavbarBinding};
pub use notify::{bind_dismiss, show_error_banner, ErrorNotifier, ErrorSubscription};
pub use page::{Banner, Page, PageElement, WebElement, WebPage, BANNER_ATTRIBUTE};
pub use sort::{SortOrder, SortToggler};

thread_local! {
    static INSTALLED: RefCell<Option<AdminUi>> = const { RefCell::new(None) };
}

fn page_document() -> std::result::Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn replace_installed(config: UiConfig) -> std::result::Result<(), JsValue> {
    let document = page_document()?;
    // Old handle goes first so its globals are gone before the new ones are set
    teardown();
    let ui = AdminUi::install(&document, config)?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(ui));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Info);

    let page = WebPage::new(page_document()?);
    let config = UiConfig::from_embedded(page.text_of(CONFIG_ELEMENT_ID).as_deref());
    replace_installed(config)
}

/// Reinstall with an explicit config object instead of the embedded one
#[wasm_bindgen]
pub fn install_with(config: JsValue) -> std::result::Result<(), JsValue> {
    let config: UiConfig = serde_wasm_bindgen::from_value(config)?;
    replace_installed(config)
}

/// Remove every listener and global installed by `start` or `install_with`
#[wasm_bindgen]
pub fn teardown() {
    if let Some(ui) = INSTALLED.with(|slot| slot.borrow_mut().take()) {
        ui.dispose();
    }
}

/// Recent log lines kept by the console logger, oldest first
#[wasm_bindgen]
pub fn recent_logs() -> Vec<String> {
    console_logger::recent()
}
