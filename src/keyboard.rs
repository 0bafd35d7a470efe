//! Keyboard Navigation
//!
//! Left/right arrow keys click the page's previous/next navigation links.

use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::config::KeyboardConfig;
use crate::error::Result;
use crate::listener::EventListener;
use crate::page::{Page, PageElement, WebPage};

const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;

/// Legacy key code for a `KeyboardEvent.key` name, 0 when unmapped
pub fn key_code_for(key: &str) -> u32 {
    match key {
        "ArrowLeft" | "Left" => KEY_LEFT,
        "ArrowUp" | "Up" => KEY_UP,
        "ArrowRight" | "Right" => KEY_RIGHT,
        "ArrowDown" | "Down" => KEY_DOWN,
        _ => 0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Direction),
    /// Up/down arrows: recognised but not bound to anything yet
    Reserved,
    Pass,
}

impl KeyAction {
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEY_LEFT => Self::Navigate(Direction::Left),
            KEY_RIGHT => Self::Navigate(Direction::Right),
            KEY_UP | KEY_DOWN => Self::Reserved,
            _ => Self::Pass,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub clicked: bool,
    pub prevent_default: bool,
}

/// Resolve a key press against the page, clicking the navigation target if any
pub fn handle_keydown<P: Page>(page: &P, key_code: u32, config: &KeyboardConfig) -> KeyOutcome {
    let direction = match KeyAction::from_key_code(key_code) {
        KeyAction::Navigate(direction) => direction,
        KeyAction::Reserved | KeyAction::Pass => return KeyOutcome::default(),
    };
    let class = match direction {
        Direction::Left => &config.left_class,
        Direction::Right => &config.right_class,
    };

    match page.first_by_class(class) {
        Some(target) => {
            log::debug!("{:?} arrow -> {}", direction, target.label());
            target.click();
            KeyOutcome {
                clicked: true,
                prevent_default: true,
            }
        }
        None => KeyOutcome {
            clicked: false,
            prevent_default: config.prevent_default_without_target,
        },
    }
}

/// Listen for key presses on `document`
pub fn bind_keyboard(document: &Document, config: KeyboardConfig) -> Result<EventListener> {
    let page = WebPage::new(document.clone());
    EventListener::new(document.as_ref(), "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        // synthetic events often carry only `key`
        let code = match key_ev.key_code() {
            0 => key_code_for(&key_ev.key()),
            code => code,
        };
        let outcome = handle_keydown(&page, code, &config);
        if outcome.prevent_default {
            ev.prevent_default();
        }
    })
}
