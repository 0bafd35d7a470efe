//! UI Configuration
//!
//! Element ids, marker classes and sort markers the behaviors rely on.
//! Defaults match the markup rendered by the admin templates; a page can
//! override any of them with an embedded JSON block:
//!
//! ```html
//! <script type="application/json" id="admin-ui-config">
//!   {"sort": {"markers": {"asc": "{{ sort_order_asc }}", "desc": "{{ sort_order_desc }}"}}}
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id of the embedded JSON config element
pub const CONFIG_ELEMENT_ID: &str = "admin-ui-config";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub keyboard: KeyboardConfig,
    pub sort: SortConfig,
    pub navbar: NavbarConfig,
    pub notifications: NotificationConfig,
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the embedded config text, falling back to defaults when absent or malformed
    pub fn from_embedded(text: Option<&str>) -> Self {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Class marking the element clicked on left arrow
    pub left_class: String,
    /// Class marking the element clicked on right arrow
    pub right_class: String,
    /// Suppress the browser default for a handled arrow even when nothing was clicked
    pub prevent_default_without_target: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            left_class: "left-arrow-click".to_string(),
            right_class: "right-arrow-click".to_string(),
            prevent_default_without_target: true,
        }
    }
}

/// Opaque order tokens rendered by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortMarkers {
    pub asc: String,
    pub desc: String,
}

impl Default for SortMarkers {
    fn default() -> Self {
        Self {
            asc: "Asc".to_string(),
            desc: "Desc".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub column_field_id: String,
    pub order_field_id: String,
    pub form_id: String,
    pub markers: SortMarkers,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column_field_id: "sort_by".to_string(),
            order_field_id: "sort_order".to_string(),
            form_id: "search_form".to_string(),
            markers: SortMarkers::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub burger_class: String,
    pub active_class: String,
    /// `data-*` key holding the menu id, without the `data-` prefix
    pub target_data_key: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            burger_class: "navbar-burger".to_string(),
            active_class: "is-active".to_string(),
            target_data_key: "target".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Banners are inserted right after this element
    pub container_id: String,
    pub error_event: String,
    pub message: String,
    pub banner_class: String,
    pub dismiss_class: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            container_id: "notifications".to_string(),
            error_event: "htmx:responseError".to_string(),
            message: "An Error occurred".to_string(),
            banner_class: "notification mb-4 is-light is-danger".to_string(),
            dismiss_class: "delete".to_string(),
        }
    }
}
