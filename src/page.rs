//! Page Access
//!
//! The slice of the DOM the behaviors read and write, behind a pair of
//! traits so the same logic drives both the browser document and the
//! in-memory page used by tests.

mod web;
#[cfg(test)]
pub mod mock;

pub use web::{WebElement, WebPage};

use crate::error::Result;

/// Attribute marking banners inserted by `insert_banner_after`
pub const BANNER_ATTRIBUTE: &str = "data-admin-ui-banner";

/// Dismissible notification inserted into the page
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Space separated classes for the banner block
    pub class: String,
    /// Class of the dismiss button
    pub dismiss_class: String,
    pub message: String,
}

pub trait PageElement: Clone {
    /// Run the element's click behavior
    fn click(&self);

    /// `type` of an `<input>`, `None` for other elements
    fn input_type(&self) -> Option<String>;

    fn is_checked(&self) -> bool;

    fn set_checked(&self, checked: bool);

    fn value(&self) -> Result<String>;

    fn set_value(&self, value: &str) -> Result<()>;

    /// Read `data-<key>`
    fn data(&self, key: &str) -> Option<String>;

    /// Toggle `class`, returning whether it is now present
    fn toggle_class(&self, class: &str) -> Result<bool>;

    fn has_class(&self, class: &str) -> bool;

    /// Submit the element as a form
    fn submit(&self) -> Result<()>;

    /// Short description for log lines, e.g. `a#next` or `span.navbar-burger`
    fn label(&self) -> String;
}

pub trait Page {
    type Element: PageElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Elements carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn first_by_class(&self, class: &str) -> Option<Self::Element> {
        self.elements_by_class(class).into_iter().next()
    }

    /// Every `<input>` on the page, in document order
    fn inputs(&self) -> Vec<Self::Element>;

    /// Insert `banner` immediately after `anchor` and return it.
    /// The banner carries `BANNER_ATTRIBUTE`; dismissal is handled by a
    /// single delegated click listener, see `notify::bind_dismiss`.
    fn insert_banner_after(&self, anchor: &Self::Element, banner: &Banner) -> Result<Self::Element>;
}

/// Label built from a tag name, id and classes
pub(crate) fn describe(tag: &str, id: &str, class: &str) -> String {
    let tag = tag.to_ascii_lowercase();
    if !id.is_empty() {
        return format!("{}#{}", tag, id);
    }
    match class.split_whitespace().next() {
        Some(first) => format!("{}.{}", tag, first),
        None => tag,
    }
}
