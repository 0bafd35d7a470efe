//! In-memory page for tests.
//!
//! Elements are kept in a flat list in document order and record every
//! click and submit they receive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{describe, Banner, Page, PageElement};
use crate::error::{Result, UiError};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: String,
    classes: Vec<String>,
    data: HashMap<String, String>,
    input_type: Option<String>,
    checked: bool,
    value: String,
    text: String,
    clicks: usize,
    submits: usize,
    dismiss_class: Option<String>,
}

#[derive(Clone, Debug)]
pub struct MockElement(Rc<RefCell<Node>>);

impl MockElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    pub fn input(input_type: &str) -> Self {
        let el = Self::new("input");
        el.0.borrow_mut().input_type = Some(input_type.to_string());
        el
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = id.to_string();
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_data(self, key: &str, value: &str) -> Self {
        self.0.borrow_mut().data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.0.borrow_mut().value = value.to_string();
        self
    }

    pub fn with_checked(self, checked: bool) -> Self {
        self.0.borrow_mut().checked = checked;
        self
    }

    pub fn clicks(&self) -> usize {
        self.0.borrow().clicks
    }

    pub fn submits(&self) -> usize {
        self.0.borrow().submits
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn dismiss_class(&self) -> Option<String> {
        self.0.borrow().dismiss_class.clone()
    }

    pub fn same(&self, other: &MockElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PageElement for MockElement {
    fn click(&self) {
        self.0.borrow_mut().clicks += 1;
    }

    fn input_type(&self) -> Option<String> {
        self.0.borrow().input_type.clone()
    }

    fn is_checked(&self) -> bool {
        self.0.borrow().checked
    }

    fn set_checked(&self, checked: bool) {
        if self.0.borrow().input_type.is_some() {
            self.0.borrow_mut().checked = checked;
        }
    }

    fn value(&self) -> Result<String> {
        let node = self.0.borrow();
        match node.input_type {
            Some(_) => Ok(node.value.clone()),
            None => Err(UiError::NotAnInput { element: self.label() }),
        }
    }

    fn set_value(&self, value: &str) -> Result<()> {
        if self.0.borrow().input_type.is_none() {
            return Err(UiError::NotAnInput { element: self.label() });
        }
        self.0.borrow_mut().value = value.to_string();
        Ok(())
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.borrow().data.get(key).cloned()
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        let mut node = self.0.borrow_mut();
        match node.classes.iter().position(|c| c == class) {
            Some(idx) => {
                node.classes.remove(idx);
                Ok(false)
            }
            None => {
                node.classes.push(class.to_string());
                Ok(true)
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn submit(&self) -> Result<()> {
        if self.0.borrow().tag != "form" {
            return Err(UiError::NotAForm { element: self.label() });
        }
        self.0.borrow_mut().submits += 1;
        Ok(())
    }

    fn label(&self) -> String {
        let node = self.0.borrow();
        describe(&node.tag, &node.id, &node.classes.join(" "))
    }
}

#[derive(Default)]
pub struct MockPage {
    elements: RefCell<Vec<MockElement>>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `el` to the end of the document
    pub fn add(&self, el: MockElement) -> MockElement {
        self.elements.borrow_mut().push(el.clone());
        el
    }

    pub fn contains(&self, el: &MockElement) -> bool {
        self.elements.borrow().iter().any(|e| e.same(el))
    }

    /// Position of `el` in document order
    pub fn index_of(&self, el: &MockElement) -> Option<usize> {
        self.elements.borrow().iter().position(|e| e.same(el))
    }

    /// Click the dismiss control of a banner
    pub fn dismiss(&self, banner: &MockElement) {
        if banner.dismiss_class().is_some() {
            self.elements.borrow_mut().retain(|e| !e.same(banner));
        }
    }
}

impl Page for MockPage {
    type Element = MockElement;

    fn element_by_id(&self, id: &str) -> Option<MockElement> {
        self.elements
            .borrow()
            .iter()
            .find(|e| e.0.borrow().id == id)
            .cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<MockElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }

    fn inputs(&self) -> Vec<MockElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.0.borrow().tag == "input")
            .cloned()
            .collect()
    }

    fn insert_banner_after(&self, anchor: &MockElement, banner: &Banner) -> Result<MockElement> {
        let idx = self
            .index_of(anchor)
            .ok_or_else(|| UiError::Js(format!("{} is not attached", anchor.label())))?;
        let el = MockElement::new("div");
        {
            let mut node = el.0.borrow_mut();
            node.classes = banner.class.split_whitespace().map(str::to_string).collect();
            node.text = banner.message.clone();
            node.dismiss_class = Some(banner.dismiss_class.clone());
        }
        self.elements.borrow_mut().insert(idx + 1, el.clone());
        Ok(el)
    }
}
