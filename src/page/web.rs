//! Browser implementation of the page traits over `web_sys`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCollection, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{describe, Banner, Page, PageElement, BANNER_ATTRIBUTE};
use crate::error::{Result, UiError};

#[derive(Clone, Debug)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Text content of the element with `id`, if present
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id).and_then(|el| el.text_content())
    }
}

fn collect(collection: HtmlCollection) -> Vec<WebElement> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(WebElement)
        .collect()
}

impl Page for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        collect(self.document.get_elements_by_class_name(class))
    }

    fn first_by_class(&self, class: &str) -> Option<WebElement> {
        self.document.get_elements_by_class_name(class).item(0).map(WebElement)
    }

    fn inputs(&self) -> Vec<WebElement> {
        collect(self.document.get_elements_by_tag_name("input"))
    }

    fn insert_banner_after(&self, anchor: &WebElement, banner: &Banner) -> Result<WebElement> {
        let block = self.document.create_element("div").map_err(UiError::from_js)?;
        block.set_class_name(&banner.class);
        block
            .set_attribute(BANNER_ATTRIBUTE, "")
            .map_err(UiError::from_js)?;

        let dismiss = self.document.create_element("button").map_err(UiError::from_js)?;
        dismiss.set_class_name(&banner.dismiss_class);

        block.append_child(&dismiss).map_err(UiError::from_js)?;
        let text = self.document.create_text_node(&banner.message);
        block.append_child(&text).map_err(UiError::from_js)?;

        anchor
            .0
            .insert_adjacent_element("afterend", &block)
            .map_err(UiError::from_js)?;
        Ok(WebElement(block))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub Element);

impl WebElement {
    fn as_input(&self) -> Result<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>().ok_or_else(|| UiError::NotAnInput {
            element: self.label(),
        })
    }
}

impl PageElement for WebElement {
    fn click(&self) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            el.click();
        }
    }

    fn input_type(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlInputElement>().map(|input| input.type_())
    }

    fn is_checked(&self) -> bool {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn value(&self) -> Result<String> {
        Ok(self.as_input()?.value())
    }

    fn set_value(&self, value: &str) -> Result<()> {
        self.as_input()?.set_value(value);
        Ok(())
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{}", key))
    }

    fn toggle_class(&self, class: &str) -> Result<bool> {
        self.0.class_list().toggle(class).map_err(UiError::from_js)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn submit(&self) -> Result<()> {
        let form = self.0.dyn_ref::<HtmlFormElement>().ok_or_else(|| UiError::NotAForm {
            element: self.label(),
        })?;
        form.submit().map_err(UiError::from_js)
    }

    fn label(&self) -> String {
        describe(&self.0.tag_name(), &self.0.id(), &self.0.class_name())
    }
}
