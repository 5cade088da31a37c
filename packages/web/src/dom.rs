use navmenu::dom::{Document, Element};
use wasm_bindgen::UnwrapThrowExt;

/// A browser element.
#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }
}

// Class names are checked to be single tokens by `MenuConfig::validate`, so the
// class list calls can't fail.
impl Element for WebElement {
    fn id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.class_list().add_1(class).unwrap_throw()
    }

    fn remove_class(&self, class: &str) {
        self.0.class_list().remove_1(class).unwrap_throw()
    }

    fn class_name(&self) -> String {
        self.0.class_name()
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.set_class_name(class_name)
    }

    fn closest(&self, class: &str) -> Option<Self> {
        let selector = format!(".{}", web_sys::css::escape(class));
        self.0.closest(&selector).ok().flatten().map(Self)
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[derive(Clone, Debug)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let collection = self.0.get_elements_by_class_name(class);

        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(WebElement)
            .collect()
    }
}
