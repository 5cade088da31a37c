/// A handle to one node in the page.
///
/// Handles are cheap to clone and share the underlying node, the way browser
/// element references do. Mutating methods therefore take `&self`.
pub trait Element: Clone {
    fn id(&self) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Add `class` when `on` is true, remove it otherwise.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class)
        } else {
            self.remove_class(class)
        }
    }

    fn class_name(&self) -> String;

    fn set_class_name(&self, class_name: &str);

    /// The nearest ancestor carrying `class`, starting with `self`.
    fn closest(&self, class: &str) -> Option<Self>;

    fn is_same_node(&self, other: &Self) -> bool;
}

pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}
