use derive_more::{Display, From};

use crate::dom::Element;

/// Identifies a dropdown by the part of its content element's id that follows
/// the configured prefix.
#[derive(Clone, Debug, Display, From, Eq, PartialEq, Hash)]
pub struct DropdownId(String);

impl DropdownId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DropdownId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<i32> for DropdownId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

/// A dropdown's content element and the container enclosing it, if any.
///
/// The container's shown marker mirrors the content's.
#[derive(Clone, Debug)]
pub struct Dropdown<E> {
    content: E,
    container: Option<E>,
}

impl<E: Element> Dropdown<E> {
    pub fn new(content: E, container: Option<E>) -> Self {
        Self { content, container }
    }

    pub fn content(&self) -> &E {
        &self.content
    }

    pub fn container(&self) -> Option<&E> {
        self.container.as_ref()
    }

    pub fn is_shown(&self, shown_class: &str) -> bool {
        self.content.has_class(shown_class)
    }

    /// Flip the content's shown marker, and return whether it's now shown.
    pub fn toggle(&self, shown_class: &str) -> bool {
        let shown = !self.is_shown(shown_class);
        self.content.set_class(shown_class, shown);

        if let Some(container) = &self.container {
            container.set_class(shown_class, shown);
        }

        shown
    }

    pub fn hide(&self, shown_class: &str) {
        self.content.remove_class(shown_class);

        if let Some(container) = &self.container {
            container.remove_class(shown_class);
        }
    }
}
