use strum::{AsRefStr, Display};

use crate::dom::Element;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NavMode {
    #[default]
    Compact,
    Expanded,
}

impl NavMode {
    pub fn from_class_name(class_name: &str, expanded_class: &str) -> Self {
        if class_name
            .split_ascii_whitespace()
            .any(|token| token == expanded_class)
        {
            Self::Expanded
        } else {
            Self::Compact
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Compact => Self::Expanded,
            Self::Expanded => Self::Compact,
        }
    }

    /// Rewrite `class_name` for this mode.
    ///
    /// `nav_class` is always present and `expanded_class` present only when
    /// expanded. Other classes are kept, in order.
    pub fn render(self, class_name: &str, nav_class: &str, expanded_class: &str) -> String {
        let mut classes: Vec<&str> = Vec::new();

        if !class_name
            .split_ascii_whitespace()
            .any(|token| token == nav_class)
        {
            classes.push(nav_class);
        }

        for token in class_name.split_ascii_whitespace() {
            if token != expanded_class && !classes.contains(&token) {
                classes.push(token);
            }
        }

        if self == Self::Expanded {
            classes.push(expanded_class);
        }

        classes.join(" ")
    }
}

/// The top navigation bar.
///
/// The mode is read from the element's class each time, so changes made by
/// other scripts on the page are respected.
#[derive(Clone, Debug)]
pub struct ResponsiveNav<E> {
    element: E,
    nav_class: String,
    expanded_class: String,
}

impl<E: Element> ResponsiveNav<E> {
    pub fn new(element: E, nav_class: &str, expanded_class: &str) -> Self {
        Self {
            element,
            nav_class: nav_class.to_owned(),
            expanded_class: expanded_class.to_owned(),
        }
    }

    pub fn mode(&self) -> NavMode {
        NavMode::from_class_name(&self.element.class_name(), &self.expanded_class)
    }

    pub fn toggle(&self) -> NavMode {
        let class_name = self.element.class_name();
        let mode = NavMode::from_class_name(&class_name, &self.expanded_class).toggled();
        self.element
            .set_class_name(&mode.render(&class_name, &self.nav_class, &self.expanded_class));
        mode
    }
}
