use serde::Deserialize;
use thiserror::Error;

/// The naming conventions the page markup follows.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Dropdown content ids are this prefix followed by the dropdown's id.
    pub dropdown_id_prefix: String,
    pub nav_id: String,
    /// Marks the element enclosing a dropdown's trigger and content.
    pub container_class: String,
    pub content_class: String,
    pub shown_class: String,
    pub trigger_class: String,
    /// The nav's class in compact mode.
    pub nav_class: String,
    /// Added to the nav's class in expanded mode.
    pub expanded_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            dropdown_id_prefix: "myDropdown".to_owned(),
            nav_id: "myTopnav".to_owned(),
            container_class: "dropdown".to_owned(),
            content_class: "dropdown-content".to_owned(),
            shown_class: "show".to_owned(),
            trigger_class: "dropbtn".to_owned(),
            nav_class: "topnav".to_owned(),
            expanded_class: "responsive".to_owned(),
        }
    }
}

impl MenuConfig {
    /// Check every class name is a single class token.
    pub fn validate(&self) -> Result<(), Error> {
        if self.dropdown_id_prefix.is_empty() {
            return Err(Error::EmptyIdPrefix);
        }

        if self.nav_id.is_empty() {
            return Err(Error::EmptyNavId);
        }

        for (field, value) in self.class_names() {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(Error::InvalidClassName {
                    field,
                    value: value.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Strip the dropdown prefix from an element id.
    pub fn dropdown_suffix<'a>(&self, element_id: &'a str) -> Option<&'a str> {
        element_id.strip_prefix(self.dropdown_id_prefix.as_str())
    }

    fn class_names(&self) -> [(&'static str, &str); 6] {
        [
            ("containerClass", self.container_class.as_str()),
            ("contentClass", self.content_class.as_str()),
            ("shownClass", self.shown_class.as_str()),
            ("triggerClass", self.trigger_class.as_str()),
            ("navClass", self.nav_class.as_str()),
            ("expandedClass", self.expanded_class.as_str()),
        ]
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("`{field}` must be a single class name, got {value:?}")]
    InvalidClassName { field: &'static str, value: String },
    #[error("`dropdownIdPrefix` must not be empty")]
    EmptyIdPrefix,
    #[error("`navId` must not be empty")]
    EmptyNavId,
}
