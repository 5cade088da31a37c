use std::collections::HashMap;

use crate::{
    config::MenuConfig,
    dom::{Document, Element},
    dropdown::{Dropdown, DropdownId},
    nav::{NavMode, ResponsiveNav},
};

/// Owns the state of a page's menu: which dropdown is open, and the nav bar.
///
/// Missing elements are never an error. Actions that refer to them do
/// nothing.
pub struct MenuController<D: Document> {
    document: D,
    config: MenuConfig,
    dropdowns: Vec<Dropdown<D::Element>>,
    index: HashMap<DropdownId, usize>,
    open: Option<usize>,
    nav: Option<ResponsiveNav<D::Element>>,
}

impl<D: Document> MenuController<D> {
    /// A controller with nothing bound yet.
    ///
    /// Dropdowns are still looked up in `document` by id when they're first
    /// opened.
    pub fn new(document: D, config: MenuConfig) -> Self {
        Self {
            document,
            config,
            dropdowns: Vec::new(),
            index: HashMap::new(),
            open: None,
            nav: None,
        }
    }

    /// Find the menu elements in `document`.
    ///
    /// Every dropdown content element is registered, so an outside click hides
    /// it. Those with an id made of the dropdown prefix and a suffix can be
    /// opened by that suffix.
    pub fn bind(document: D, config: MenuConfig) -> Self {
        let contents = document.elements_by_class(&config.content_class);
        let nav = document.element_by_id(&config.nav_id);
        let mut controller = Self::new(document, config);

        for content in contents {
            let id = content.id().and_then(|element_id| {
                controller
                    .config
                    .dropdown_suffix(&element_id)
                    .map(DropdownId::from)
            });
            let container = content.closest(&controller.config.container_class);
            controller.add_dropdown(id, Dropdown::new(content, container));
        }

        if let Some(nav) = nav {
            controller.set_nav(nav);
        }

        controller
    }

    /// Register a dropdown. Dropdowns without an id are only ever closed by an
    /// outside click.
    ///
    /// If `id` is already taken, the earlier dropdown keeps it.
    pub fn add_dropdown(&mut self, id: Option<DropdownId>, dropdown: Dropdown<D::Element>) {
        let position = self.dropdowns.len();
        self.dropdowns.push(dropdown);

        if let Some(id) = id {
            self.index.entry(id).or_insert(position);
        }
    }

    pub fn set_nav(&mut self, element: D::Element) {
        self.nav = Some(ResponsiveNav::new(
            element,
            &self.config.nav_class,
            &self.config.expanded_class,
        ));
    }

    pub fn dropdown(&self, id: impl Into<DropdownId>) -> Option<&Dropdown<D::Element>> {
        self.index
            .get(&id.into())
            .map(|&position| &self.dropdowns[position])
    }

    pub fn dropdown_count(&self) -> usize {
        self.dropdowns.len()
    }

    /// The dropdown most recently opened by [`Self::open_or_close_dropdown`],
    /// while it's still open.
    pub fn open_dropdown(&self) -> Option<&Dropdown<D::Element>> {
        self.open.map(|position| &self.dropdowns[position])
    }

    pub fn nav_mode(&self) -> Option<NavMode> {
        self.nav.as_ref().map(ResponsiveNav::mode)
    }

    /// Close the open dropdown, then toggle dropdown `id`.
    ///
    /// If `id` is the dropdown that was open, it stays closed.
    pub fn open_or_close_dropdown(&mut self, id: impl Into<DropdownId>) {
        let shown_class = &self.config.shown_class;
        let previous = self
            .open
            .filter(|&position| self.dropdowns[position].is_shown(shown_class));
        self.close();

        let Some(position) = self.lookup(id.into()) else {
            return;
        };

        if previous == Some(position) {
            return;
        }

        let shown = self.dropdowns[position].toggle(&self.config.shown_class);
        self.open = shown.then_some(position);
    }

    /// Hide the open dropdown, if there is one.
    pub fn close(&mut self) {
        if let Some(position) = self.open.take() {
            self.dropdowns[position].hide(&self.config.shown_class);
        }
    }

    /// Switch the nav between its compact and expanded layouts.
    pub fn toggle_responsive_nav(&mut self) -> Option<NavMode> {
        self.nav.as_ref().map(ResponsiveNav::toggle)
    }

    /// React to a click anywhere in the document.
    ///
    /// Clicks on a trigger are left to the trigger's own action. Any other
    /// click hides every shown dropdown, however it was opened.
    pub fn handle_click(&mut self, target: Option<&D::Element>) {
        let on_trigger = target
            .and_then(|target| target.closest(&self.config.trigger_class))
            .is_some();

        if on_trigger {
            return;
        }

        let shown_class = &self.config.shown_class;

        for dropdown in &self.dropdowns {
            if dropdown.is_shown(shown_class) {
                dropdown.hide(shown_class);
            }
        }

        self.open = None;
    }

    /// The dropdown named `id`, registering it if the page has an element with
    /// that id that wasn't found by [`Self::bind`].
    fn lookup(&mut self, id: DropdownId) -> Option<usize> {
        if let Some(&position) = self.index.get(&id) {
            return Some(position);
        }

        let content = self
            .document
            .element_by_id(&format!("{}{id}", self.config.dropdown_id_prefix))?;
        let position = match self
            .dropdowns
            .iter()
            .position(|dropdown| dropdown.content().is_same_node(&content))
        {
            Some(position) => position,
            None => {
                let container = content.closest(&self.config.container_class);
                self.dropdowns.push(Dropdown::new(content, container));
                self.dropdowns.len() - 1
            }
        };

        self.index.insert(id, position);
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::MenuController;
    use crate::{
        config::MenuConfig,
        dom::{Document, Element},
        dropdown::Dropdown,
        memory::{MemoryDocument, MemoryElement},
        nav::NavMode,
    };

    struct Page {
        doc: MemoryDocument,
        buttons: Vec<MemoryElement>,
        contents: Vec<MemoryElement>,
        containers: Vec<MemoryElement>,
        body: MemoryElement,
    }

    impl Page {
        fn new(dropdowns: u32) -> Self {
            let doc = MemoryDocument::new();
            let body = doc.create_element(None, None, "");
            let nav = doc.create_element(Some(&body), Some("myTopnav"), "topnav");
            let mut page = Self {
                doc: doc.clone(),
                buttons: Vec::new(),
                contents: Vec::new(),
                containers: Vec::new(),
                body,
            };

            for index in 1..=dropdowns {
                let container = doc.create_element(Some(&nav), None, "dropdown");
                let button = doc.create_element(Some(&container), None, "dropbtn");
                let content = doc.create_element(
                    Some(&container),
                    Some(format!("myDropdown{index}").as_str()),
                    "dropdown-content",
                );
                page.buttons.push(button);
                page.contents.push(content);
                page.containers.push(container);
            }

            page
        }

        fn controller(&self) -> MenuController<MemoryDocument> {
            MenuController::bind(self.doc.clone(), MenuConfig::default())
        }

        fn shown(&self) -> Vec<bool> {
            self.contents
                .iter()
                .map(|content| content.has_class("show"))
                .collect()
        }

        fn nav(&self) -> MemoryElement {
            self.doc.element_by_id("myTopnav").unwrap()
        }
    }

    #[test]
    fn bind_registers_dropdowns_and_nav() {
        let page = Page::new(3);
        let controller = page.controller();

        assert_eq!(controller.dropdown_count(), 3);
        assert!(controller
            .dropdown(2)
            .unwrap()
            .content()
            .is_same_node(&page.contents[1]));
        assert!(controller
            .dropdown(2)
            .unwrap()
            .container()
            .unwrap()
            .is_same_node(&page.containers[1]));
        assert_eq!(controller.nav_mode(), Some(NavMode::Compact));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let page = Page::new(2);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [true, false]);
        assert!(page.containers[0].has_class("show"));

        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [false, false]);
        assert!(!page.containers[0].has_class("show"));
        assert!(controller.open_dropdown().is_none());
    }

    #[test]
    fn toggle_twice_restores_externally_shown() {
        let page = Page::new(1);
        let mut controller = page.controller();
        page.contents[0].add_class("show");

        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [false]);

        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [true]);
    }

    #[test]
    fn opening_another_closes_previous() {
        let page = Page::new(3);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        controller.open_or_close_dropdown("2");
        assert_eq!(page.shown(), [false, true, false]);
        assert!(!page.containers[0].has_class("show"));
        assert!(page.containers[1].has_class("show"));
        assert!(controller
            .open_dropdown()
            .unwrap()
            .content()
            .is_same_node(&page.contents[1]));
    }

    #[test]
    fn outside_click_hides_all() {
        let page = Page::new(3);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        page.contents[2].add_class("show");
        page.containers[2].add_class("show");

        controller.handle_click(Some(&page.body));

        assert_eq!(page.shown(), [false, false, false]);
        assert!(page
            .containers
            .iter()
            .all(|container| !container.has_class("show")));
        assert!(controller.open_dropdown().is_none());
    }

    #[test]
    fn click_without_target_hides_all() {
        let page = Page::new(1);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        controller.handle_click(None);

        assert_eq!(page.shown(), [false]);
    }

    #[test]
    fn trigger_click_is_ignored() {
        let page = Page::new(2);
        let mut controller = page.controller();
        let icon = page
            .doc
            .create_element(Some(&page.buttons[0]), None, "caret");

        controller.open_or_close_dropdown(1);
        controller.handle_click(Some(&page.buttons[0]));
        controller.handle_click(Some(&icon));

        assert_eq!(page.shown(), [true, false]);
        assert!(controller.open_dropdown().is_some());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let page = Page::new(2);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        controller.open_or_close_dropdown(99);

        assert_eq!(page.shown(), [false, false]);
        assert!(controller.open_dropdown().is_none());

        // Nothing is tracked, so the next open closes nothing else.
        page.contents[1].add_class("show");
        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [true, true]);
    }

    #[test]
    fn unnamed_dropdowns_close_on_outside_click() {
        let page = Page::new(1);
        let stray = page.doc.create_element(
            Some(&page.body),
            Some("otherMenu"),
            "dropdown-content show",
        );
        let mut controller = page.controller();

        assert_eq!(controller.dropdown_count(), 2);
        assert!(controller.dropdown("otherMenu").is_none());

        controller.handle_click(Some(&page.body));
        assert!(!stray.has_class("show"));
    }

    #[test]
    fn reopen_after_external_hide() {
        let page = Page::new(1);
        let mut controller = page.controller();

        controller.open_or_close_dropdown(1);
        page.contents[0].remove_class("show");

        controller.open_or_close_dropdown(1);
        assert_eq!(page.shown(), [true]);
        assert!(page.containers[0].has_class("show"));
        assert!(controller.open_dropdown().is_some());
    }

    #[test]
    fn id_lookup_without_content_class() {
        let page = Page::new(0);
        let container = page.doc.create_element(Some(&page.body), None, "dropdown");
        let list = page
            .doc
            .create_element(Some(&container), Some("myDropdown1"), "menu-list");
        let mut controller = page.controller();

        assert_eq!(controller.dropdown_count(), 0);

        controller.open_or_close_dropdown(1);
        assert!(list.has_class("show"));
        assert!(container.has_class("show"));
        assert_eq!(controller.dropdown_count(), 1);

        controller.handle_click(Some(&page.body));
        assert!(!list.has_class("show"));
        assert!(!container.has_class("show"));
    }

    #[test]
    fn dropdown_added_after_bind() {
        let page = Page::new(1);
        let mut controller = page.controller();
        let container = page.doc.create_element(Some(&page.body), None, "dropdown");
        let content =
            page.doc
                .create_element(Some(&container), Some("myDropdown2"), "dropdown-content");

        controller.open_or_close_dropdown(1);
        controller.open_or_close_dropdown(2);

        assert_eq!(page.shown(), [false]);
        assert!(content.has_class("show"));
        assert!(container.has_class("show"));
        assert!(controller
            .dropdown(2)
            .unwrap()
            .content()
            .is_same_node(&content));

        controller.open_or_close_dropdown(2);
        assert!(!content.has_class("show"));
        assert_eq!(controller.dropdown_count(), 2);
    }

    #[test]
    fn nav_class_reset_elsewhere() {
        let page = Page::new(0);
        let mut controller = page.controller();

        controller.toggle_responsive_nav();
        page.nav().set_class_name("topnav");
        assert_eq!(controller.nav_mode(), Some(NavMode::Compact));

        assert_eq!(controller.toggle_responsive_nav(), Some(NavMode::Expanded));
        assert_eq!(page.nav().class_name(), "topnav responsive");
    }

    #[test]
    fn explicit_registration() {
        let doc = MemoryDocument::new();
        let content = doc.create_element(None, None, "menu");
        let mut controller = MenuController::new(doc.clone(), MenuConfig::default());
        controller.add_dropdown(Some("tools".into()), Dropdown::new(content.clone(), None));

        controller.open_or_close_dropdown("tools");
        assert!(content.has_class("show"));

        controller.close();
        assert!(!content.has_class("show"));
    }

    #[test]
    fn nav_round_trip() {
        let page = Page::new(0);
        let mut controller = page.controller();

        assert_eq!(controller.toggle_responsive_nav(), Some(NavMode::Expanded));
        assert_eq!(page.nav().class_name(), "topnav responsive");

        assert_eq!(controller.toggle_responsive_nav(), Some(NavMode::Compact));
        assert_eq!(page.nav().class_name(), "topnav");
    }

    #[test]
    fn missing_nav_is_a_no_op() {
        let doc = MemoryDocument::new();
        let mut controller = MenuController::bind(doc, MenuConfig::default());

        assert_eq!(controller.toggle_responsive_nav(), None);
        assert_eq!(controller.nav_mode(), None);
    }
}
