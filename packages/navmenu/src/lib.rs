//! Dropdown and responsive navigation behaviour for a site's top menu.
//!
//! The [`MenuController`] owns all menu state. It talks to the page through the
//! [`dom::Document`] and [`dom::Element`] traits, so the same logic runs against
//! the browser (see `navmenu-web`) or the headless [`memory`] tree.

pub mod config;
pub mod controller;
pub mod dom;
pub mod dropdown;
pub mod memory;
pub mod nav;

pub use config::{Error, MenuConfig};
pub use controller::MenuController;
pub use dropdown::{Dropdown, DropdownId};
pub use nav::{NavMode, ResponsiveNav};
