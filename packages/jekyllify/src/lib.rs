//! Moves legacy static pages onto the site's shared Jekyll layout.
//!
//! Each legacy page carried its own copy of the nav bar, footer and an inline
//! `myFunction` nav script. Converted pages keep only their main column and
//! get front matter naming the shared layout, which loads the nav behaviour
//! once for every page.

pub mod page;
pub mod site;

pub use page::{convert, Lang};
pub use site::{convert_file, convert_site, page_paths, Error, Options};
