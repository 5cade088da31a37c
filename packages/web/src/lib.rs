//! Runs the menu in the browser.
//!
//! On start the module binds the page's menu, listens for clicks on the window
//! and publishes the menu actions as globals so inline `onclick` handlers can
//! call them.

use std::cell::RefCell;

use gloo_console::log;
use navmenu::{DropdownId, MenuConfig, MenuController};
use thiserror::Error;
use wasm_bindgen::{
    closure::{Closure, WasmClosure},
    prelude::wasm_bindgen,
    JsCast, JsValue,
};

use crate::dom::{WebDocument, WebElement};

pub mod dom;

/// The id of an optional `<script type="application/json">` element holding a
/// [`MenuConfig`].
pub const CONFIG_ELEMENT_ID: &str = "navmenu-config";

thread_local! {
    static MENU: RefCell<Option<MenuController<WebDocument>>> = const { RefCell::new(None) };
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("no global `window`")]
    NoWindow,
    #[error("`window` has no document")]
    NoDocument,
    #[error("the menu is already installed")]
    AlreadyInstalled,
    #[error("invalid menu config: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("invalid menu config: {0}")]
    Config(#[from] navmenu::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    page_config(&document)
        .and_then(|config| install(&window, &document, config))
        .map_err(|e| {
            gloo_console::error!(format!("navmenu: {e}"));
            e.into()
        })
}

/// Read the config embedded in the page, or the default if there isn't one.
pub fn page_config(document: &web_sys::Document) -> Result<MenuConfig, Error> {
    let config = match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|elem| elem.text_content())
    {
        Some(json) => serde_json::from_str(&json)?,
        None => MenuConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Bind the menu in `document` and wire it up to `window`.
pub fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: MenuConfig,
) -> Result<(), Error> {
    if MENU.with(|menu| menu.borrow().is_some()) {
        return Err(Error::AlreadyInstalled);
    }

    let controller = MenuController::bind(WebDocument::new(document.clone()), config);
    log!(format!(
        "navmenu: bound {} dropdowns",
        controller.dropdown_count()
    ));
    MENU.with(|menu| *menu.borrow_mut() = Some(controller));

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(WebElement::new);

        with_menu(|menu| menu.handle_click(target.as_ref()));
    });
    window
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_error)?;

    let open_or_close = Closure::<dyn FnMut(JsValue)>::new(open_or_close_dropdown);
    let toggle_nav = Closure::<dyn FnMut()>::new(toggle_responsive_nav);

    // `myFunction1` and `myFunction` are the names older page markup calls.
    publish(window, "openOrCloseDropdown", &open_or_close)?;
    publish(window, "myFunction1", &open_or_close)?;
    publish(window, "toggleResponsiveNav", &toggle_nav)?;
    publish(window, "myFunction", &toggle_nav)?;

    // These live as long as the page.
    on_click.forget();
    open_or_close.forget();
    toggle_nav.forget();

    Ok(())
}

fn publish<T: ?Sized + WasmClosure>(
    window: &web_sys::Window,
    name: &str,
    action: &Closure<T>,
) -> Result<(), Error> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), action.as_ref())
        .map_err(js_error)?;
    Ok(())
}

/// Close the open dropdown, then toggle the dropdown `id`, which may be a
/// number or a string.
#[wasm_bindgen(js_name = openOrCloseDropdown)]
pub fn open_or_close_dropdown(id: JsValue) {
    with_menu(|menu| match dropdown_id(&id) {
        Some(id) => menu.open_or_close_dropdown(id),
        // No dropdown can have this id.
        None => menu.close(),
    })
}

#[wasm_bindgen(js_name = toggleResponsiveNav)]
pub fn toggle_responsive_nav() {
    with_menu(|menu| {
        menu.toggle_responsive_nav();
    })
}

fn with_menu(f: impl FnOnce(&mut MenuController<WebDocument>)) {
    MENU.with(|menu| {
        if let Some(menu) = menu.borrow_mut().as_mut() {
            f(menu)
        }
    })
}

/// The dropdown id named by a javascript value.
///
/// Numbers are converted the way javascript converts them to strings, so `1e21`
/// names `"1e+21"`. Other values that aren't strings name nothing.
pub fn dropdown_id(value: &JsValue) -> Option<DropdownId> {
    value
        .as_string()
        .or_else(|| {
            let number = js_sys::Number::from(value.as_f64()?);
            number.to_string(10).ok().map(String::from)
        })
        .map(DropdownId::from)
}
