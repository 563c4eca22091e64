//! Page Integration
//!
//! Finds the host element, reads the menu from the page (or falls back to
//! configured defaults) and mounts the app.
//!
//! Menu sources, first match wins:
//! 1. `.menu-item` markup already inside the host
//! 2. a `window.ORDER_MENU` object shaped like `assets/menu.json`
//! 3. the built-in default menu

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::app::App;
use crate::menu::{
    self, entries_from_markup, MarkupCheckbox, MarkupItem, MenuConfig, MenuEntry, MenuError, MenuSource,
    DEFAULT_MENU_JSON,
};
use crate::models::MenuItem;

/// Element the app mounts into; `<body>` when absent
pub const HOST_ID: &str = "order-app";
/// Global JS object holding a menu config
pub const MENU_GLOBAL: &str = "ORDER_MENU";

/// Load the menu and mount the app
pub fn start() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let host = find_host(&document)?;

    let (source, items) = load_menu(&window, &host)?;
    if source.clears_host() {
        host.set_inner_html("");
    }

    log::info!("[DOM] Mounting order summary with {} menu items", items.len());
    leptos::mount::mount_to(host, move || view! { <App items=items /> }).forget();
    Ok(())
}

fn find_host(document: &Document) -> Result<HtmlElement, String> {
    if let Some(el) = document.get_element_by_id(HOST_ID) {
        return el
            .dyn_into::<HtmlElement>()
            .map_err(|_| format!("#{} is not an HTML element", HOST_ID));
    }
    log::debug!("[DOM] No #{}, mounting to body", HOST_ID);
    document.body().ok_or_else(|| "document has no body".to_string())
}

fn load_menu(window: &web_sys::Window, host: &HtmlElement) -> Result<(MenuSource, Vec<MenuItem>), String> {
    let markup = scan_markup(host).map_err(|e| e.to_string())?;
    if !markup.is_empty() {
        return Ok((MenuSource::Markup, menu::load_entries(MenuSource::Markup, markup)));
    }

    let global = js_sys::Reflect::get(window, &JsValue::from_str(MENU_GLOBAL))
        .map_err(|e| format!("reading window.{}: {:?}", MENU_GLOBAL, e))?;
    if !global.is_undefined() && !global.is_null() {
        match read_menu_global(global) {
            Ok(entries) => return Ok((MenuSource::Global, menu::load_entries(MenuSource::Global, entries))),
            Err(e) => log::error!("[DOM] Ignoring window.{}: {}", MENU_GLOBAL, e),
        }
    }

    let entries = menu::parse_menu_json(DEFAULT_MENU_JSON).map_err(|e| e.to_string())?;
    Ok((MenuSource::Default, menu::load_entries(MenuSource::Default, entries)))
}

fn read_menu_global(value: JsValue) -> Result<Vec<MenuEntry>, MenuError> {
    let config: MenuConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| MenuError::Config(e.to_string()))?;
    Ok(config.items)
}

/// Read every `.menu-item` under `root`, in document order
fn scan_markup(root: &Element) -> Result<Vec<MenuEntry>, MenuError> {
    let nodes = root
        .query_selector_all(".menu-item")
        .map_err(|e| MenuError::MalformedMarkup(format!("{:?}", e)))?;

    let items = (0..nodes.length())
        .filter_map(|i| nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .map(|el| read_menu_item(&el));
    entries_from_markup(items)
}

fn read_menu_item(el: &Element) -> MarkupItem {
    let checkbox = el
        .query_selector("input[type=\"checkbox\"]")
        .ok()
        .flatten()
        .and_then(|n| n.dyn_into::<HtmlInputElement>().ok());

    // Name is the text node right after the checkbox's label
    let name = checkbox
        .as_ref()
        .and_then(|c| c.next_element_sibling())
        .and_then(|label| label.next_sibling())
        .and_then(|text| text.text_content());

    let price = el
        .query_selector(".item-price")
        .ok()
        .flatten()
        .and_then(|p| p.text_content());

    MarkupItem {
        checkbox: checkbox.map(|c| MarkupCheckbox { id: c.id(), checked: c.checked() }),
        name,
        price,
    }
}
