//! Menu Ingestion
//!
//! Turns raw menu entries (from page markup, a JS config object or the
//! built-in JSON) into validated `MenuItem`s. Prices are parsed here, once.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{MenuItem, CHECKBOX_ID_PREFIX};
use crate::price::{Price, PriceError};

/// Menu shipped with the app, used when the page supplies none
pub const DEFAULT_MENU_JSON: &str = include_str!("../assets/menu.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("malformed menu markup: {0}")]
    MalformedMarkup(String),
    #[error("menu item {id:?} has an invalid price: {source}")]
    InvalidPrice {
        id: String,
        #[source]
        source: PriceError,
    },
    #[error("menu item id is empty")]
    EmptyId,
    #[error("duplicate menu item id: {0}")]
    DuplicateId(String),
    #[error("invalid menu config: {0}")]
    Config(String),
}

/// Unvalidated menu entry; `price` is still the displayed text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub selected: bool,
}

/// Menu document: `{ "items": [...] }`
#[derive(Debug, Deserialize)]
pub struct MenuConfig {
    pub items: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn into_item(self) -> Result<MenuItem, MenuError> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(MenuError::EmptyId);
        }
        let price = Price::parse(&self.price).map_err(|source| MenuError::InvalidPrice {
            id: id.clone(),
            source,
        })?;
        Ok(MenuItem::new(id, self.name.trim(), price).with_selected(self.selected))
    }
}

/// Strip the `item-` prefix from a checkbox id
pub fn item_id_from_checkbox_id(checkbox_id: &str) -> Result<String, MenuError> {
    match checkbox_id.strip_prefix(CHECKBOX_ID_PREFIX) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(MenuError::MalformedMarkup(format!(
            "checkbox id {:?} does not start with {:?}",
            checkbox_id, CHECKBOX_ID_PREFIX
        ))),
    }
}

/// Where the menu was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSource {
    /// `.menu-item` elements already inside the host
    Markup,
    /// `window.ORDER_MENU`
    Global,
    /// `DEFAULT_MENU_JSON`
    Default,
}

impl MenuSource {
    pub fn label(&self) -> &'static str {
        match self {
            MenuSource::Markup => "page markup",
            MenuSource::Global => "window.ORDER_MENU",
            MenuSource::Default => "default menu",
        }
    }

    /// Only ingested markup is replaced by the app; anything else in the host stays
    pub fn clears_host(&self) -> bool {
        matches!(self, MenuSource::Markup)
    }
}

/// Checkbox of a `.menu-item`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupCheckbox {
    pub id: String,
    pub checked: bool,
}

/// Raw fields read from one `.menu-item` element; `None` where a part was missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupItem {
    pub checkbox: Option<MarkupCheckbox>,
    /// Text node after the checkbox's label
    pub name: Option<String>,
    /// `.item-price` text
    pub price: Option<String>,
}

impl MarkupItem {
    /// Structural problems are errors; the price text is left for `into_item` to judge
    pub fn into_entry(self) -> Result<MenuEntry, MenuError> {
        let missing = |what: &str| MenuError::MalformedMarkup(format!("menu item without {}", what));

        let checkbox = self.checkbox.ok_or_else(|| missing("a checkbox"))?;
        let name = self.name.ok_or_else(|| missing("a name"))?;
        let price = self.price.ok_or_else(|| missing("an .item-price"))?;

        Ok(MenuEntry {
            id: item_id_from_checkbox_id(&checkbox.id)?,
            name: name.trim().to_string(),
            price,
            selected: checkbox.checked,
        })
    }
}

/// Convert scanned markup in document order; the first malformed item fails the whole scan
pub fn entries_from_markup(items: impl IntoIterator<Item = MarkupItem>) -> Result<Vec<MenuEntry>, MenuError> {
    items.into_iter().map(MarkupItem::into_entry).collect()
}

/// Parse a `{ "items": [...] }` menu document
pub fn parse_menu_json(text: &str) -> Result<Vec<MenuEntry>, MenuError> {
    let config: MenuConfig = serde_json::from_str(text).map_err(|e| MenuError::Config(e.to_string()))?;
    Ok(config.items)
}

/// Result of validating a batch of entries
#[derive(Debug, Default)]
pub struct MenuLoad {
    /// Accepted items, in source order
    pub items: Vec<MenuItem>,
    pub rejected: Vec<MenuError>,
}

/// Validate entries, keeping source order. Later duplicates of an id are rejected.
pub fn build_menu(entries: impl IntoIterator<Item = MenuEntry>) -> MenuLoad {
    let mut load = MenuLoad::default();
    let mut seen = HashSet::new();

    for entry in entries {
        match entry.into_item() {
            Ok(item) if !seen.insert(item.id.clone()) => {
                load.rejected.push(MenuError::DuplicateId(item.id));
            }
            Ok(item) => load.items.push(item),
            Err(e) => load.rejected.push(e),
        }
    }

    load
}

/// Validate entries and log every rejection
pub fn load_entries(source: MenuSource, entries: Vec<MenuEntry>) -> Vec<MenuItem> {
    let load = build_menu(entries);
    for err in &load.rejected {
        log::warn!("[MENU] Skipping entry from {}: {}", source.label(), err);
    }
    log::info!("[MENU] Loaded {} items from {}", load.items.len(), source.label());
    load.items
}
