//! Frontend Models
//!
//! Menu items held by the view-model and the summary records derived from them.

use crate::price::Price;

/// Checkbox id prefix for menu items (`item-<id>`)
pub const CHECKBOX_ID_PREFIX: &str = "item-";

/// A selectable, priced menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub selected: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Case-insensitive name search; a blank query matches everything
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// DOM id of this item's checkbox
    pub fn checkbox_id(&self) -> String {
        format!("{}{}", CHECKBOX_ID_PREFIX, self.id)
    }
}

/// One row of the order summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub item_id: String,
    pub name: String,
    pub unit_price: Price,
    /// Always 1 for now; there is no quantity control
    pub quantity: u32,
    pub line_total: Price,
}

/// Summary lines in menu order plus the grand total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_search() {
        let item = MenuItem::new("muffin", "Blueberry Muffin", Price::from_cents(275));
        assert!(item.matches(""));
        assert!(item.matches("   "));
        assert!(item.matches("muff"));
        assert!(item.matches(" BLUE "));
        assert!(!item.matches("bagel"));
    }
}
