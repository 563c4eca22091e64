//! Order State Store
//!
//! Owned view-model of the menu. Uses Leptos reactive_stores for
//! fine-grained reactivity; the summary is derived from it, never stored.

use leptos::prelude::*;
use reactive_stores::Store;
use thiserror::Error;

use crate::models::MenuItem;
use crate::notice::StubAction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("menu item not found: {0}")]
    ItemNotFound(String),
}

/// Something the user did to the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    /// A menu checkbox changed
    SetSelected { id: String, selected: bool },
    /// One of the placeholder buttons was pressed
    Stub(StubAction),
}

/// What the view has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    None,
    /// Selection changed; derived views must be recomputed
    Rerender,
    /// Show a blocking notice; state is untouched
    Notice(StubAction),
}

/// Menu items in page order with their selection flags
#[derive(Clone, Debug, Default, Store)]
pub struct OrderState {
    pub items: Vec<MenuItem>,
}

impl OrderState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

fn changed_outcome(changed: bool) -> Outcome {
    if changed {
        Outcome::Rerender
    } else {
        Outcome::None
    }
}

fn find<'a>(items: &'a [MenuItem], id: &str) -> Result<&'a MenuItem, OrderError> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| OrderError::ItemNotFound(id.to_string()))
}

fn set_selected_in(items: &mut [MenuItem], id: &str, selected: bool) -> Result<bool, OrderError> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| OrderError::ItemNotFound(id.to_string()))?;
    let changed = item.selected != selected;
    item.selected = selected;
    Ok(changed)
}

/// Type alias for the store
pub type OrderStore = Store<OrderState>;

/// Get the order store from context
pub fn use_order_store() -> OrderStore {
    expect_context::<OrderStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Set an item's selection in the store; subscribers are only notified on change
pub fn store_set_selected(store: &OrderStore, id: &str, selected: bool) -> Result<bool, OrderError> {
    let current = find(&store.items().read_untracked(), id)?.selected;
    if current == selected {
        return Ok(false);
    }
    set_selected_in(&mut store.items().write(), id, selected)
}

/// Apply a user event to the store
pub fn store_dispatch(store: &OrderStore, event: OrderEvent) -> Result<Outcome, OrderError> {
    match event {
        OrderEvent::SetSelected { id, selected } => {
            Ok(changed_outcome(store_set_selected(store, &id, selected)?))
        }
        OrderEvent::Stub(action) => Ok(Outcome::Notice(action)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn store() -> OrderStore {
        Store::new(OrderState::new(vec![
            MenuItem::new("coffee", "Coffee", Price::from_cents(350)),
            MenuItem::new("bagel", "Bagel", Price::from_cents(225)).with_selected(true),
            MenuItem::new("juice", "Juice", Price::from_cents(400)).with_selected(true),
        ]))
    }

    fn select(id: &str, selected: bool) -> OrderEvent {
        OrderEvent::SetSelected { id: id.to_string(), selected }
    }

    fn selection(store: &OrderStore) -> Vec<String> {
        store
            .items()
            .read_untracked()
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id.clone())
            .collect()
    }

    #[test]
    fn test_dispatch_set_selected() {
        let store = store();
        assert_eq!(store_dispatch(&store, select("bagel", false)), Ok(Outcome::Rerender));
        assert_eq!(selection(&store), vec!["juice"]);

        // Same value again is a no-op
        assert_eq!(store_dispatch(&store, select("bagel", false)), Ok(Outcome::None));
        assert_eq!(selection(&store), vec!["juice"]);
    }

    #[test]
    fn test_store_set_selected_reports_change() {
        let store = store();
        assert_eq!(store_set_selected(&store, "coffee", true), Ok(true));
        assert_eq!(store_set_selected(&store, "coffee", true), Ok(false));
        assert_eq!(store_set_selected(&store, "coffee", false), Ok(true));
        assert_eq!(selection(&store), vec!["bagel", "juice"]);
    }

    #[test]
    fn test_dispatch_unknown_item() {
        let store = store();
        let before = store.items().get_untracked();
        assert_eq!(
            store_dispatch(&store, select("pizza", true)),
            Err(OrderError::ItemNotFound("pizza".to_string()))
        );
        assert_eq!(store.items().get_untracked(), before);
    }

    #[test]
    fn test_stub_actions_leave_store_alone() {
        let store = store();
        let before = store.items().get_untracked();
        for action in StubAction::ALL {
            assert_eq!(store_dispatch(&store, OrderEvent::Stub(action)), Ok(Outcome::Notice(action)));
        }
        assert_eq!(store.items().get_untracked(), before);
        assert_eq!(selection(&store), vec!["bagel", "juice"]);
    }

    #[test]
    fn test_selection_in_page_order() {
        let store = store();
        store_dispatch(&store, select("juice", false)).unwrap();
        store_dispatch(&store, select("coffee", true)).unwrap();
        store_dispatch(&store, select("juice", true)).unwrap();
        assert_eq!(selection(&store), vec!["coffee", "bagel", "juice"]);
    }
}
