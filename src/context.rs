//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::notice::show_notice;
use crate::store::{store_dispatch, OrderEvent, OrderStore, Outcome};

/// Order-wide handles provided via context
#[derive(Clone, Copy)]
pub struct OrderContext {
    /// Menu view-model
    pub store: OrderStore,
    /// Menu name filter - read
    pub filter: ReadSignal<String>,
    /// Menu name filter - write
    set_filter: WriteSignal<String>,
}

impl OrderContext {
    pub fn new(store: OrderStore, filter: (ReadSignal<String>, WriteSignal<String>)) -> Self {
        Self {
            store,
            filter: filter.0,
            set_filter: filter.1,
        }
    }

    /// Apply a user event to the store and run whatever it asks for
    pub fn dispatch(&self, event: OrderEvent) {
        log::debug!("[ORDER] {:?}", event);
        match store_dispatch(&self.store, event) {
            Ok(Outcome::Notice(action)) => show_notice(action),
            Ok(Outcome::Rerender) | Ok(Outcome::None) => {}
            Err(e) => log::error!("[ORDER] {}", e),
        }
    }

    /// A menu checkbox changed
    pub fn set_selected(&self, id: String, selected: bool) {
        self.dispatch(OrderEvent::SetSelected { id, selected });
    }

    pub fn set_filter(&self, query: String) {
        self.set_filter.set(query);
    }
}

/// Get the order context
pub fn use_order_context() -> OrderContext {
    expect_context::<OrderContext>()
}
