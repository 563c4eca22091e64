//! Order Summary App
//!
//! Menu on the left, order summary and actions on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionBar, MenuList, SummaryPanel};
use crate::context::OrderContext;
use crate::models::MenuItem;
use crate::store::{OrderState, OrderStateStoreFields};
use crate::summary::summarize;

#[component]
pub fn App(items: Vec<MenuItem>) -> impl IntoView {
    let store = Store::new(OrderState::new(items));
    let filter = signal(String::new());

    provide_context(store);
    provide_context(OrderContext::new(store, filter));

    // Lines and total come from one pass, so they always agree
    let summary = Memo::new(move |_| store.items().with(|items| summarize(items)));

    Effect::new(move |_| {
        summary.with(|s| log::debug!("[APP] {} selected, total {}", s.item_count(), s.total));
    });

    view! {
        <div class="order-layout">
            <MenuList />
            <aside class="order-panel">
                <SummaryPanel summary=summary />
                <ActionBar />
            </aside>
        </div>
    }
}
