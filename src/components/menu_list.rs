//! Menu List Component
//!
//! Checkbox rows for every menu item, plus the name filter.

use leptos::prelude::*;

use crate::context::use_order_context;
use crate::models::MenuItem;
use crate::store::{use_order_store, OrderStateStoreFields};

/// All menu items in page order
#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_order_store();

    view! {
        <section class="menu">
            <h2>"Menu"</h2>
            <MenuFilter />
            <div class="menu-items">
                <For
                    each=move || store.items().get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <MenuItemRow item=item /> }
                />
            </div>
        </section>
    }
}

/// A single `.menu-item` row
#[component]
pub fn MenuItemRow(item: MenuItem) -> impl IntoView {
    let ctx = use_order_context();

    let checkbox_id = item.checkbox_id();
    let id = item.id.clone();
    let name = item.name.clone();
    let price = item.price.to_string();
    // Rows are keyed by id only, so the checked state is read from the store
    let selected = {
        let id = item.id.clone();
        move || ctx.store.items().with(|items| items.iter().any(|i| i.id == id && i.selected))
    };
    let visible = move || ctx.filter.with(|q| item.matches(q));

    view! {
        <div class="menu-item" class:hidden=move || !visible()>
            <input
                type="checkbox"
                id=checkbox_id.clone()
                prop:checked=selected
                on:change=move |ev| ctx.set_selected(id.clone(), event_target_checked(&ev))
            />
            <label for=checkbox_id></label>
            {name}
            <span class="item-price">{price}</span>
        </div>
    }
}

/// Name search box; hides rows without touching the selection
#[component]
pub fn MenuFilter() -> impl IntoView {
    let ctx = use_order_context();

    view! {
        <input
            type="search"
            class="menu-filter"
            placeholder="Search menu..."
            prop:value=move || ctx.filter.get()
            on:input=move |ev| ctx.set_filter(event_target_value(&ev))
        />
    }
}
