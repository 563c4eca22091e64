//! Action Bar Component
//!
//! Add / pay / balance buttons. None of them change the order.

use leptos::prelude::*;

use crate::context::use_order_context;
use crate::notice::StubAction;
use crate::store::OrderEvent;

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_order_context();

    view! {
        <div class="action-bar">
            {StubAction::ALL.iter().map(|&action| {
                view! {
                    <button
                        type="button"
                        class=action.button_class()
                        on:click=move |_| ctx.dispatch(OrderEvent::Stub(action))
                    >
                        {action.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
