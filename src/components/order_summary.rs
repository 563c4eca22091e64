//! Order Summary Component
//!
//! Selected item lines and the grand total.

use leptos::prelude::*;

use crate::models::{OrderSummary, SummaryLine};

#[component]
pub fn SummaryPanel(summary: Memo<OrderSummary>) -> impl IntoView {
    view! {
        <section class="order-summary">
            <h2>"Selected Items"</h2>
            <div class="summary-header">
                <span>"Item"</span>
                <span>"Price"</span>
                <span>"Qty"</span>
                <span>"Total"</span>
            </div>
            <div id="selected-items">
                {move || summary.with(|s| {
                    s.lines.iter().cloned().map(|line| view! { <SummaryRow line=line /> }).collect_view()
                })}
            </div>
            <Show when=move || summary.with(|s| s.is_empty())>
                <p class="summary-empty">"No items selected"</p>
            </Show>
            <div class="grand-total-row">
                <span>"Grand Total"</span>
                <span id="grand-total">{move || summary.with(|s| s.total.to_string())}</span>
            </div>
        </section>
    }
}

/// One `.summary-item`: name, unit price, quantity, line total
#[component]
fn SummaryRow(line: SummaryLine) -> impl IntoView {
    view! {
        <div class="summary-item">
            <span>{line.name}</span>
            <span>{line.unit_price.to_string()}</span>
            <span>{line.quantity}</span>
            <span>{line.line_total.to_string()}</span>
        </div>
    }
}
