//! Order Summary Derivation
//!
//! Builds the summary lines and the grand total from the menu in one pass.

use crate::models::{MenuItem, OrderSummary, SummaryLine};
use crate::price::Price;

/// Quantity of every summary line
const LINE_QUANTITY: u32 = 1;

/// Derive the order summary from the current menu state.
///
/// Lines follow menu order, not the order items were selected in, and the
/// total is accumulated from the same lines that are displayed.
pub fn summarize(items: &[MenuItem]) -> OrderSummary {
    let mut lines = Vec::new();
    let mut total = Price::ZERO;

    for item in items.iter().filter(|item| item.selected) {
        let line_total = item.price.times(LINE_QUANTITY);
        total = total + line_total;
        lines.push(SummaryLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: LINE_QUANTITY,
            line_total,
        });
    }

    OrderSummary { lines, total }
}
