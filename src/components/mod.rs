//! UI Components
//!
//! Leptos components projecting the order store.

mod menu_list;
mod order_summary;
mod action_bar;

pub use menu_list::MenuList;
pub use order_summary::SummaryPanel;
pub use action_bar::ActionBar;
