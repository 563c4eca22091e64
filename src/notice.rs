//! Placeholder Actions
//!
//! "Add", "Pay" and "Balance" are not implemented yet; they only show a notice.

/// Action buttons that only show a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubAction {
    AddItem,
    Pay,
    CheckBalance,
}

impl StubAction {
    pub const ALL: [StubAction; 3] = [StubAction::AddItem, StubAction::Pay, StubAction::CheckBalance];

    pub fn message(&self) -> &'static str {
        match self {
            StubAction::AddItem => "Add new item functionality would go here",
            StubAction::Pay => "Payment processing would go here",
            StubAction::CheckBalance => "Balance calculation would go here",
        }
    }

    /// CSS class of the button that triggers this action
    pub fn button_class(&self) -> &'static str {
        match self {
            StubAction::AddItem => "add-button",
            StubAction::Pay => "pay-button",
            StubAction::CheckBalance => "balance-button",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StubAction::AddItem => "+ Add Item",
            StubAction::Pay => "Pay",
            StubAction::CheckBalance => "Check Balance",
        }
    }
}

/// Show the blocking notice for an action
pub fn show_notice(action: StubAction) {
    log::debug!("[NOTICE] {:?}", action);
    let Some(window) = web_sys::window() else {
        log::error!("[NOTICE] No window to show {:?} notice", action);
        return;
    };
    if let Err(e) = window.alert_with_message(action.message()) {
        log::error!("[NOTICE] alert failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_are_distinct() {
        let classes: std::collections::HashSet<_> = StubAction::ALL.iter().map(|a| a.button_class()).collect();
        assert_eq!(classes.len(), 3);
        assert_eq!(StubAction::Pay.message(), "Payment processing would go here");
    }
}
