// Tabs Controller
// Single string selection naming the active tab key

use std::fmt;

use super::selection::{ChangeListener, SelectionController};

/// Controller for one tab group's active key
pub struct TabsController {
    selection: SelectionController<String>,
}

impl TabsController {
    /// Uncontrolled: the controller owns the active key
    pub fn owned(initial: impl Into<String>, on_change: Option<ChangeListener<String>>) -> Self {
        Self {
            selection: SelectionController::owned(initial.into(), on_change),
        }
    }

    /// Controlled: the caller supplies the active key on every read
    pub fn controlled(
        get: impl Fn() -> String + 'static,
        on_change: Option<ChangeListener<String>>,
    ) -> Self {
        Self {
            selection: SelectionController::controlled(get, on_change),
        }
    }

    /// The currently active key
    pub fn active(&self) -> String {
        self.selection.value()
    }

    /// Whether the given key is the active one
    pub fn is_active(&self, key: &str) -> bool {
        self.selection.value() == key
    }

    /// Activate a key (store if owned, notify either way)
    pub fn set_active(&self, key: impl Into<String>) {
        self.selection.set_value(key.into());
    }

    /// Whether the caller owns the active key
    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }
}

impl fmt::Debug for TabsController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsController")
            .field("active", &self.active())
            .field("controlled", &self.is_controlled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_activation() {
        let tabs = TabsController::owned("data", None);
        assert!(tabs.is_active("data"));

        tabs.set_active("film");
        assert!(tabs.is_active("film"));
        assert!(!tabs.is_active("data"));
    }

    #[test]
    fn test_controlled_reflects_caller() {
        let tabs = TabsController::controlled(|| "portfolio".to_string(), None);
        tabs.set_active("bsides");
        assert_eq!(tabs.active(), "portfolio");
    }
}
