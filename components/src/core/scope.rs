// Build-Time Scope
// Controllers flow down the construction chain explicitly instead of
// through an ambient context lookup

use std::rc::Rc;
use thiserror::Error;

use crate::managers::{DrawerController, TabsController};

/// Structural misuse errors raised while building a subtree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// A consumer was built outside its required provider subtree
    #[error("{consumer} must be used within {provider}")]
    OutsideProvider {
        consumer: &'static str,
        provider: &'static str,
    },
}

/// Scope handed to children builders while constructing a subtree.
/// Provider elements derive a child scope with their controller installed;
/// consumer elements look the controller up and fail fast when absent.
#[derive(Clone, Default)]
pub struct Scope {
    tabs: Option<Rc<TabsController>>,
    drawer: Option<Rc<DrawerController>>,
}

impl Scope {
    /// The empty scope at the root of a tree
    pub fn root() -> Self {
        Self::default()
    }

    /// Derive a child scope with a tabs controller installed
    pub fn with_tabs(&self, controller: Rc<TabsController>) -> Self {
        Self {
            tabs: Some(controller),
            drawer: self.drawer.clone(),
        }
    }

    /// Derive a child scope with a drawer controller installed
    pub fn with_drawer(&self, controller: Rc<DrawerController>) -> Self {
        Self {
            tabs: self.tabs.clone(),
            drawer: Some(controller),
        }
    }

    /// The enclosing tabs controller, or the misuse error naming the consumer
    pub fn tabs(&self, consumer: &'static str) -> Result<Rc<TabsController>, ComponentError> {
        self.tabs.clone().ok_or(ComponentError::OutsideProvider {
            consumer,
            provider: "Tabs",
        })
    }

    /// The enclosing drawer controller, or the misuse error naming the consumer
    pub fn drawer(&self, consumer: &'static str) -> Result<Rc<DrawerController>, ComponentError> {
        self.drawer.clone().ok_or(ComponentError::OutsideProvider {
            consumer,
            provider: "Drawer",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::TabsController;

    #[test]
    fn test_root_scope_has_no_controllers() {
        let scope = Scope::root();
        assert_eq!(
            scope.tabs("TabsTrigger").unwrap_err(),
            ComponentError::OutsideProvider {
                consumer: "TabsTrigger",
                provider: "Tabs",
            }
        );
        assert_eq!(
            scope.drawer("DrawerContent").unwrap_err(),
            ComponentError::OutsideProvider {
                consumer: "DrawerContent",
                provider: "Drawer",
            }
        );
    }

    #[test]
    fn test_child_scope_carries_controller() {
        let controller = Rc::new(TabsController::owned("a", None));
        let scope = Scope::root().with_tabs(Rc::clone(&controller));
        let found = scope.tabs("TabsContent").unwrap();
        assert_eq!(found.active(), "a");
    }

    #[test]
    fn test_error_message_names_consumer_and_provider() {
        let err = Scope::root().tabs("TabsTrigger").unwrap_err();
        assert_eq!(err.to_string(), "TabsTrigger must be used within Tabs");
    }
}
