// Drawer Controller
// Open/closed selection plus an escape listener scoped to the open state

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use super::keys::{EscapeScope, KeyRouter};
use super::selection::{ChangeListener, SelectionController};

/// Which edge the drawer panel slides out from.
/// Placement only affects layout class selection, never state behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSide {
    Left,
    Right,
}

impl DrawerSide {
    /// Layout classes for the panel on this side
    pub fn placement_class(&self) -> &'static str {
        match self {
            DrawerSide::Left => "left-0 border-r",
            DrawerSide::Right => "right-0 border-l",
        }
    }
}

/// Controller for one drawer's open/closed state
pub struct DrawerController {
    selection: SelectionController<bool>,
    escape: RefCell<EscapeScope>,
}

impl DrawerController {
    /// Uncontrolled: the controller owns the open flag
    pub fn owned(default_open: bool, on_change: Option<ChangeListener<bool>>) -> Self {
        Self {
            selection: SelectionController::owned(default_open, on_change),
            escape: RefCell::new(EscapeScope::new()),
        }
    }

    /// Controlled: the caller supplies the open flag on every read
    pub fn controlled(
        get: impl Fn() -> bool + 'static,
        on_change: Option<ChangeListener<bool>>,
    ) -> Self {
        Self {
            selection: SelectionController::controlled(get, on_change),
            escape: RefCell::new(EscapeScope::new()),
        }
    }

    /// Whether the drawer is open
    pub fn is_open(&self) -> bool {
        self.selection.value()
    }

    /// Whether the caller owns the open flag
    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    /// Transition the drawer. Closing also releases the escape listener,
    /// so every exit path drops it even before the next rebuild.
    pub fn set_open(&self, open: bool) {
        if !open {
            self.escape.borrow_mut().release();
        }
        self.selection.set_value(open);
    }

    /// Reconcile the escape listener with the observed state: acquired on
    /// entering the open state, held through any number of rebuilds while
    /// open, released on exit. Called by the drawer content builder.
    pub fn sync_escape(controller: &Rc<Self>, router: &KeyRouter) {
        if controller.is_open() {
            let drawer = Rc::downgrade(controller);
            controller.escape.borrow_mut().bind(
                router,
                Rc::new(move || {
                    if let Some(drawer) = drawer.upgrade() {
                        drawer.set_open(false);
                    }
                }),
            );
        } else {
            controller.escape.borrow_mut().release();
        }
    }

    /// Whether the escape listener is currently held
    pub fn escape_bound(&self) -> bool {
        self.escape.borrow().is_bound()
    }
}

impl fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerController")
            .field("open", &self.is_open())
            .field("controlled", &self.is_controlled())
            .field("escape_bound", &self.escape_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_open_is_idempotent_not_toggle() {
        let drawer = DrawerController::owned(false, None);
        drawer.set_open(true);
        drawer.set_open(true);
        assert!(drawer.is_open());
    }

    #[test]
    fn test_escape_scoped_to_open_period() {
        let router = KeyRouter::new();
        let drawer = Rc::new(DrawerController::owned(false, None));

        // Closed: reconciling registers nothing
        DrawerController::sync_escape(&drawer, &router);
        assert_eq!(router.escape_listener_count(), 0);

        // Open: acquired once, held across rebuilds
        drawer.set_open(true);
        DrawerController::sync_escape(&drawer, &router);
        DrawerController::sync_escape(&drawer, &router);
        DrawerController::sync_escape(&drawer, &router);
        assert_eq!(router.escape_listener_count(), 1);

        // Escape closes the drawer and releases the listener
        assert!(router.dispatch_escape());
        assert!(!drawer.is_open());
        assert_eq!(router.escape_listener_count(), 0);
    }

    #[test]
    fn test_explicit_close_releases_listener() {
        let router = KeyRouter::new();
        let drawer = Rc::new(DrawerController::owned(true, None));
        DrawerController::sync_escape(&drawer, &router);
        assert_eq!(router.escape_listener_count(), 1);

        drawer.set_open(false);
        assert_eq!(router.escape_listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let router = KeyRouter::new();
        {
            let drawer = Rc::new(DrawerController::owned(true, None));
            DrawerController::sync_escape(&drawer, &router);
            assert_eq!(router.escape_listener_count(), 1);
        }
        assert_eq!(router.escape_listener_count(), 0);
    }

    #[test]
    fn test_controlled_drawer_notifies_without_storing() {
        let external = Rc::new(Cell::new(false));
        let flag = Rc::clone(&external);
        let seen = Rc::new(Cell::new(0));
        let count = Rc::clone(&seen);

        let drawer = DrawerController::controlled(
            move || flag.get(),
            Some(Box::new(move |_| count.set(count.get() + 1))),
        );

        drawer.set_open(true);
        assert!(!drawer.is_open());
        assert_eq!(seen.get(), 1);

        external.set(true);
        assert!(drawer.is_open());
    }

    #[test]
    fn test_side_placement_classes() {
        assert_eq!(DrawerSide::Left.placement_class(), "left-0 border-r");
        assert_eq!(DrawerSide::Right.placement_class(), "right-0 border-l");
    }
}
