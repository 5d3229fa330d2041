// Selection Controller
// One "current selection" value shared by a group of sibling controls,
// operating in owned (uncontrolled) or controlled mode

use std::cell::RefCell;
use std::fmt;

/// Listener notified with the next value on every set_value call
pub type ChangeListener<V> = Box<dyn Fn(V)>;

/// Where the current value lives. Fixed at construction: there is no API
/// for switching a controller between modes mid-life.
enum SelectionSource<V> {
    /// The controller owns the value, seeded once from a default
    Owned(RefCell<V>),
    /// The caller owns the value; every read goes through this getter
    Controlled(Box<dyn Fn() -> V>),
}

/// Controller for a single selection value with an optional change listener
pub struct SelectionController<V> {
    source: SelectionSource<V>,
    on_change: Option<ChangeListener<V>>,
}

impl<V: Clone> SelectionController<V> {
    /// Uncontrolled mode: the controller stores the value itself
    pub fn owned(initial: V, on_change: Option<ChangeListener<V>>) -> Self {
        Self {
            source: SelectionSource::Owned(RefCell::new(initial)),
            on_change,
        }
    }

    /// Controlled mode: the caller supplies the value on every read
    pub fn controlled(get: impl Fn() -> V + 'static, on_change: Option<ChangeListener<V>>) -> Self {
        Self {
            source: SelectionSource::Controlled(Box::new(get)),
            on_change,
        }
    }

    /// The current value for this controller's mode
    pub fn value(&self) -> V {
        match &self.source {
            SelectionSource::Owned(value) => value.borrow().clone(),
            SelectionSource::Controlled(get) => get(),
        }
    }

    /// Store the next value (owned mode only), then notify the listener.
    /// The store commits before the listener runs, so a reentrant
    /// set_value from inside the listener observes the new value and the
    /// interaction converges on a single post-event state.
    pub fn set_value(&self, next: V) {
        if let SelectionSource::Owned(value) = &self.source {
            *value.borrow_mut() = next.clone();
        }
        if let Some(on_change) = &self.on_change {
            on_change(next);
        }
    }

    /// Whether the caller owns the value
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, SelectionSource::Controlled(_))
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for SelectionController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("value", &self.value())
            .field("controlled", &self.is_controlled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_owned_stores_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller = SelectionController::owned(
            "a".to_string(),
            Some(Box::new(move |next| sink.borrow_mut().push(next))),
        );

        assert_eq!(controller.value(), "a");
        assert!(!controller.is_controlled());

        controller.set_value("b".to_string());
        assert_eq!(controller.value(), "b");
        assert_eq!(*seen.borrow(), vec!["b".to_string()]);
    }

    #[test]
    fn test_controlled_never_stores() {
        let external = Rc::new(RefCell::new("a".to_string()));
        let source = Rc::clone(&external);
        let notified = Rc::new(Cell::new(0));
        let count = Rc::clone(&notified);

        let controller = SelectionController::controlled(
            move || source.borrow().clone(),
            Some(Box::new(move |_| count.set(count.get() + 1))),
        );

        assert!(controller.is_controlled());

        // The caller ignores the notification: the displayed value stays put
        controller.set_value("b".to_string());
        assert_eq!(controller.value(), "a");
        assert_eq!(notified.get(), 1);

        // The caller applies the change: the controller reflects it
        *external.borrow_mut() = "b".to_string();
        assert_eq!(controller.value(), "b");
    }

    #[test]
    fn test_notify_fires_once_per_set() {
        let notified = Rc::new(Cell::new(0));
        let count = Rc::clone(&notified);
        let controller =
            SelectionController::owned(false, Some(Box::new(move |_| count.set(count.get() + 1))));

        controller.set_value(true);
        controller.set_value(true);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn test_no_listener_is_fine() {
        let controller: SelectionController<bool> = SelectionController::owned(false, None);
        controller.set_value(true);
        assert!(controller.value());
    }
}
