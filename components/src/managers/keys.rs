// Key Routing
// Escape listeners whose lifetimes are scoped to the state that needs them

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Handle to a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Callback invoked when escape is dispatched
pub type EscapeListener = Rc<dyn Fn()>;

#[derive(Default)]
struct RouterInner {
    next_id: u64,
    escape: Vec<(ListenerId, EscapeListener)>,
}

/// Registry of escape-key listeners. The application event loop offers
/// every escape press to the router before falling back to its own
/// handling.
#[derive(Clone, Default)]
pub struct KeyRouter {
    inner: Rc<RefCell<RouterInner>>,
}

impl KeyRouter {
    /// Create an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an escape listener
    pub fn register_escape(&self, listener: EscapeListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.escape.push((id, listener));
        id
    }

    /// Remove a previously registered listener
    pub fn deregister(&self, id: ListenerId) {
        self.inner.borrow_mut().escape.retain(|(other, _)| *other != id);
    }

    /// Number of currently registered escape listeners
    pub fn escape_listener_count(&self) -> usize {
        self.inner.borrow().escape.len()
    }

    /// Dispatch escape to every registered listener. The listener list is
    /// snapshotted first: a listener may deregister itself (or trigger
    /// other registrations) without invalidating the dispatch in flight.
    /// Returns whether any listener ran.
    pub fn dispatch_escape(&self) -> bool {
        let listeners: Vec<EscapeListener> = self
            .inner
            .borrow()
            .escape
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &listeners {
            listener();
        }
        !listeners.is_empty()
    }

    fn downgrade(&self) -> Weak<RefCell<RouterInner>> {
        Rc::downgrade(&self.inner)
    }
}

/// Scoped acquisition of an escape listener: bound at most once until
/// released, and guaranteed to deregister on release or drop.
#[derive(Default)]
pub struct EscapeScope {
    router: Weak<RefCell<RouterInner>>,
    id: Option<ListenerId>,
}

impl EscapeScope {
    /// An unbound scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a listener is currently registered
    pub fn is_bound(&self) -> bool {
        self.id.is_some()
    }

    /// Register the listener unless one is already held. Re-binding while
    /// bound is a no-op, so rebuilding a view while it stays open never
    /// stacks listeners.
    pub fn bind(&mut self, router: &KeyRouter, listener: EscapeListener) {
        if self.id.is_some() {
            return;
        }
        self.id = Some(router.register_escape(listener));
        self.router = router.downgrade();
    }

    /// Deregister the held listener, if any
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(inner) = self.router.upgrade() {
                inner.borrow_mut().escape.retain(|(other, _)| *other != id);
            }
        }
    }
}

impl Drop for EscapeScope {
    fn drop(&mut self) {
        self.release();
    }
}
