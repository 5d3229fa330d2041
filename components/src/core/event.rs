// Event Plumbing
// Interaction events and handler composition for delegated nodes

use crossterm::event::KeyCode;
use std::rc::Rc;

/// Kinds of interaction events a node can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation (mouse click on the node's painted rect)
    Click,
    /// Key press routed to the node
    KeyDown,
}

/// Mutable context threaded through one interaction's handler chain
#[derive(Debug)]
pub struct EventContext {
    /// The kind of event being dispatched
    pub kind: EventKind,

    /// Key code for KeyDown events
    pub key: Option<KeyCode>,

    /// Set once a handler claims the event's default behavior
    default_prevented: bool,
}

impl EventContext {
    /// Context for a pointer activation
    pub fn click() -> Self {
        Self {
            kind: EventKind::Click,
            key: None,
            default_prevented: false,
        }
    }

    /// Context for a key press
    pub fn key_down(key: KeyCode) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key: Some(key),
            default_prevented: false,
        }
    }

    /// Mark the event's default behavior as handled
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler already claimed the default behavior
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Shared handler invoked with the interaction context
pub type Handler = Rc<dyn Fn(&mut EventContext)>;

/// Wrap a closure into a shareable handler
pub fn handler(f: impl Fn(&mut EventContext) + 'static) -> Handler {
    Rc::new(f)
}

/// Compose an element's own handler with a delegated override.
/// The original always runs first; the override runs only if the original
/// left the event's default behavior intact.
pub fn compose_handlers(original: Option<Handler>, overlay: Option<Handler>) -> Handler {
    Rc::new(move |ctx: &mut EventContext| {
        if let Some(original) = &original {
            original(ctx);
        }
        if !ctx.default_prevented() {
            if let Some(overlay) = &overlay {
                overlay(ctx);
            }
        }
    })
}
