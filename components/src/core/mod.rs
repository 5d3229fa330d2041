// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod event;
pub mod node;
pub mod rect_handle;
pub mod scope;

pub use event::{compose_handlers, handler, EventContext, EventKind, Handler};
pub use node::{AttrValue, Element, Node, Tag};
pub use rect_handle::{RectHandle, RectMetrics, RectRegistry};
pub use scope::{ComponentError, Scope};
