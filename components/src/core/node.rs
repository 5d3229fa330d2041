// UI Node Model
// Retained element tree that pages build and the painter consumes
//
// Usage:
//   let node = Element::new(Tag::Button)
//       .class("px-3")
//       .attr("role", AttrValue::str("tab"))
//       .on_click(|_| { /* activate */ })
//       .text("Build")
//       .build();

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::event::{EventContext, EventKind, Handler};

/// Renderable element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Block-level container (vertical flow)
    Block,
    /// Inline container (joined onto the current line)
    Inline,
    /// Section heading
    Heading,
    /// Body text block
    Paragraph,
    /// Activatable button
    Button,
    /// Navigational link
    Link,
    /// Text input field
    Input,
}

/// Attribute values carried by elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
}

impl AttrValue {
    /// Build a string attribute value
    pub fn str(value: impl Into<String>) -> Self {
        AttrValue::Str(value.into())
    }

    /// Interpret the value as a flag (string values are not flags)
    pub fn as_bool(&self) -> bool {
        matches!(self, AttrValue::Bool(true))
    }

    /// Interpret the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::Bool(_) => None,
        }
    }
}

/// A renderable element: attributes, class fragments, handlers, children
#[derive(Clone)]
pub struct Element {
    /// Element kind
    pub tag: Tag,

    /// Named attributes (role, hidden, disabled, href, ...)
    pub attrs: BTreeMap<String, AttrValue>,

    /// Class fragments, merged into a class string at paint time
    pub classes: Vec<String>,

    /// Event handlers keyed by event kind
    pub handlers: HashMap<EventKind, Handler>,

    /// Identity binding: registered in the rect registry at paint time
    /// so the event loop can hit-test and re-locate this element
    pub binding: Option<String>,

    /// Child nodes
    pub children: Vec<Node>,
}

/// A node in the UI tree: an element or raw text
#[derive(Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    /// Start building an element of the given kind
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            handlers: HashMap::new(),
            binding: None,
            children: Vec::new(),
        }
    }

    /// Append a class fragment
    pub fn class(mut self, fragment: impl Into<String>) -> Self {
        self.classes.push(fragment.into());
        self
    }

    /// Append several class fragments
    pub fn classes<I>(mut self, fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classes.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Install a handler for an event kind
    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Install a click handler
    pub fn on_click(self, f: impl Fn(&mut EventContext) + 'static) -> Self {
        self.on(EventKind::Click, super::event::handler(f))
    }

    /// Set the identity binding
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append several child nodes
    pub fn children(mut self, nodes: Vec<Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Finish building
    pub fn build(self) -> Node {
        Node::Element(self)
    }

    /// Whether the hidden attribute is set
    pub fn is_hidden(&self) -> bool {
        self.attrs.get("hidden").map(AttrValue::as_bool).unwrap_or(false)
    }

    /// Whether the disabled attribute is set
    pub fn is_disabled(&self) -> bool {
        self.attrs.get("disabled").map(AttrValue::as_bool).unwrap_or(false)
    }
}

impl Node {
    /// Build a bare text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// View this node as an element, if it is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Find the element carrying the given binding, depth-first
    pub fn find_by_binding(&self, name: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.binding.as_deref() == Some(name) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_binding(name))
    }

    /// Dispatch an event to the element carrying the given binding.
    /// Returns false when no such element exists or it has no handler
    /// for the event kind.
    pub fn emit_to(&self, binding: &str, ctx: &mut EventContext) -> bool {
        let Some(element) = self.find_by_binding(binding) else {
            return false;
        };
        match element.handlers.get(&ctx.kind) {
            Some(handler) => {
                // Clone keeps the borrow of the tree out of the handler call,
                // which may rebuild state the tree was derived from
                let handler = Handler::clone(handler);
                handler(ctx);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("classes", &self.classes)
            .field("binding", &self.binding)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("children", &self.children)
            .finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => element.fmt(f),
            Node::Text(content) => write!(f, "Text({:?})", content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_builder_collects_parts() {
        let node = Element::new(Tag::Button)
            .class("px-3")
            .class("font-medium")
            .attr("role", AttrValue::str("tab"))
            .bind("trigger:web")
            .text("Web")
            .build();

        let element = node.as_element().unwrap();
        assert_eq!(element.tag, Tag::Button);
        assert_eq!(element.classes, vec!["px-3", "font-medium"]);
        assert_eq!(element.attrs.get("role"), Some(&AttrValue::str("tab")));
        assert_eq!(element.binding.as_deref(), Some("trigger:web"));
        assert_eq!(element.children.len(), 1);
    }

    #[test]
    fn test_find_by_binding_descends() {
        let tree = Element::new(Tag::Block)
            .child(
                Element::new(Tag::Block)
                    .child(Element::new(Tag::Button).bind("deep").build())
                    .build(),
            )
            .build();

        assert!(tree.find_by_binding("deep").is_some());
        assert!(tree.find_by_binding("missing").is_none());
    }

    #[test]
    fn test_emit_to_invokes_handler() {
        let clicked = Rc::new(Cell::new(false));
        let flag = Rc::clone(&clicked);
        let tree = Element::new(Tag::Block)
            .child(
                Element::new(Tag::Button)
                    .bind("go")
                    .on_click(move |_| flag.set(true))
                    .build(),
            )
            .build();

        let mut ctx = EventContext::click();
        assert!(tree.emit_to("go", &mut ctx));
        assert!(clicked.get());
    }

    #[test]
    fn test_emit_to_without_handler_reports_false() {
        let tree = Element::new(Tag::Block).bind("silent").build();
        let mut ctx = EventContext::click();
        assert!(!tree.emit_to("silent", &mut ctx));
    }

    #[test]
    fn test_hidden_and_disabled_flags() {
        let node = Element::new(Tag::Block)
            .attr("hidden", AttrValue::Bool(true))
            .attr("disabled", AttrValue::Bool(false))
            .build();
        let element = node.as_element().unwrap();
        assert!(element.is_hidden());
        assert!(!element.is_disabled());
    }
}
