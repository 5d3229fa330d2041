// Render Delegation (Slot)
// Forwards incoming props onto a single child element instead of
// wrapping it in an extra element

use std::collections::{BTreeMap, HashMap};

use crate::core::{compose_handlers, AttrValue, EventContext, EventKind, Handler, Node};

/// Event kinds the delegate composes when either side provides a handler
const COMPOSED_EVENTS: [EventKind; 2] = [EventKind::Click, EventKind::KeyDown];

/// Props forwarded onto the delegated child
#[derive(Clone, Default)]
pub struct SlotProps {
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, AttrValue>,
    pub handlers: HashMap<EventKind, Handler>,
    pub binding: Option<String>,
}

impl SlotProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class fragment (empty fragments are dropped at merge time)
    pub fn class(mut self, fragment: impl Into<String>) -> Self {
        self.classes.push(fragment.into());
        self
    }

    /// Set an attribute; delegate values win over the child's on collision
    pub fn attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Install an override handler for an event kind
    pub fn on(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Install an override click handler
    pub fn on_click(self, f: impl Fn(&mut EventContext) + 'static) -> Self {
        self.on(EventKind::Click, crate::core::handler(f))
    }

    /// Set the identity binding forwarded onto the child
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }
}

/// Merge props onto exactly one element child.
/// Zero children, multiple children, or a bare text child produce no
/// output instead of failing the whole page: a misused composition site
/// disappears rather than crashing.
pub fn slot(props: SlotProps, mut children: Vec<Node>) -> Option<Node> {
    if children.len() != 1 {
        return None;
    }
    let mut element = match children.pop() {
        Some(Node::Element(element)) => element,
        _ => return None,
    };

    // Incoming attributes overlay the child's own
    for (name, value) in props.attrs {
        element.attrs.insert(name, value);
    }

    // Child fragments first, then the delegate's
    element.classes.extend(props.classes);

    // Compose a handler wherever either side provides one: the child's
    // original runs first, the delegate's override only if the original
    // did not prevent the default
    for kind in COMPOSED_EVENTS {
        let original = element.handlers.remove(&kind);
        let overlay = props.handlers.get(&kind).cloned();
        if original.is_some() || overlay.is_some() {
            element.handlers.insert(kind, compose_handlers(original, overlay));
        }
    }

    // Forward the delegate's reference binding onto the child
    if props.binding.is_some() {
        element.binding = props.binding;
    }

    Some(Node::Element(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Element, Tag};
    use crate::utilities::class_string;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_zero_children_renders_nothing() {
        assert!(slot(SlotProps::new(), vec![]).is_none());
    }

    #[test]
    fn test_multiple_children_render_nothing() {
        let children = vec![
            Element::new(Tag::Button).build(),
            Element::new(Tag::Button).build(),
        ];
        assert!(slot(SlotProps::new(), children).is_none());
    }

    #[test]
    fn test_text_child_renders_nothing() {
        assert!(slot(SlotProps::new(), vec![Node::text("plain")]).is_none());
    }

    #[test]
    fn test_child_type_is_preserved() {
        let child = Element::new(Tag::Link).build();
        let merged = slot(SlotProps::new().class("px-4"), vec![child]).unwrap();
        assert_eq!(merged.as_element().unwrap().tag, Tag::Link);
    }

    #[test]
    fn test_classes_merge_child_first() {
        let child = Element::new(Tag::Link).class("inline-flex gap-2").build();
        let merged = slot(
            SlotProps::new().class("rounded-md  px-4"),
            vec![child],
        )
        .unwrap();

        let classes = &merged.as_element().unwrap().classes;
        assert_eq!(
            class_string(classes),
            Some("inline-flex gap-2 rounded-md px-4".to_string())
        );
    }

    #[test]
    fn test_empty_class_result_is_no_class() {
        let child = Element::new(Tag::Link).build();
        let merged = slot(SlotProps::new(), vec![child]).unwrap();
        assert_eq!(class_string(&merged.as_element().unwrap().classes), None);
    }

    #[test]
    fn test_delegate_attrs_win() {
        let child = Element::new(Tag::Link)
            .attr("href", AttrValue::str("#old"))
            .attr("rel", AttrValue::str("me"))
            .build();
        let merged = slot(
            SlotProps::new().attr("href", AttrValue::str("#new")),
            vec![child],
        )
        .unwrap();

        let element = merged.as_element().unwrap();
        assert_eq!(element.attrs.get("href"), Some(&AttrValue::str("#new")));
        assert_eq!(element.attrs.get("rel"), Some(&AttrValue::str("me")));
    }

    #[test]
    fn test_handlers_compose_original_first() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let child_calls = Rc::clone(&calls);
        let child = Element::new(Tag::Button)
            .on_click(move |_| child_calls.borrow_mut().push("child"))
            .build();

        let delegate_calls = Rc::clone(&calls);
        let merged = slot(
            SlotProps::new().on_click(move |_| delegate_calls.borrow_mut().push("delegate")),
            vec![child],
        )
        .unwrap();

        let mut ctx = EventContext::click();
        merged
            .as_element()
            .unwrap()
            .handlers
            .get(&EventKind::Click)
            .unwrap()(&mut ctx);

        assert_eq!(*calls.borrow(), vec!["child", "delegate"]);
    }

    #[test]
    fn test_prevented_event_skips_delegate_handler() {
        let calls = Rc::new(RefCell::new(Vec::new()));

        let child_calls = Rc::clone(&calls);
        let child = Element::new(Tag::Button)
            .on_click(move |ctx| {
                child_calls.borrow_mut().push("child");
                ctx.prevent_default();
            })
            .build();

        let delegate_calls = Rc::clone(&calls);
        let merged = slot(
            SlotProps::new().on_click(move |_| delegate_calls.borrow_mut().push("delegate")),
            vec![child],
        )
        .unwrap();

        let mut ctx = EventContext::click();
        merged
            .as_element()
            .unwrap()
            .handlers
            .get(&EventKind::Click)
            .unwrap()(&mut ctx);

        assert_eq!(*calls.borrow(), vec!["child"]);
    }

    #[test]
    fn test_binding_forwarded_onto_child() {
        let child = Element::new(Tag::Button).bind("child-ref").build();
        let merged = slot(SlotProps::new().bind("delegate-ref"), vec![child]).unwrap();
        assert_eq!(
            merged.as_element().unwrap().binding.as_deref(),
            Some("delegate-ref")
        );

        let child = Element::new(Tag::Button).bind("child-ref").build();
        let merged = slot(SlotProps::new(), vec![child]).unwrap();
        assert_eq!(
            merged.as_element().unwrap().binding.as_deref(),
            Some("child-ref")
        );
    }
}
