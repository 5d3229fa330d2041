// Tabs elements
// Trigger list and keyed content panels over a shared tabs controller

use std::rc::Rc;

use crate::core::{AttrValue, ComponentError, Element, Node, Scope, Tag};
use crate::managers::TabsController;

/// Provider wrapper: installs the controller into the scope handed to the
/// children builder, then wraps whatever it produces.
pub fn tabs(
    scope: &Scope,
    controller: &Rc<TabsController>,
    class: &str,
    build: impl FnOnce(&Scope) -> Result<Vec<Node>, ComponentError>,
) -> Result<Node, ComponentError> {
    let child_scope = scope.with_tabs(Rc::clone(controller));
    Ok(Element::new(Tag::Block)
        .class("w-full")
        .class(class)
        .children(build(&child_scope)?)
        .build())
}

/// The row of triggers
pub fn tabs_list(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .attr("role", AttrValue::str("tablist"))
        .class("inline-flex flex-row items-center rounded-md bg-muted text-muted-foreground")
        .class(class)
        .children(children)
        .build()
}

/// A trigger activating the given key. Disabled triggers expose the
/// disabled attribute and ignore activation.
pub fn tabs_trigger(
    scope: &Scope,
    key: &str,
    class: &str,
    disabled: bool,
    children: Vec<Node>,
) -> Result<Node, ComponentError> {
    let controller = scope.tabs("TabsTrigger")?;
    let active = controller.is_active(key);

    let activate = {
        let controller = Rc::clone(&controller);
        let key = key.to_string();
        move |_: &mut crate::core::EventContext| {
            if !disabled {
                controller.set_active(key.clone());
            }
        }
    };

    let mut element = Element::new(Tag::Button)
        .attr("type", AttrValue::str("button"))
        .attr("role", AttrValue::str("tab"))
        .attr("aria-selected", AttrValue::Bool(active))
        .class("inline-flex items-center justify-center rounded-sm px-3 font-medium")
        .class(if active {
            "bg-background text-foreground"
        } else {
            "text-muted-foreground"
        })
        .class(class)
        .bind(format!("tab:{key}"))
        .on_click(activate);
    if disabled {
        element = element.attr("disabled", AttrValue::Bool(true));
    }
    Ok(element.children(children).build())
}

/// The content panel bound to a key. Inactive panels stay in the tree
/// (mounted, children attached) but carry the hidden attribute: out of
/// layout and out of interaction, with descendant state preserved above
/// the tree.
pub fn tabs_content(
    scope: &Scope,
    key: &str,
    class: &str,
    children: Vec<Node>,
) -> Result<Node, ComponentError> {
    let controller = scope.tabs("TabsContent")?;
    let hidden = !controller.is_active(key);

    Ok(Element::new(Tag::Block)
        .attr("role", AttrValue::str("tabpanel"))
        .attr("hidden", AttrValue::Bool(hidden))
        .class("mt-2")
        .class(class)
        .children(children)
        .build())
}
