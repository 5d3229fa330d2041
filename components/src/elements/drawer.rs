// Drawer elements (slide-out sheet)
// Overlay plus side panel; escape, backdrop, and close controls close it

use std::rc::Rc;

use crate::core::{
    compose_handlers, AttrValue, ComponentError, Element, EventKind, Handler, Node, Scope, Tag,
};
use crate::elements::slot::{slot, SlotProps};
use crate::managers::{DrawerController, DrawerSide, KeyRouter};

/// Provider wrapper: installs the controller into the scope handed to the
/// children builder.
pub fn drawer(
    scope: &Scope,
    controller: &Rc<DrawerController>,
    build: impl FnOnce(&Scope) -> Result<Vec<Node>, ComponentError>,
) -> Result<Node, ComponentError> {
    let child_scope = scope.with_drawer(Rc::clone(controller));
    Ok(Element::new(Tag::Block)
        .children(build(&child_scope)?)
        .build())
}

/// A control that opens the drawer. The caller's handler runs first; the
/// open transition only follows when it left the default intact. Opening
/// an open drawer is idempotent (the trigger never toggles).
pub fn drawer_trigger(
    scope: &Scope,
    as_child: bool,
    class: &str,
    binding: &str,
    on_click: Option<Handler>,
    children: Vec<Node>,
) -> Result<Option<Node>, ComponentError> {
    let controller = scope.drawer("DrawerTrigger")?;
    let open = Rc::new(move |_: &mut crate::core::EventContext| controller.set_open(true));
    Ok(build_control(as_child, class, binding, on_click, open, children))
}

/// A control that closes the drawer
pub fn drawer_close(
    scope: &Scope,
    as_child: bool,
    class: &str,
    binding: &str,
    on_click: Option<Handler>,
    children: Vec<Node>,
) -> Result<Option<Node>, ComponentError> {
    let controller = scope.drawer("DrawerClose")?;
    let close = Rc::new(move |_: &mut crate::core::EventContext| controller.set_open(false));
    Ok(build_control(as_child, class, binding, on_click, close, children))
}

fn build_control(
    as_child: bool,
    class: &str,
    binding: &str,
    on_click: Option<Handler>,
    transition: Handler,
    children: Vec<Node>,
) -> Option<Node> {
    let activate = compose_handlers(on_click, Some(transition));

    if as_child {
        let props = SlotProps::new()
            .class(class)
            .bind(binding)
            .on(EventKind::Click, activate);
        return slot(props, children);
    }

    Some(
        Element::new(Tag::Button)
            .attr("type", AttrValue::str("button"))
            .class(class)
            .bind(binding)
            .on(EventKind::Click, activate)
            .children(children)
            .build(),
    )
}

/// The overlay and panel. While closed nothing is produced at all and the
/// escape listener is released; while open the listener is held (acquired
/// once per open period, however often the tree is rebuilt) and the
/// backdrop click closes the drawer.
pub fn drawer_content(
    scope: &Scope,
    router: &KeyRouter,
    side: DrawerSide,
    class: &str,
    children: Vec<Node>,
) -> Result<Option<Node>, ComponentError> {
    let controller = scope.drawer("DrawerContent")?;
    DrawerController::sync_escape(&controller, router);

    if !controller.is_open() {
        return Ok(None);
    }

    let backdrop = {
        let controller = Rc::clone(&controller);
        Element::new(Tag::Block)
            .class("overlay inset-0 bg-black/40")
            .attr("aria-hidden", AttrValue::Bool(true))
            .bind("drawer:backdrop")
            .on_click(move |_| controller.set_open(false))
            .build()
    };

    let panel = Element::new(Tag::Block)
        .attr("role", AttrValue::str("dialog"))
        .attr("aria-modal", AttrValue::Bool(true))
        .class("panel flex h-full w-80 flex-col bg-background")
        .class(side.placement_class())
        .class(class)
        .bind("drawer:panel")
        .children(children)
        .build();

    Ok(Some(
        Element::new(Tag::Block)
            .class("fixed inset-0 z-50 flex")
            .child(backdrop)
            .child(panel)
            .build(),
    ))
}

/// Panel header block
pub fn drawer_header(class: &str, children: Vec<Node>) -> Node {
    Element::new(Tag::Block)
        .class("mb-4 space-y-1 text-left")
        .class(class)
        .children(children)
        .build()
}

/// Panel title heading
pub fn drawer_title(class: &str, text: impl Into<String>) -> Node {
    Element::new(Tag::Heading)
        .class("text-lg font-semibold")
        .class(class)
        .text(text)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventContext;
    use crate::managers::TabsController;
    use std::cell::Cell;

    fn open_content(
        controller: &Rc<DrawerController>,
        router: &KeyRouter,
    ) -> Option<Node> {
        let scope = Scope::root().with_drawer(Rc::clone(controller));
        drawer_content(&scope, router, DrawerSide::Left, "", vec![Node::text("menu")]).unwrap()
    }

    #[test]
    fn test_closed_drawer_produces_nothing() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(false, None));
        assert!(open_content(&controller, &router).is_none());
        assert_eq!(router.escape_listener_count(), 0);
    }

    #[test]
    fn test_trigger_opens_and_content_appears() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(false, None));
        let scope = Scope::root().with_drawer(Rc::clone(&controller));

        let trigger = drawer_trigger(&scope, false, "", "drawer:trigger", None, vec![])
            .unwrap()
            .unwrap();
        let mut ctx = EventContext::click();
        trigger.emit_to("drawer:trigger", &mut ctx);
        assert!(controller.is_open());

        let content = open_content(&controller, &router).unwrap();
        let root = content.as_element().unwrap();
        assert_eq!(root.children.len(), 2);

        let panel = root.children[1].as_element().unwrap();
        assert_eq!(panel.attrs.get("role"), Some(&AttrValue::str("dialog")));
        assert_eq!(panel.attrs.get("aria-modal"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_escape_closes_open_drawer() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(true, None));

        let content = open_content(&controller, &router);
        assert!(content.is_some());
        assert_eq!(router.escape_listener_count(), 1);

        assert!(router.dispatch_escape());
        assert!(!controller.is_open());
        assert!(open_content(&controller, &router).is_none());
        assert_eq!(router.escape_listener_count(), 0);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(true, None));

        let content = open_content(&controller, &router).unwrap();
        let mut ctx = EventContext::click();
        content.emit_to("drawer:backdrop", &mut ctx);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_close_control_closes() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(true, None));
        let scope = Scope::root().with_drawer(Rc::clone(&controller));

        let close = drawer_close(&scope, false, "", "drawer:dismiss", None, vec![])
            .unwrap()
            .unwrap();
        let mut ctx = EventContext::click();
        close.emit_to("drawer:dismiss", &mut ctx);
        assert!(!controller.is_open());
        let _ = router;
    }

    #[test]
    fn test_repeated_trigger_clicks_keep_it_open() {
        let controller = Rc::new(DrawerController::owned(false, None));
        let scope = Scope::root().with_drawer(Rc::clone(&controller));
        let trigger = drawer_trigger(&scope, false, "", "drawer:trigger", None, vec![])
            .unwrap()
            .unwrap();

        for _ in 0..2 {
            let mut ctx = EventContext::click();
            trigger.emit_to("drawer:trigger", &mut ctx);
        }
        assert!(controller.is_open());
    }

    #[test]
    fn test_rebuilds_while_open_hold_one_listener() {
        let router = KeyRouter::new();
        let controller = Rc::new(DrawerController::owned(true, None));

        for _ in 0..3 {
            let _ = open_content(&controller, &router);
        }
        assert_eq!(router.escape_listener_count(), 1);
    }

    #[test]
    fn test_trigger_handler_may_prevent_open() {
        let controller = Rc::new(DrawerController::owned(false, None));
        let scope = Scope::root().with_drawer(Rc::clone(&controller));

        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let guard: Handler = Rc::new(move |ctx: &mut EventContext| {
            flag.set(true);
            ctx.prevent_default();
        });

        let trigger = drawer_trigger(&scope, false, "", "drawer:trigger", Some(guard), vec![])
            .unwrap()
            .unwrap();
        let mut ctx = EventContext::click();
        trigger.emit_to("drawer:trigger", &mut ctx);

        assert!(ran.get());
        assert!(!controller.is_open());
    }

    #[test]
    fn test_as_child_trigger_delegates_onto_child() {
        let controller = Rc::new(DrawerController::owned(false, None));
        let scope = Scope::root().with_drawer(Rc::clone(&controller));

        let child = Element::new(Tag::Button).class("px-1").build();
        let trigger = drawer_trigger(&scope, true, "", "drawer:trigger", None, vec![child])
            .unwrap()
            .unwrap();
        assert_eq!(trigger.as_element().unwrap().tag, Tag::Button);

        let mut ctx = EventContext::click();
        trigger.emit_to("drawer:trigger", &mut ctx);
        assert!(controller.is_open());
    }

    #[test]
    fn test_consumers_outside_provider_fail_fast() {
        let router = KeyRouter::new();
        // A tabs scope is not a drawer scope
        let scope = Scope::root().with_tabs(Rc::new(TabsController::owned("a", None)));
        assert_eq!(
            drawer_content(&scope, &router, DrawerSide::Right, "", vec![]).unwrap_err(),
            ComponentError::OutsideProvider {
                consumer: "DrawerContent",
                provider: "Drawer",
            }
        );
        assert_eq!(
            drawer_trigger(&scope, false, "", "x", None, vec![]).unwrap_err(),
            ComponentError::OutsideProvider {
                consumer: "DrawerTrigger",
                provider: "Drawer",
            }
        );
    }
}
