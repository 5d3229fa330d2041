// Pages module
// Node trees for each route, built from the shared primitives

pub mod about;
pub mod build;
pub mod gallery;
pub mod not_found;
pub mod perform;
pub mod research;

use tui_primitives::{
    badge, drawer, drawer_close, drawer_content, drawer_header, drawer_title, drawer_trigger,
    separator, AttrValue, BadgeVariant, Button, ButtonSize, ButtonVariant, ComponentError,
    Element, EventContext, Node, Orientation, Scope, Tag,
};

use crate::content::SOCIAL_LINKS;
use crate::core::{App, Route};

/// The tree built for one frame: nav row, page content, and (while the
/// menu is open) the drawer overlay, all under the drawer provider.
pub struct UiTree {
    pub root: Node,
}

impl UiTree {
    fn parts(&self) -> &[Node] {
        self.root
            .as_element()
            .map(|element| element.children.as_slice())
            .unwrap_or(&[])
    }

    /// Header nav row
    pub fn nav(&self) -> Option<&Node> {
        self.parts().first()
    }

    /// Current page content
    pub fn page(&self) -> Option<&Node> {
        self.parts().get(1)
    }

    /// Drawer overlay, present only while the menu is open
    pub fn overlay(&self) -> Option<&Node> {
        self.parts().get(2)
    }

    /// Dispatch a click to the bound node anywhere in the tree
    pub fn emit_click(&self, binding: &str, ctx: &mut EventContext) -> bool {
        self.root.emit_to(binding, ctx)
    }
}

/// Build the frame's tree for the current application state
pub fn build_tree(app: &App) -> Result<UiTree, ComponentError> {
    let root = drawer(&Scope::root(), &app.drawer, |scope| {
        let mut parts = vec![header_nav(app, scope)?, page_for(app, scope)?];
        if let Some(menu) = menu_overlay(app, scope)? {
            parts.push(menu);
        }
        Ok(parts)
    })?;
    Ok(UiTree { root })
}

fn page_for(app: &App, scope: &Scope) -> Result<Node, ComponentError> {
    match app.route {
        Route::About => Ok(about::page()),
        Route::Build => build::page(app, scope),
        Route::Perform => Ok(perform::page()),
        Route::Research => research::page(app, scope),
        Route::Gallery => gallery::page(app, scope),
        Route::NotFound => Ok(not_found::page(app)),
    }
}

/// Header row: menu trigger plus one nav link per page
fn header_nav(app: &App, scope: &Scope) -> Result<Node, ComponentError> {
    let mut items: Vec<Node> = Vec::new();

    // Menu trigger, slot-delegated onto a ghost button
    let menu_button = Button::new()
        .variant(ButtonVariant::Ghost)
        .size(ButtonSize::Icon)
        .build(vec![Node::text("≡")]);
    if let Some(menu_button) = menu_button {
        let trigger = drawer_trigger(scope, true, "", "drawer:trigger", None, vec![menu_button])?;
        items.extend(trigger);
    }

    for route in Route::NAV {
        let active = app.route == route;
        let pending = app.route_setter();
        let path = route.path();

        let link = Element::new(Tag::Link)
            .attr("href", AttrValue::str(path))
            .class(if active { "bg-muted text-foreground" } else { "" })
            .text(route.title())
            .build();

        let nav_button = Button::new()
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .bind(format!("nav:{path}"))
            .on_click(move |_| pending.set(Some(Route::from_path(path))))
            .as_child()
            .build(vec![link]);
        items.extend(nav_button);
    }

    Ok(Element::new(Tag::Block)
        .class("flex-row gap-1")
        .children(items)
        .build())
}

/// The slide-out menu: nav list, separator, social links, close control
fn menu_overlay(app: &App, scope: &Scope) -> Result<Option<Node>, ComponentError> {
    let mut children: Vec<Node> = vec![drawer_header("", vec![drawer_title("", "Kira Hou")])];

    for route in Route::NAV {
        let pending = app.route_setter();
        let path = route.path();

        let link = Element::new(Tag::Link)
            .attr("href", AttrValue::str(path))
            .class(if app.route == route { "bg-muted" } else { "" })
            .text(route.title())
            .build();

        let item = Button::new()
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .bind(format!("menu:{path}"))
            .on_click(move |_| pending.set(Some(Route::from_path(path))))
            .as_child()
            .build(vec![link]);
        children.extend(item);
    }

    children.push(separator(Orientation::Horizontal, true, "my-4"));
    children.extend(social_buttons(ButtonVariant::Secondary, "menu-social"));

    let close = drawer_close(
        scope,
        false,
        "mt-2",
        "drawer:dismiss",
        None,
        vec![Node::text("Close")],
    )?;
    children.extend(close);

    drawer_content(
        scope,
        &app.router,
        app.config.drawer.side,
        "w-72",
        children,
    )
}

/// Social link buttons, slot-delegated onto link nodes
pub(crate) fn social_buttons(variant: ButtonVariant, binding_prefix: &str) -> Vec<Node> {
    SOCIAL_LINKS
        .iter()
        .flat_map(|social| {
            let link = Element::new(Tag::Link)
                .attr("href", AttrValue::str(social.href))
                .text(social.label)
                .build();
            Button::new()
                .variant(variant)
                .size(ButtonSize::Sm)
                .bind(format!("{binding_prefix}:{}", social.label))
                .as_child()
                .build(vec![link])
        })
        .collect()
}

/// Shared page header: title and subtitle
pub(crate) fn page_header(route: Route) -> Node {
    Element::new(Tag::Block)
        .class("mb-4")
        .child(
            Element::new(Tag::Heading)
                .class("text-2xl font-semibold tracking-tight")
                .text(route.title())
                .build(),
        )
        .child(
            Element::new(Tag::Paragraph)
                .class("text-sm text-muted-foreground")
                .text(route.subtitle())
                .build(),
        )
        .build()
}

/// Small rounded badge used for stacks and tags
pub(crate) fn pill(text: impl Into<String>) -> Node {
    badge(
        BadgeVariant::Secondary,
        "rounded-full px-2",
        vec![Node::text(text)],
    )
}

/// A small button that delegates onto an external link
pub(crate) fn link_button(
    label: &str,
    href: &str,
    variant: ButtonVariant,
    binding: String,
) -> Option<Node> {
    let link = Element::new(Tag::Link)
        .attr("href", AttrValue::str(href))
        .text(label)
        .build();
    Button::new()
        .variant(variant)
        .size(ButtonSize::Sm)
        .bind(binding)
        .as_child()
        .build(vec![link])
}

/// Shared test fixture: an app over a minimal config
#[cfg(test)]
pub(crate) fn test_app() -> App {
    use crate::config::{
        AppConfig, ApplicationConfig, BindingConfigYaml, DrawerConfig, StatusBarConfigYaml,
    };
    use tui_primitives::DrawerSide;

    App::new(AppConfig {
        application: ApplicationConfig {
            title: "Test Portfolio".to_string(),
            start_page: "about".to_string(),
            status_bar: StatusBarConfigYaml {
                default_text: "Ready".to_string(),
                menu_text: None,
            },
            bindings: vec![BindingConfigYaml {
                key: "[q]".to_string(),
                description: "Quit".to_string(),
            }],
        },
        drawer: DrawerConfig {
            side: DrawerSide::Left,
        },
    })
}
