// Application State
// Main application state management and lifecycle

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tui_primitives::{DrawerController, EventContext, KeyRouter, RectRegistry, TabsController};

use crate::config::AppConfig;
use crate::core::events::AppEvent;
use crate::core::routes::Route;
use crate::pages::UiTree;

/// Main application state
pub struct App {
    /// Runtime configuration (loaded from config.yaml)
    pub config: AppConfig,

    /// Current page
    pub route: Route,

    /// Menu drawer open flag. The app owns it; the drawer controller is
    /// controlled and reads it through a getter.
    menu_open: Rc<Cell<bool>>,

    /// Drawer controller shared with the element builders
    pub drawer: Rc<DrawerController>,

    /// Build page category filter value, owned here (controlled tabs)
    build_category: Rc<RefCell<String>>,

    /// Controlled controller for the Build page category tabs
    pub build_tabs: Rc<TabsController>,

    /// Owned controller for the Research page tabs
    pub research_tabs: Rc<TabsController>,

    /// Owned controller for the Gallery page tabs
    pub gallery_tabs: Rc<TabsController>,

    /// Build page search query
    pub search_query: String,

    /// Whether keystrokes feed the search query
    pub search_active: bool,

    /// Route requested by a node click handler, applied after dispatch
    pending_route: Rc<Cell<Option<Route>>>,

    /// Search focus requested by clicking the search input
    search_focus: Rc<Cell<bool>>,

    /// Escape listener registry shared with the drawer
    pub router: KeyRouter,

    /// Rects painted for bound nodes, for mouse hit-testing
    pub registry: RectRegistry,

    /// The tree built for the last painted frame
    pub tree: Option<UiTree>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance. Controllers are created once
    /// here and keep their identity for the whole run.
    pub fn new(config: AppConfig) -> Self {
        let route = Route::from_page_name(&config.application.start_page).unwrap_or(Route::About);

        let menu_open = Rc::new(Cell::new(false));
        let drawer = {
            let read = Rc::clone(&menu_open);
            let write = Rc::clone(&menu_open);
            Rc::new(DrawerController::controlled(
                move || read.get(),
                Some(Box::new(move |next| write.set(next))),
            ))
        };

        let build_category = Rc::new(RefCell::new("All".to_string()));
        let build_tabs = {
            let read = Rc::clone(&build_category);
            let write = Rc::clone(&build_category);
            Rc::new(TabsController::controlled(
                move || read.borrow().clone(),
                Some(Box::new(move |next| *write.borrow_mut() = next)),
            ))
        };

        let research_tabs = Rc::new(TabsController::owned("data", None));
        let gallery_tabs = Rc::new(TabsController::owned("portfolio", None));

        Self {
            config,
            route,
            menu_open,
            drawer,
            build_category,
            build_tabs,
            research_tabs,
            gallery_tabs,
            search_query: String::new(),
            search_active: false,
            pending_route: Rc::new(Cell::new(None)),
            search_focus: Rc::new(Cell::new(false)),
            router: KeyRouter::new(),
            registry: RectRegistry::new(),
            tree: None,
            should_quit: false,
        }
    }

    /// Whether the menu drawer is open
    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// The Build page category filter value
    pub fn build_category(&self) -> String {
        self.build_category.borrow().clone()
    }

    /// Cell that nav click handlers write the requested route into
    pub fn route_setter(&self) -> Rc<Cell<Option<Route>>> {
        Rc::clone(&self.pending_route)
    }

    /// Cell that the search input's click handler sets
    pub fn search_focus_setter(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.search_focus)
    }

    /// Navigate to a page. Mirrors the web header: the open menu closes
    /// on route change, and leaving a page drops its search mode.
    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            self.search_active = false;
        }
        self.route = route;
        self.drawer.set_open(false);
    }

    /// Apply state requested by node handlers during dispatch
    fn apply_pending(&mut self) {
        if let Some(route) = self.pending_route.take() {
            self.navigate(route);
        }
        if self.search_focus.take() {
            self.search_active = true;
        }
    }

    /// Apply one application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,

            AppEvent::NextPage => self.navigate(self.route.next()),
            AppEvent::PrevPage => self.navigate(self.route.prev()),
            AppEvent::JumpTo(slot) => {
                if let Some(route) = Route::NAV.get(slot.saturating_sub(1)) {
                    self.navigate(*route);
                }
            }

            AppEvent::OpenMenu => self.drawer.set_open(true),

            AppEvent::StartSearch => {
                if self.route == Route::Build {
                    self.search_active = true;
                }
            }
            AppEvent::EndSearch => self.search_active = false,
            AppEvent::SearchInput(c) => self.search_query.push(c),
            AppEvent::SearchBackspace => {
                self.search_query.pop();
            }

            AppEvent::Escape => {
                // The open drawer consumes escape; only an unconsumed
                // escape falls through to ending search mode
                if !self.router.dispatch_escape() {
                    self.search_active = false;
                }
            }

            AppEvent::Click { column, row } => {
                let target = self.registry.hit_test(column, row).map(str::to_string);
                if let (Some(name), Some(tree)) = (target, &self.tree) {
                    let mut ctx = EventContext::click();
                    tree.root.emit_to(&name, &mut ctx);
                }
            }

            AppEvent::None => {}
        }

        self.apply_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ApplicationConfig, BindingConfigYaml, DrawerConfig, StatusBarConfigYaml,
    };
    use tui_primitives::DrawerSide;

    fn test_config() -> AppConfig {
        AppConfig {
            application: ApplicationConfig {
                title: "Test Portfolio".to_string(),
                start_page: "about".to_string(),
                status_bar: StatusBarConfigYaml {
                    default_text: "Ready".to_string(),
                    menu_text: Some("Menu open".to_string()),
                },
                bindings: vec![BindingConfigYaml {
                    key: "[q]".to_string(),
                    description: "Quit".to_string(),
                }],
            },
            drawer: DrawerConfig {
                side: DrawerSide::Left,
            },
        }
    }

    #[test]
    fn test_starts_on_configured_page() {
        let app = App::new(test_config());
        assert_eq!(app.route, Route::About);
        assert!(!app.menu_open());
    }

    #[test]
    fn test_page_cycling() {
        let mut app = App::new(test_config());
        app.handle_event(AppEvent::NextPage);
        assert_eq!(app.route, Route::Build);
        app.handle_event(AppEvent::PrevPage);
        assert_eq!(app.route, Route::About);
        app.handle_event(AppEvent::JumpTo(5));
        assert_eq!(app.route, Route::Gallery);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut app = App::new(test_config());
        app.handle_event(AppEvent::OpenMenu);
        assert!(app.menu_open());

        app.handle_event(AppEvent::NextPage);
        assert!(!app.menu_open());
    }

    #[test]
    fn test_search_only_starts_on_build_page() {
        let mut app = App::new(test_config());
        app.handle_event(AppEvent::StartSearch);
        assert!(!app.search_active);

        app.navigate(Route::Build);
        app.handle_event(AppEvent::StartSearch);
        assert!(app.search_active);

        app.handle_event(AppEvent::SearchInput('m'));
        app.handle_event(AppEvent::SearchInput('l'));
        assert_eq!(app.search_query, "ml");
        app.handle_event(AppEvent::SearchBackspace);
        assert_eq!(app.search_query, "m");
    }

    #[test]
    fn test_escape_prefers_drawer_over_search() {
        let mut app = App::new(test_config());
        app.navigate(Route::Build);
        app.handle_event(AppEvent::StartSearch);

        // Open the drawer and hold its escape listener
        app.handle_event(AppEvent::OpenMenu);
        DrawerController::sync_escape(&app.drawer, &app.router);

        // First escape closes the drawer, search mode survives
        app.handle_event(AppEvent::Escape);
        assert!(!app.menu_open());
        assert!(app.search_active);

        // Second escape (no listener left) ends search mode
        app.handle_event(AppEvent::Escape);
        assert!(!app.search_active);
    }

    #[test]
    fn test_controlled_build_tabs_round_trip() {
        let app = App::new(test_config());
        assert_eq!(app.build_category(), "All");
        assert!(app.build_tabs.is_controlled());

        // The controller writes back through the app-owned cell
        app.build_tabs.set_active("Web");
        assert_eq!(app.build_category(), "Web");
        assert_eq!(app.build_tabs.active(), "Web");
    }
}
