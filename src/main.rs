// Portfolio TUI
// Terminal portfolio application: pages, tabs, and a slide-out menu

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use portfolio_tui::config_validation::load_and_validate_config;
use portfolio_tui::core::app_config::UiSettings;
use portfolio_tui::core::{App, EventHandler};
use portfolio_tui::pages::build_tree;
use portfolio_tui::render::render_app;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    // Load and validate configuration from YAML file
    let config = load_and_validate_config(None)?;
    let ui_settings = UiSettings::default();
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if ui_settings.mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if ui_settings.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, block on the next terminal event, apply, repeat
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let tree = build_tree(app)?;
        terminal.draw(|f| render_app(f, app, &tree))?;
        app.tree = Some(tree);

        let event = event::read()?;
        let app_event = EventHandler::handle(event, app.search_active);
        app.handle_event(app_event);
    }
    Ok(())
}
