// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Go to the next page
    NextPage,

    /// Go to the previous page
    PrevPage,

    /// Jump to a nav slot (1-based)
    JumpTo(usize),

    /// Open the menu drawer
    OpenMenu,

    /// Escape pressed (drawer first, then search fallback)
    Escape,

    /// Enter search mode on the Build page
    StartSearch,

    /// Leave search mode
    EndSearch,

    /// Append a character to the search query
    SearchInput(char),

    /// Delete the last character of the search query
    SearchBackspace,

    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event.
    /// While search mode is active, printable keys feed the query instead
    /// of triggering their hotkey meaning.
    pub fn handle(event: Event, search_active: bool) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, search_active),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, search_active: bool) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        // Ctrl+C always quits, even mid-search
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        if search_active {
            return match key.code {
                KeyCode::Esc => AppEvent::Escape,
                KeyCode::Enter => AppEvent::EndSearch,
                KeyCode::Backspace => AppEvent::SearchBackspace,
                KeyCode::Char(c) => AppEvent::SearchInput(c),
                _ => AppEvent::None,
            };
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,

            // Page navigation
            KeyCode::Tab => AppEvent::NextPage,
            KeyCode::BackTab => AppEvent::PrevPage,
            KeyCode::Char(c @ '1'..='5') => {
                AppEvent::JumpTo(c.to_digit(10).unwrap_or(1) as usize)
            }

            // Menu drawer
            KeyCode::Char('m') => AppEvent::OpenMenu,

            // Search (Build page)
            KeyCode::Char('/') => AppEvent::StartSearch,

            // Back / Escape
            KeyCode::Esc => AppEvent::Escape,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
