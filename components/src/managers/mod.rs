// Managers module
// Provides OOP-style controller wrappers for TUI components

pub mod drawer;
pub mod keys;
pub mod selection;
pub mod tabs;

pub use drawer::{DrawerController, DrawerSide};
pub use keys::{EscapeListener, EscapeScope, KeyRouter, ListenerId};
pub use selection::{ChangeListener, SelectionController};
pub use tabs::TabsController;
