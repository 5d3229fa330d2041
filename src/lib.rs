// Portfolio TUI Library
// A terminal portfolio: pages, tabs, and a slide-out menu

// Core infrastructure - foundational systems
pub mod core;

// Static site content
pub mod content;

// Pages - node trees for each route
pub mod pages;

// Render - chrome layout and node painting
pub mod render;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppEvent, EventHandler, Route};
pub use crate::pages::{build_tree, UiTree};
