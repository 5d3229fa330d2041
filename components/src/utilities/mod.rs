// Utilities module
// Helper functions and quality of life utilities

pub mod classes;
pub mod helpers;

pub use classes::{class_string, cn, has_class};
pub use helpers::{hex_color, wrap_text};
