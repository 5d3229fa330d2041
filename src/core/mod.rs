// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod app_config;
pub mod events;
pub mod routes;

pub use app::App;
pub use events::{AppEvent, EventHandler};
pub use routes::Route;
