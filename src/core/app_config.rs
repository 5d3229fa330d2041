// Application Configuration
// Display defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Display settings compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// UI theme name
    pub theme: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            theme: compiled::THEME.to_string(),
        }
    }
}
