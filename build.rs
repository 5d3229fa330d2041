// Build script - reads config.yaml at compile time and generates defaults
// This allows changing display defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const THEME: &str = "{theme}";

// Theme colors (RGB tuples)
pub const ACCENT: (u8, u8, u8) = {accent};
pub const PANEL_BG: (u8, u8, u8) = {panel_bg};
pub const OVERLAY_BG: (u8, u8, u8) = {overlay_bg};
"#,
        mouse_enabled = config.mouse_enabled,
        theme = config.theme,
        accent = format!("({}, {}, {})", config.accent.0, config.accent.1, config.accent.2),
        panel_bg = format!("({}, {}, {})", config.panel_bg.0, config.panel_bg.1, config.panel_bg.2),
        overlay_bg = format!(
            "({}, {}, {})",
            config.overlay_bg.0, config.overlay_bg.1, config.overlay_bg.2
        ),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    mouse_enabled: bool,
    theme: String,
    accent: (u8, u8, u8),
    panel_bg: (u8, u8, u8),
    overlay_bg: (u8, u8, u8),
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            theme: "default".to_string(),
            accent: (34, 211, 238),   // #22D3EE
            panel_bg: (20, 20, 32),   // #141420
            overlay_bg: (10, 10, 10), // #0A0A0A
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("ui:") {
            in_ui = true;
            in_colors = false;
            continue;
        } else if trimmed.starts_with("colors:") && in_ui {
            in_colors = true;
            continue;
        } else if !line.starts_with(' ') && !line.starts_with('\t') && trimmed.ends_with(':') {
            // A new top-level section ends the ui block
            in_ui = false;
            in_colors = false;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_colors {
                match key {
                    "accent" => config.accent = parse_hex_color(value),
                    "panel_bg" => config.panel_bg = parse_hex_color(value),
                    "overlay_bg" => config.overlay_bg = parse_hex_color(value),
                    _ => {}
                }
            } else if in_ui {
                match key {
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "theme" => config.theme = value.to_string(),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    // Find the colon separator
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (preserve # at start of value: hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = &value[..comment_pos];
        value = value.trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    // Remove quotes if present
    let s = s.trim().trim_matches('"').trim_matches('\'');

    // Remove # if present
    let s = if let Some(stripped) = s.strip_prefix('#') { stripped } else { s };

    // Parse hex string
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    // Fallback to default if parsing fails
    (0, 0, 0)
}
