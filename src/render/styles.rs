// UI Styles
// Color scheme and class-token styling for the TUI

use ratatui::style::{Color, Modifier, Style};
use tui_primitives::hex_color;

use crate::core::app_config::compiled;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Theme colors (compiled from config.yaml) ===

    pub fn accent() -> Color {
        let (r, g, b) = compiled::ACCENT;
        Color::Rgb(r, g, b)
    }

    pub fn panel_bg() -> Color {
        let (r, g, b) = compiled::PANEL_BG;
        Color::Rgb(r, g, b)
    }

    pub fn overlay_bg() -> Color {
        let (r, g, b) = compiled::OVERLAY_BG;
        Color::Rgb(r, g, b)
    }

    // === Chrome ===

    pub fn banner() -> Style {
        Style::default()
            .fg(Self::accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn banner_border() -> Style {
        Style::default().fg(hex_color(0x333333))
    }

    pub fn status_bar() -> Style {
        Style::default().fg(hex_color(0x777777))
    }

    pub fn legend_key() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn legend_text() -> Style {
        Style::default().fg(hex_color(0x777777))
    }

    pub fn divider() -> Style {
        Style::default().fg(hex_color(0x333333))
    }

    // === Node painting ===

    pub fn border() -> Style {
        Style::default().fg(hex_color(0x333333))
    }

    pub fn heading() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn default_text() -> Style {
        Style::default()
    }

    /// Fold class tokens into a style. Unknown tokens are layout-only and
    /// resolve to nothing.
    pub fn resolve(classes: &[String]) -> Style {
        let mut style = Style::default();
        for token in classes.iter().flat_map(|fragment| fragment.split_whitespace()) {
            style = match token {
                "bg-foreground" => style.bg(Color::White).fg(Color::Black),
                "bg-secondary" => style.bg(hex_color(0x262633)).fg(Color::White),
                "bg-muted" => style.bg(hex_color(0x1C1C28)),
                "bg-background" => style.bg(Self::panel_bg()),
                "text-foreground" => style.fg(Color::White),
                "text-muted-foreground" => style.fg(hex_color(0x777777)),
                "text-emerald" => style.fg(Color::Green),
                "text-accent" => style.fg(Self::accent()),
                "font-medium" | "font-semibold" => style.add_modifier(Modifier::BOLD),
                "underline" => style.add_modifier(Modifier::UNDERLINED),
                "ring" => style.fg(Self::accent()),
                _ => style,
            };
        }
        style
    }
}
