// Render module - chrome layout and node painting

pub mod styles;
pub mod tree;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::BindingConfigYaml;
use crate::core::App;
use crate::pages::UiTree;
use styles::Styles;

/// Render one frame: chrome, nav, page content, and the drawer on top
pub fn render_app(f: &mut Frame, app: &mut App, ui: &UiTree) {
    let area = f.area();
    app.registry.clear();

    // Minimum: banner(3) + nav(1) + gap(1) + content(1) + legend(1) + divider(1) + status(1)
    if area.width < 4 || area.height < 9 {
        return;
    }

    // 1. Title banner
    let banner = Rect {
        x: 0,
        y: 0,
        width: area.width,
        height: 3,
    };
    app.registry.register(Some("chrome:banner"), banner);
    render_banner(f, banner, &app.config.application.title);

    // 2. Status bar (bottom row)
    let status_bar = Rect {
        x: 0,
        y: area.height - 1,
        width: area.width,
        height: 1,
    };
    app.registry.register(Some("chrome:status"), status_bar);

    // 3. Footer divider
    let footer_div = Rect {
        x: 0,
        y: area.height - 2,
        width: area.width,
        height: 1,
    };

    // 4. Bindings legend
    let legend = Rect {
        x: 1,
        y: area.height - 3,
        width: area.width - 2,
        height: 1,
    };

    // 5. Nav row under the banner
    let nav_area = Rect {
        x: 1,
        y: 3,
        width: area.width - 2,
        height: 1,
    };
    if let Some(nav) = ui.nav() {
        tree::paint_node(f, nav, nav_area, &mut app.registry);
    }

    // 6. Content between nav and legend
    let content = Rect {
        x: 1,
        y: 5,
        width: area.width - 2,
        height: area.height.saturating_sub(8),
    };
    app.registry.register(Some("chrome:content"), content);
    if let Some(page) = ui.page() {
        tree::paint_node(f, page, content, &mut app.registry);
    }

    render_bindings(f, legend, &app.config.application.bindings);
    render_divider(f, footer_div);
    render_status_bar(f, status_bar, app);

    // 7. Drawer painted last, over everything
    if let Some(overlay) = ui.overlay() {
        tree::paint_drawer(f, overlay, area, &mut app.registry);
    }
}

/// Render the title header with borders
fn render_banner(f: &mut Frame, area: Rect, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::banner_border());
    f.render_widget(block, area);

    let title_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(title.to_string(), Styles::banner())))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, title_area);
}

/// Render the key bindings legend
fn render_bindings(f: &mut Frame, area: Rect, bindings: &[BindingConfigYaml]) {
    let mut spans: Vec<Span> = Vec::new();
    for binding in bindings {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(binding.key.clone(), Styles::legend_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description.clone(), Styles::legend_text()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_divider(f: &mut Frame, area: Rect) {
    let rule = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(rule, Styles::divider()))),
        area,
    );
}

/// Render the status bar; the menu text takes over while the drawer is open
fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let status = &app.config.application.status_bar;
    let text = if app.menu_open() {
        status
            .menu_text
            .clone()
            .unwrap_or_else(|| status.default_text.clone())
    } else {
        status.default_text.clone()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Styles::status_bar()))),
        area,
    );
}
