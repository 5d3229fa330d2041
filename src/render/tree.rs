// Node painter
// Walks the built tree and paints it into a rect, registering the rects
// of bound nodes for mouse hit-testing

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_primitives::{has_class, wrap_text, AttrValue, Element, Node, RectRegistry, Tag};

use super::styles::Styles;

/// Drawer panel width in terminal columns (the w-72/w-80 classes)
const PANEL_WIDTH: u16 = 36;

/// Paint a node into the area's top rows. Returns the rows consumed.
/// Hidden subtrees consume no rows and register no bindings.
pub fn paint_node(f: &mut Frame, node: &Node, area: Rect, registry: &mut RectRegistry) -> u16 {
    if area.width == 0 || area.height == 0 {
        return 0;
    }

    match node {
        Node::Text(text) => paint_wrapped_text(f, text, Styles::default_text(), area),
        Node::Element(element) => paint_element(f, element, area, registry),
    }
}

fn paint_element(f: &mut Frame, element: &Element, area: Rect, registry: &mut RectRegistry) -> u16 {
    if element.is_hidden() {
        return 0;
    }

    let rows = match element.tag {
        Tag::Heading => paint_line(
            f,
            text_content(element),
            Styles::heading().patch(Styles::resolve(&element.classes)),
            area,
        ),
        Tag::Paragraph => paint_wrapped_text(
            f,
            &text_content(element),
            Styles::resolve(&element.classes),
            area,
        ),
        Tag::Button | Tag::Link | Tag::Inline | Tag::Input => {
            paint_chunks(f, &[element], area, registry)
        }
        Tag::Block => {
            if has_class(&element.classes, "h-px") {
                paint_separator(f, area)
            } else if has_class(&element.classes, "flex-row") {
                let chunks: Vec<&Element> =
                    element.children.iter().filter_map(Node::as_element).collect();
                paint_chunks(f, &chunks, area, registry)
            } else {
                paint_block(f, element, area, registry)
            }
        }
    };

    // Chunk tags register their exact rect inside paint_chunks; block-level
    // bound elements cover the rows they consumed
    if let Some(binding) = &element.binding {
        if !is_chunk_tag(element.tag) && rows > 0 {
            registry.register(
                Some(binding),
                Rect {
                    x: area.x,
                    y: area.y,
                    width: area.width,
                    height: rows.min(area.height),
                },
            );
        }
    }

    rows
}

fn is_chunk_tag(tag: Tag) -> bool {
    matches!(tag, Tag::Button | Tag::Link | Tag::Inline | Tag::Input)
}

/// Vertical flow with one blank row for mt-/mb- margin classes
fn paint_children(
    f: &mut Frame,
    children: &[Node],
    area: Rect,
    registry: &mut RectRegistry,
) -> u16 {
    let mut y: u16 = 0;
    for child in children {
        if y >= area.height {
            break;
        }

        let element = child.as_element();
        if let Some(el) = element {
            if el.is_hidden() {
                continue;
            }
            if margin_top(el) && y < area.height {
                y += 1;
            }
        }
        if y >= area.height {
            break;
        }

        let child_area = Rect {
            x: area.x,
            y: area.y + y,
            width: area.width,
            height: area.height - y,
        };
        let used = paint_node(f, child, child_area, registry);
        y = (y + used).min(area.height);

        if used > 0 {
            if let Some(el) = element {
                if margin_bottom(el) && y < area.height {
                    y += 1;
                }
            }
        }
    }
    y
}

fn paint_block(f: &mut Frame, element: &Element, area: Rect, registry: &mut RectRegistry) -> u16 {
    let bordered = has_class(&element.classes, "border");
    if bordered && area.height >= 2 && area.width >= 4 {
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        let used = paint_children(f, &element.children, inner, registry);
        let boxed = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: (used + 2).min(area.height),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border());
        f.render_widget(block, boxed);
        boxed.height
    } else {
        paint_children(f, &element.children, area, registry)
    }
}

/// Lay chunks out left to right, wrapping onto new rows when the width
/// runs out. Each bound chunk registers its own painted rect.
fn paint_chunks(
    f: &mut Frame,
    chunks: &[&Element],
    area: Rect,
    registry: &mut RectRegistry,
) -> u16 {
    let mut x: u16 = 0;
    let mut y: u16 = 0;
    let mut painted = false;

    for chunk in chunks {
        if chunk.is_hidden() {
            continue;
        }
        let spans = chunk_spans(chunk);
        let width: u16 = spans
            .iter()
            .map(|span| span.content.chars().count() as u16)
            .sum();
        if width == 0 {
            continue;
        }

        if x > 0 && x + width > area.width {
            x = 0;
            y += 1;
        }
        if y >= area.height {
            break;
        }

        let rect = Rect {
            x: area.x + x,
            y: area.y + y,
            width: width.min(area.width.saturating_sub(x)),
            height: 1,
        };
        f.render_widget(Paragraph::new(Line::from(spans)), rect);
        if let Some(binding) = &chunk.binding {
            registry.register(Some(binding), rect);
        }

        painted = true;
        x += width + 1;
    }

    if painted {
        y + 1
    } else {
        0
    }
}

/// Spans for one inline chunk
fn chunk_spans(element: &Element) -> Vec<Span<'static>> {
    let style = Styles::resolve(&element.classes);
    match element.tag {
        Tag::Input => input_spans(element),
        Tag::Button => {
            let text = text_content(element);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Span::styled(format!(" {text} "), style)]
            }
        }
        Tag::Link => {
            let text = text_content(element);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Span::styled(
                    format!(" {text} "),
                    style.add_modifier(Modifier::UNDERLINED),
                )]
            }
        }
        _ => {
            let text = text_content(element);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![Span::styled(format!(" {text} "), style)]
            }
        }
    }
}

fn input_spans(element: &Element) -> Vec<Span<'static>> {
    let value = element
        .attrs
        .get("value")
        .and_then(AttrValue::as_str)
        .unwrap_or("");
    let placeholder = element
        .attrs
        .get("placeholder")
        .and_then(AttrValue::as_str)
        .unwrap_or("");
    let focused = has_class(&element.classes, "ring");

    let (shown, style) = if !value.is_empty() {
        (value.to_string(), Styles::default_text())
    } else {
        (placeholder.to_string(), Styles::resolve(&["text-muted-foreground".to_string()]))
    };

    let style = if focused {
        style.patch(Styles::resolve(&["ring".to_string()]))
    } else {
        style
    };
    let text = if focused {
        format!("/ {shown}█")
    } else {
        format!("/ {shown}")
    };
    vec![Span::styled(text, style)]
}

fn paint_line(f: &mut Frame, text: String, style: Style, area: Rect) -> u16 {
    if text.is_empty() || area.height == 0 {
        return 0;
    }
    let rect = Rect { height: 1, ..area };
    f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
    1
}

fn paint_wrapped_text(f: &mut Frame, text: &str, style: Style, area: Rect) -> u16 {
    if text.trim().is_empty() {
        return 0;
    }
    let lines: Vec<Line> = wrap_text(text, area.width as usize)
        .into_iter()
        .take(area.height as usize)
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();
    let count = lines.len() as u16;
    let rect = Rect {
        height: count,
        ..area
    };
    f.render_widget(Paragraph::new(lines), rect);
    count
}

fn paint_separator(f: &mut Frame, area: Rect) -> u16 {
    let rect = Rect { height: 1, ..area };
    let rule = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(rule, Styles::divider()))),
        rect,
    );
    1
}

/// Paint the drawer overlay tree over the whole frame: backdrop dim pass
/// first, then the panel cleared and boxed on its side.
pub fn paint_drawer(f: &mut Frame, node: &Node, area: Rect, registry: &mut RectRegistry) {
    let Some(root) = node.as_element() else {
        return;
    };

    for child in &root.children {
        let Some(element) = child.as_element() else {
            continue;
        };

        if has_class(&element.classes, "overlay") {
            // Dim everything behind the panel; the backdrop is clickable
            let dim = Paragraph::new("").style(Style::default().bg(Styles::overlay_bg()));
            f.render_widget(dim, area);
            if let Some(binding) = &element.binding {
                registry.register(Some(binding), area);
            }
        } else if has_class(&element.classes, "panel") {
            paint_panel(f, element, area, registry);
        }
    }
}

fn paint_panel(f: &mut Frame, element: &Element, area: Rect, registry: &mut RectRegistry) {
    let width = PANEL_WIDTH.min(area.width);
    let x = if has_class(&element.classes, "right-0") {
        area.x + area.width - width
    } else {
        area.x
    };
    let rect = Rect {
        x,
        y: area.y,
        width,
        height: area.height,
    };

    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Style::default().bg(Styles::panel_bg()));
    f.render_widget(block, rect);

    // The panel registers before its children, so inner controls stay on top
    if let Some(binding) = &element.binding {
        registry.register(Some(binding), rect);
    }

    let inner = Rect {
        x: rect.x + 2,
        y: rect.y + 1,
        width: rect.width.saturating_sub(4),
        height: rect.height.saturating_sub(2),
    };
    paint_children(f, &element.children, inner, registry);
}

fn margin_top(element: &Element) -> bool {
    has_margin(element, "mt-") || has_margin(element, "my-")
}

fn margin_bottom(element: &Element) -> bool {
    has_margin(element, "mb-") || has_margin(element, "my-")
}

fn has_margin(element: &Element, prefix: &str) -> bool {
    element
        .classes
        .iter()
        .flat_map(|fragment| fragment.split_whitespace())
        .any(|token| token.starts_with(prefix))
}

/// Concatenated text of an element's visible subtree
fn text_content(element: &Element) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if !el.is_hidden() => collect_text(el, out),
            Node::Element(_) => {}
        }
    }
}
