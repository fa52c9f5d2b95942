use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const OVERLAY_WIDTH: u16 = 40;

/// Render the help overlay (toggled with ?).
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Entry field", header_style)));
    add_binding(&mut lines, " Enter", "Add the typed task", key_style, desc_style);
    add_binding(&mut lines, " Tab/Esc", "Focus the list", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " space/x", "Toggle done", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete task", key_style, desc_style);
    add_binding(&mut lines, " e/Enter", "Edit task", key_style, desc_style);
    add_binding(&mut lines, " i/a/Tab", "Focus the entry field", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" While editing", header_style)));
    add_binding(&mut lines, " Enter/Esc", "Save", key_style, desc_style);
    add_binding(&mut lines, " ^E", "Save (edit toggle)", key_style, desc_style);
    add_binding(
        &mut lines,
        " \u{2191}\u{2193}/Tab",
        "Save, then move focus",
        key_style,
        desc_style,
    );

    // Size the overlay to the content (plus the border) so nothing clips
    let height = lines.len() as u16 + 2;
    let overlay_area = centered_rect(OVERLAY_WIDTH, height, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Key Bindings ")
        .style(Style::default().bg(bg).fg(app.theme.dim));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding(lines: &mut Vec<Line>, key: &str, desc: &str, key_style: Style, desc_style: Style) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", key), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// Centered rect of the given size, clamped to the available area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
