use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render the status row (bottom of screen): item counts on the left,
/// context-sensitive key hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let len = app.store.len();
    let done = app.store.completed_count();
    let mut counts = format!("{} {}", len, if len == 1 { "item" } else { "items" });
    if done > 0 {
        counts.push_str(&format!(" \u{00B7} {} done", done));
    }

    let hint = if app.editor.is_editing() {
        "Enter save \u{00B7} edits always save"
    } else {
        match app.focus {
            Focus::Entry => "Enter add  Tab list  ^C quit",
            Focus::List => "e edit  space toggle  d delete  ? help  q quit",
        }
    };

    let mut spans = vec![Span::styled(
        counts.clone(),
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let content_width = counts.chars().count();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
