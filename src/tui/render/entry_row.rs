use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render the new-task entry row.
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Entry;

    let mut spans: Vec<Span> = vec![Span::styled(
        "> ",
        Style::default()
            .fg(if focused {
                app.theme.accent
            } else {
                app.theme.dim
            })
            .bg(bg),
    )];

    if app.entry.is_empty() && !focused {
        spans.push(Span::styled(
            "Add a new task",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else if focused {
        // Draft with a block cursor at the insertion point
        let (before, after) = app.entry.split_at(app.entry_cursor.min(app.entry.len()));
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        spans.push(Span::styled(before.to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), text_style));
        if app.entry.is_empty() {
            spans.push(Span::styled(
                "Add a new task",
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    } else {
        spans.push(Span::styled(
            app.entry.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn placeholder_when_empty_and_unfocused() {
        let mut app = app_with_tasks(&[]);
        app.focus = Focus::List;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        assert_snapshot!(output, @"> Add a new task");
    }

    #[test]
    fn placeholder_visible_at_startup() {
        // Focus starts on the entry field; the hint must still show
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        assert_snapshot!(output, @"> ▌Add a new task");
    }

    #[test]
    fn block_cursor_when_focused() {
        let mut app = app_with_tasks(&[]);
        app.entry = "Buy".into();
        app.entry_cursor = 3;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        assert_snapshot!(output, @"> Buy▌");
    }

    #[test]
    fn cursor_mid_draft() {
        let mut app = app_with_tasks(&[]);
        app.entry = "Buy milk".into();
        app.entry_cursor = 3;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        assert_snapshot!(output, @"> Buy▌ milk");
    }

    #[test]
    fn kept_draft_shown_dim_when_list_focused() {
        let mut app = app_with_tasks(&["A"]);
        app.entry = "half-typed".into();
        app.focus = Focus::List;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_entry_row(frame, &app, area);
        });
        assert_snapshot!(output, @"> half-typed");
    }
}
