use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the task list.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg_default = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new("No tasks — type one above")
            .style(Style::default().fg(app.theme.dim).bg(bg_default));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.ensure_cursor_visible(height);
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
    {
        let is_cursor = i == app.cursor && app.focus == Focus::List;
        let bg = if is_cursor {
            app.theme.highlight
        } else {
            bg_default
        };

        let mut spans: Vec<Span> = Vec::new();
        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let checkbox_fg = if task.completed {
            app.theme.done
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox,
            Style::default().fg(checkbox_fg).bg(bg),
        ));

        let text_width = width.saturating_sub(checkbox.len());
        if app.editor.editing_id() == Some(task.id) {
            // Open edit: show the draft with a block cursor
            let (buffer, cursor) = app.editor.draft().unwrap_or(("", 0));
            let (before, after) = buffer.split_at(cursor.min(buffer.len()));
            let draft_style = Style::default().fg(app.theme.text_bright).bg(bg);
            spans.push(Span::styled(before.to_string(), draft_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.accent).bg(bg),
            ));
            spans.push(Span::styled(after.to_string(), draft_style));
        } else {
            let text_style = if task.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.text, text_width),
                text_style,
            ));
        }

        // Pad the cursor line so the highlight spans the full row
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg_default)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn empty_list() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_snapshot!(output, @"No tasks — type one above");
    }

    #[test]
    fn tasks_in_insertion_order_with_done_marker() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let id = app.store.tasks()[1].id;
        app.store.toggle(id);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_snapshot!(output, @r"
        [ ] Buy milk
        [x] Walk dog
        ");
    }

    #[test]
    fn open_edit_shows_draft_not_store_text() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.focus = Focus::List;
        let task = app.store.tasks()[0].clone();
        app.editor.start(&task);
        app.editor.backspace_word();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("[ ] Buy \u{258C}"), "got: {output:?}");
        assert!(!output.contains("Buy milk"));
    }

    #[test]
    fn long_text_is_truncated_to_width() {
        let mut app = app_with_tasks(&["a very long task text that cannot fit"]);
        let output = render_to_string(16, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_snapshot!(output, @"[ ] a very long…");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let texts: Vec<String> = (1..=8).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let mut app = app_with_tasks(&refs);
        app.focus = Focus::List;
        app.cursor = 7;

        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("task 8"));
        assert!(!output.contains("task 1\n"));
        assert_eq!(app.scroll, 5);
    }
}
