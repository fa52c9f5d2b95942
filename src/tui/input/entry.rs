use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Keys while the new-task entry field has focus.
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Submit — the store rejects blank drafts
        (_, KeyCode::Enter) => {
            app.submit_entry();
        }
        // Move focus to the list (the draft is kept for later)
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.focus = Focus::List;
            app.clamp_cursor();
        }
        // Ctrl+A / Ctrl+E: jump to start/end of line
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.entry_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.entry_cursor = app.entry.len();
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.entry.drain(..app.entry_cursor);
            app.entry_cursor = 0;
        }
        (_, KeyCode::Home) => {
            app.entry_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.entry_cursor = app.entry.len();
        }
        // Word movement (Alt+arrow, or readline Alt+B/F)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.entry_cursor = unicode::word_boundary_left(&app.entry, app.entry_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.entry_cursor = unicode::word_boundary_right(&app.entry, app.entry_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            app.entry_cursor = unicode::word_boundary_left(&app.entry, app.entry_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            app.entry_cursor = unicode::word_boundary_right(&app.entry, app.entry_cursor);
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.entry, app.entry_cursor) {
                app.entry_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.entry, app.entry_cursor) {
                app.entry_cursor = next;
            }
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let new_pos = unicode::word_boundary_left(&app.entry, app.entry_cursor);
            app.entry.drain(new_pos..app.entry_cursor);
            app.entry_cursor = new_pos;
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.entry, app.entry_cursor) {
                app.entry.drain(prev..app.entry_cursor);
                app.entry_cursor = prev;
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.entry.insert(app.entry_cursor, c);
            app.entry_cursor += c.len_utf8();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;

    fn press(app: &mut App, code: KeyCode) {
        handle_entry(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_then_enter_adds_a_task() {
        let mut app = App::new(Theme::default());
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].text, "Buy milk");
        assert_eq!(app.entry, "");
    }

    #[test]
    fn enter_on_blank_draft_adds_nothing() {
        let mut app = App::new(Theme::default());
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.store.is_empty());
        assert_eq!(app.entry, "   ");
    }

    #[test]
    fn backspace_is_grapheme_aware() {
        let mut app = App::new(Theme::default());
        type_str(&mut app, "caf");
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('\u{0301}')); // combining accent

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.entry, "caf");
    }

    #[test]
    fn tab_moves_focus_to_list_and_keeps_draft() {
        let mut app = App::new(Theme::default());
        type_str(&mut app, "half-typed");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.entry, "half-typed");
    }
}
