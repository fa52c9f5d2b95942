use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

/// Keys while the list has focus and no edit is open.
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) => {
            app.cursor = app.store.len().saturating_sub(1);
        }
        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(task) = app.cursor_task() {
                let id = task.id;
                app.store.toggle(id);
            }
        }
        // Delete
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(task) = app.cursor_task() {
                let id = task.id;
                app.store.delete(id);
                app.clamp_cursor();
            }
        }
        // Start editing the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => {
            if let Some(task) = app.cursor_task() {
                let task = task.clone();
                app.editor.start(&task);
            }
        }
        // Back to the entry field
        (KeyModifiers::NONE, KeyCode::Char('i') | KeyCode::Char('a')) | (_, KeyCode::Tab) => {
            app.focus = Focus::Entry;
        }
        _ => {}
    }
}

/// Keys while an item edit is open. Every way out commits the draft —
/// Enter, Esc, the save toggle, and focus-stealing keys alike. There is no
/// discard.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit: Enter, Esc (blur), or the save side of the edit toggle
        (_, KeyCode::Enter) | (_, KeyCode::Esc) => {
            app.editor.commit(&mut app.store);
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.editor.commit(&mut app.store);
        }
        // Focus-stealing keys blur the edit: commit first, then act
        (_, KeyCode::Tab) => {
            app.editor.commit(&mut app.store);
            app.focus = Focus::Entry;
        }
        (_, KeyCode::Down) => {
            app.editor.commit(&mut app.store);
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Up) => {
            app.editor.commit(&mut app.store);
            app.cursor = app.cursor.saturating_sub(1);
        }
        // Draft buffer operations
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.editor.move_home();
        }
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.editor.kill_to_start();
        }
        (_, KeyCode::Home) => {
            app.editor.move_home();
        }
        (_, KeyCode::End) => {
            app.editor.move_end();
        }
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            app.editor.move_word_left();
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            app.editor.move_word_right();
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            app.editor.move_word_left();
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            app.editor.move_word_right();
        }
        (_, KeyCode::Left) => {
            app.editor.move_left();
        }
        (_, KeyCode::Right) => {
            app.editor.move_right();
        }
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            app.editor.backspace_word();
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            app.editor.backspace();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.editor.insert(c);
        }
        _ => {}
    }
}
