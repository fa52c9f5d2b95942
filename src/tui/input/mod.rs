mod entry;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handle a key event for the current focus and edit state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from anywhere. An open edit draft is dropped with the
    // app — teardown, not a cancel.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.focus {
        Focus::Entry => entry::handle_entry(app, key),
        Focus::List => {
            if app.editor.is_editing() {
                list::handle_edit(app, key);
            } else {
                list::handle_navigate(app, key);
            }
        }
    }
}
