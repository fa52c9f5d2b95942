use crate::model::Task;
use crate::store::TaskListStore;
use crate::util::unicode;

/// Edit-mode state for a single task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing {
        task_id: u64,
        buffer: String,
        cursor: usize,
    },
}

/// Per-item edit machine: Viewing ⇄ Editing with a local draft buffer.
///
/// Buffer operations touch only the draft; the store is written on `commit`
/// and only then. The only way out of Editing is `commit` — there is no
/// transition that discards the draft (quitting the app drops it, but that
/// is teardown, not a cancel).
#[derive(Debug, Default)]
pub struct ItemEditor {
    state: EditState,
}

impl ItemEditor {
    pub fn new() -> Self {
        ItemEditor::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Id of the task being edited, if any.
    pub fn editing_id(&self) -> Option<u64> {
        match &self.state {
            EditState::Editing { task_id, .. } => Some(*task_id),
            EditState::Viewing => None,
        }
    }

    /// Draft text and byte cursor, while editing.
    pub fn draft(&self) -> Option<(&str, usize)> {
        match &self.state {
            EditState::Editing { buffer, cursor, .. } => Some((buffer.as_str(), *cursor)),
            EditState::Viewing => None,
        }
    }

    /// Viewing → Editing: capture the task's current text into the draft,
    /// cursor at the end. Ignored if already editing.
    pub fn start(&mut self, task: &Task) {
        if self.is_editing() {
            return;
        }
        self.state = EditState::Editing {
            task_id: task.id,
            buffer: task.text.clone(),
            cursor: task.text.len(),
        };
    }

    /// Editing → Viewing: write the draft into the store unconditionally —
    /// empty and unchanged drafts included — and return the new snapshot.
    /// Returns None when not editing.
    pub fn commit(&mut self, store: &mut TaskListStore) -> Option<Vec<Task>> {
        match std::mem::take(&mut self.state) {
            EditState::Editing {
                task_id, buffer, ..
            } => Some(store.update(task_id, &buffer)),
            EditState::Viewing => None,
        }
    }

    // --- draft buffer operations (no-ops while Viewing) ---

    pub fn insert(&mut self, c: char) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state
            && let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor)
        {
            buffer.drain(prev..*cursor);
            *cursor = prev;
        }
    }

    /// Delete the word before the cursor.
    pub fn backspace_word(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            let new_pos = unicode::word_boundary_left(buffer, *cursor);
            buffer.drain(new_pos..*cursor);
            *cursor = new_pos;
        }
    }

    /// Delete everything before the cursor.
    pub fn kill_to_start(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            buffer.drain(..*cursor);
            *cursor = 0;
        }
    }

    pub fn move_left(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state
            && let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor)
        {
            *cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state
            && let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor)
        {
            *cursor = next;
        }
    }

    pub fn move_word_left(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            *cursor = unicode::word_boundary_left(buffer, *cursor);
        }
    }

    pub fn move_word_right(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            *cursor = unicode::word_boundary_right(buffer, *cursor);
        }
    }

    pub fn move_home(&mut self) {
        if let EditState::Editing { cursor, .. } = &mut self.state {
            *cursor = 0;
        }
    }

    pub fn move_end(&mut self) {
        if let EditState::Editing { buffer, cursor, .. } = &mut self.state {
            *cursor = buffer.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskListStore {
        let mut store = TaskListStore::new();
        for t in texts {
            store.add(t);
        }
        store
    }

    #[test]
    fn starts_in_viewing() {
        let editor = ItemEditor::new();
        assert!(!editor.is_editing());
        assert_eq!(editor.editing_id(), None);
        assert_eq!(editor.draft(), None);
    }

    #[test]
    fn start_captures_current_text() {
        let store = store_with(&["Buy milk"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);

        assert!(editor.is_editing());
        assert_eq!(editor.editing_id(), Some(store.tasks()[0].id));
        assert_eq!(editor.draft(), Some(("Buy milk", 8)));
    }

    #[test]
    fn buffer_ops_leave_store_untouched() {
        let mut store = store_with(&["Buy milk"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);

        editor.backspace_word();
        for c in "oat milk".chars() {
            editor.insert(c);
        }

        assert_eq!(editor.draft().unwrap().0, "Buy oat milk");
        assert_eq!(store.tasks()[0].text, "Buy milk");

        editor.commit(&mut store);
        assert_eq!(store.tasks()[0].text, "Buy oat milk");
    }

    #[test]
    fn commit_returns_to_viewing() {
        let mut store = store_with(&["A"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);

        let snap = editor.commit(&mut store);
        assert!(snap.is_some());
        assert!(!editor.is_editing());
    }

    #[test]
    fn commit_writes_unchanged_draft() {
        let mut store = store_with(&["same"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);

        editor.commit(&mut store);
        assert_eq!(store.tasks()[0].text, "same");
    }

    #[test]
    fn commit_writes_empty_draft() {
        let mut store = store_with(&["doomed"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);
        editor.move_end();
        editor.kill_to_start();

        editor.commit(&mut store);
        assert_eq!(store.tasks()[0].text, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn commit_while_viewing_is_a_no_op() {
        let mut store = store_with(&["A"]);
        let mut editor = ItemEditor::new();
        assert_eq!(editor.commit(&mut store), None);
        assert_eq!(store.tasks()[0].text, "A");
    }

    #[test]
    fn start_while_editing_keeps_current_draft() {
        let store = store_with(&["first", "second"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);
        editor.start(&store.tasks()[1]);

        assert_eq!(editor.editing_id(), Some(store.tasks()[0].id));
    }

    #[test]
    fn cursor_movement_is_grapheme_aware() {
        let store = store_with(&["café"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);

        // "café" = 5 bytes; cursor starts at end
        editor.move_left();
        let (_, cursor) = editor.draft().unwrap();
        assert_eq!(cursor, 3); // before 'é'

        editor.backspace();
        assert_eq!(editor.draft().unwrap().0, "caé");
    }

    #[test]
    fn commit_after_target_deleted_changes_nothing() {
        let mut store = store_with(&["A", "B"]);
        let mut editor = ItemEditor::new();
        editor.start(&store.tasks()[0]);
        let id = store.tasks()[0].id;

        store.delete(id);
        let snap = editor.commit(&mut store).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].text, "B");
        assert!(!editor.is_editing());
    }
}
