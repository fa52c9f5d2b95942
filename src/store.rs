use crate::model::Task;

/// The authoritative task list.
///
/// Holds tasks in insertion order and mints ids from a monotonic counter.
/// Every operation is total: absent ids and blank submissions are silently
/// ignored, nothing here can fail. Operations build a replacement vector
/// instead of mutating tasks in place and return the new list as an owned
/// snapshot, so a snapshot handed out earlier never observes a later change.
#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskListStore {
    pub fn new() -> Self {
        TaskListStore::default()
    }

    /// The current list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// An owned copy of the current list.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Append a new task with a fresh id. Blank (empty or whitespace-only)
    /// text is rejected and the list is left unchanged.
    pub fn add(&mut self, text: &str) -> Vec<Task> {
        if text.trim().is_empty() {
            return self.snapshot();
        }
        self.next_id += 1;
        let task = Task::new(self.next_id, text);
        let mut next = self.tasks.clone();
        next.push(task);
        self.tasks = next;
        self.snapshot()
    }

    /// Flip `completed` on the task with this id. Absent ids are ignored.
    pub fn toggle(&mut self, id: u64) -> Vec<Task> {
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        completed: !t.completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        self.snapshot()
    }

    /// Remove the task with this id. Absent ids are ignored.
    pub fn delete(&mut self, id: u64) -> Vec<Task> {
        self.tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.snapshot()
    }

    /// Replace the text of the task with this id. Absent ids are ignored.
    /// Unlike `add`, empty text is accepted as-is — an edit commit always
    /// writes whatever the draft holds.
    pub fn update(&mut self, id: u64, text: &str) -> Vec<Task> {
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        text: text.to_string(),
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        self.snapshot()
    }
}
