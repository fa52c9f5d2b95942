/// A single to-do entry.
///
/// Ids are minted by the store from a monotonic counter, so they are unique
/// within a list and ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    /// Task text as entered (the store does not trim or validate it).
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
