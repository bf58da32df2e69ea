use std::time::Duration;

/// One finished task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub task: String,
    pub duration: Duration,
}

impl TaskEntry {
    pub fn new(task: impl Into<String>, duration: Duration) -> Self {
        Self {
            task: task.into(),
            duration,
        }
    }
}

/// Entries for the current day, in the order they were finished.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    entries: Vec<TaskEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TaskEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.entries.iter().map(|e| e.duration).sum()
    }
}
