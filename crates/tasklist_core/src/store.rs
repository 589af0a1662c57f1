//! The in-memory task collection.
//!
//! Tasks are kept in insertion order. Every keyed operation matches the
//! description exactly and acts on the first hit only; a miss is a silent
//! no-op; the returned `bool` only reports whether a task matched.

use crate::model::{Priority, Task};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, incomplete task. Inputs are stored as given.
    pub fn add(&mut self, description: &str, priority: Priority, date: &str) {
        log::debug!("adding task '{description}' ({priority}, {date})");
        self.tasks.push(Task::new(description, priority, date));
    }

    pub fn delete(&mut self, description: &str) -> bool {
        match self.position(description) {
            Some(index) => {
                self.tasks.remove(index);
                log::debug!("deleted task '{description}'");
                true
            }
            None => {
                log::debug!("delete: no task named '{description}'");
                false
            }
        }
    }

    pub fn toggle(&mut self, description: &str) -> bool {
        match self.find_mut(description) {
            Some(task) => {
                task.completed = !task.completed;
                log::debug!("toggled task '{description}' to completed={}", task.completed);
                true
            }
            None => {
                log::debug!("toggle: no task named '{description}'");
                false
            }
        }
    }

    /// Overwrites description, priority and date of the first match.
    /// The completion flag is left as it was.
    pub fn edit(
        &mut self,
        old_description: &str,
        new_description: &str,
        new_priority: Priority,
        new_date: &str,
    ) -> bool {
        match self.find_mut(old_description) {
            Some(task) => {
                task.description = new_description.to_string();
                task.priority = new_priority;
                task.date = new_date.to_string();
                log::debug!("edited task '{old_description}' -> '{new_description}'");
                true
            }
            None => {
                log::debug!("edit: no task named '{old_description}'");
                false
            }
        }
    }

    /// Snapshot of every task in insertion order.
    pub fn list_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn find(&self, description: &str) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|task| task.description == description)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, description: &str) -> Option<usize> {
        self.tasks
            .iter()
            .position(|task| task.description == description)
    }

    fn find_mut(&mut self, description: &str) -> Option<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.description == description)
    }
}
