//! Display pipeline over a task snapshot: search, priority filter, status
//! filter, then an optional stable sort by priority rank.

use crate::model::{Priority, Task};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    Priority,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
    pub sort: SortOrder,
}

impl TaskQuery {
    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty()
            && self.priority == PriorityFilter::All
            && self.status == StatusFilter::All
            && self.sort == SortOrder::None
    }

    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let tasks = search_tasks(tasks.to_vec(), &self.search);
        let tasks = filter_by_priority(tasks, self.priority);
        let tasks = filter_by_status(tasks, self.status);
        sort_tasks(tasks, self.sort)
    }
}

/// Keeps tasks whose description contains `search`, ignoring case.
/// Blank search text keeps everything.
pub fn search_tasks(tasks: Vec<Task>, search: &str) -> Vec<Task> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return tasks;
    }

    tasks
        .into_iter()
        .filter(|task| task.description.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_by_priority(tasks: Vec<Task>, filter: PriorityFilter) -> Vec<Task> {
    match filter {
        PriorityFilter::All => tasks,
        PriorityFilter::Only(priority) => tasks
            .into_iter()
            .filter(|task| task.priority == priority)
            .collect(),
    }
}

pub fn filter_by_status(tasks: Vec<Task>, filter: StatusFilter) -> Vec<Task> {
    match filter {
        StatusFilter::All => tasks,
        StatusFilter::Completed => tasks.into_iter().filter(|task| task.completed).collect(),
        StatusFilter::Incomplete => tasks.into_iter().filter(|task| !task.completed).collect(),
    }
}

pub fn sort_tasks(mut tasks: Vec<Task>, order: SortOrder) -> Vec<Task> {
    if order == SortOrder::Priority {
        // sort_by_key is stable: equal ranks keep insertion order.
        tasks.sort_by_key(|task| task.priority.rank());
    }
    tasks
}
