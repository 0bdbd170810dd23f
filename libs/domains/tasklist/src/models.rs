use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Deadline carried by tasks that have none. Sorts after every real date.
pub const NO_DEADLINE: NaiveDate = NaiveDate::MAX;

/// A named group of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Identifier issued at creation, used for display order
    pub id: u64,
    /// Unique name, the project's key
    pub name: String,
    /// Owned tasks in insertion order
    pub task_ids: Vec<u64>,
}

impl Project {
    pub fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            task_ids: Vec::new(),
        }
    }
}

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: u64,
    /// Free-text description
    pub name: String,
    pub done: bool,
    /// [`NO_DEADLINE`] when unset
    pub deadline: NaiveDate,
    /// Name of the owning project
    pub project: String,
}

impl Task {
    pub fn new(id: u64, name: String, project: String) -> Self {
        Self {
            id,
            name,
            done: false,
            deadline: NO_DEADLINE,
            project,
        }
    }

    pub fn has_deadline(&self) -> bool {
        self.deadline != NO_DEADLINE
    }

    /// The deadline, or `None` for the sentinel
    pub fn deadline(&self) -> Option<NaiveDate> {
        self.has_deadline().then_some(self.deadline)
    }
}

/// Consistent copy of every project and task, taken in one read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub projects: BTreeMap<String, Project>,
    pub tasks: BTreeMap<u64, Task>,
}

/// A task as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaskView {
    pub id: u64,
    pub name: String,
    pub done: bool,
    pub deadline: Option<NaiveDate>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            done: task.done,
            deadline: task.deadline(),
        }
    }
}

/// A project and the tasks selected for a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: u64,
    pub name: String,
    pub tasks: Vec<TaskView>,
}

/// One deadline bucket of the by-deadline listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeadlineView {
    /// `None` groups the tasks without a deadline
    pub deadline: Option<NaiveDate>,
    pub projects: Vec<ProjectView>,
}

impl DeadlineView {
    /// Heading used by the console listing
    pub fn label(&self) -> String {
        match self.deadline {
            Some(date) => date.format("%d-%m-%Y").to_string(),
            None => "No deadline".to_string(),
        }
    }
}
