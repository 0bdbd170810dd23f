use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskListError, TaskListResult};
use crate::ids::{IdRegister, SequentialIdRegister};
use crate::models::{Project, Snapshot, Task};

/// Repository trait for project and task storage
///
/// Every method is atomic with respect to the others. Reads hand out owned
/// copies, so callers can never observe or cause a partial mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create an empty project; fails if the name is taken
    async fn add_project(&self, name: String) -> TaskListResult<Project>;

    /// Append a new open task to an existing project
    async fn add_task(&self, project: String, description: String) -> TaskListResult<Task>;

    /// Set the completion flag of a task
    async fn check_task(&self, id: u64, is_done: bool) -> TaskListResult<Task>;

    /// Overwrite the deadline of a task
    async fn set_deadline(&self, id: u64, deadline: NaiveDate) -> TaskListResult<Task>;

    /// Copy of every project keyed by name
    async fn all_projects(&self) -> TaskListResult<BTreeMap<String, Project>>;

    /// Copy of every task keyed by ID
    async fn all_tasks(&self) -> TaskListResult<BTreeMap<u64, Task>>;

    /// Projects and tasks captured under one read
    async fn snapshot(&self) -> TaskListResult<Snapshot>;
}

#[derive(Debug, Default)]
struct Store {
    projects: HashMap<String, Project>,
    tasks: HashMap<u64, Task>,
}

/// In-memory implementation of TaskRepository
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
    ids: Arc<dyn IdRegister>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::with_register(Arc::new(SequentialIdRegister::new()))
    }

    pub fn with_register(ids: Arc<dyn IdRegister>) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            ids,
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn add_project(&self, name: String) -> TaskListResult<Project> {
        let mut store = self.store.write().await;

        let slot = match store.projects.entry(name) {
            Entry::Occupied(taken) => {
                return Err(TaskListError::DuplicateName(taken.key().clone()));
            }
            Entry::Vacant(slot) => slot,
        };

        let id = self.ids.next_project_id()?;
        let project = Project::new(id, slot.key().clone());
        slot.insert(project.clone());

        tracing::info!(project_id = id, name = %project.name, "Created project");
        Ok(project)
    }

    async fn add_task(&self, project: String, description: String) -> TaskListResult<Task> {
        let mut store = self.store.write().await;

        if !store.projects.contains_key(&project) {
            return Err(TaskListError::ProjectNotFound(project));
        }

        let id = self.ids.next_task_id()?;
        let task = Task::new(id, description, project);

        if let Some(owner) = store.projects.get_mut(&task.project) {
            owner.task_ids.push(id);
        }
        store.tasks.insert(id, task.clone());

        tracing::info!(task_id = id, project = %task.project, "Added task");
        Ok(task)
    }

    async fn check_task(&self, id: u64, is_done: bool) -> TaskListResult<Task> {
        let mut store = self.store.write().await;

        let task = store
            .tasks
            .get_mut(&id)
            .ok_or(TaskListError::TaskNotFound(id))?;
        task.done = is_done;

        tracing::info!(task_id = id, done = is_done, "Updated task status");
        Ok(task.clone())
    }

    async fn set_deadline(&self, id: u64, deadline: NaiveDate) -> TaskListResult<Task> {
        let mut store = self.store.write().await;

        let task = store
            .tasks
            .get_mut(&id)
            .ok_or(TaskListError::TaskNotFound(id))?;
        task.deadline = deadline;

        tracing::info!(task_id = id, %deadline, "Set task deadline");
        Ok(task.clone())
    }

    async fn all_projects(&self) -> TaskListResult<BTreeMap<String, Project>> {
        let store = self.store.read().await;
        Ok(store
            .projects
            .iter()
            .map(|(name, project)| (name.clone(), project.clone()))
            .collect())
    }

    async fn all_tasks(&self) -> TaskListResult<BTreeMap<u64, Task>> {
        let store = self.store.read().await;
        Ok(store
            .tasks
            .iter()
            .map(|(id, task)| (*id, task.clone()))
            .collect())
    }

    async fn snapshot(&self) -> TaskListResult<Snapshot> {
        let store = self.store.read().await;
        Ok(Snapshot {
            projects: store
                .projects
                .iter()
                .map(|(name, project)| (name.clone(), project.clone()))
                .collect(),
            tasks: store
                .tasks
                .iter()
                .map(|(id, task)| (*id, task.clone()))
                .collect(),
        })
    }
}
