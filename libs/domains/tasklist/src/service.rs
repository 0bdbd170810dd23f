use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::TaskListResult;
use crate::models::{Project, Task};
use crate::query;
use crate::render::{ConsoleRenderer, JsonRenderer, Renderer};
use crate::repository::TaskRepository;
use crate::response::CommandResponse;

/// Service layer turning repository calls into user-facing responses
pub struct TaskManager<R: TaskRepository> {
    repository: Arc<R>,
    renderer: Arc<dyn Renderer>,
}

impl<R: TaskRepository> Clone for TaskManager<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<R: TaskRepository> TaskManager<R> {
    pub fn new(repository: R, renderer: impl Renderer + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
            renderer: Arc::new(renderer),
        }
    }

    /// Manager whose listings are plain console text
    pub fn console(repository: R) -> Self {
        Self::new(repository, ConsoleRenderer)
    }

    /// Manager whose listings are JSON documents
    pub fn json(repository: R) -> Self {
        Self::new(repository, JsonRenderer)
    }

    pub async fn add_project(&self, name: &str) -> CommandResponse {
        let result = self
            .repository
            .add_project(name.to_string())
            .await
            .map(|project| format!("The project with name \"{}\" was created", project.name));
        respond("add_project", result)
    }

    pub async fn add_task(&self, project: &str, description: &str) -> CommandResponse {
        let result = self
            .repository
            .add_task(project.to_string(), description.to_string())
            .await
            .map(|task| {
                format!(
                    "The task with name \"{}\" was added to the project \"{}\"",
                    task.name, task.project
                )
            });
        respond("add_task", result)
    }

    pub async fn check_task(&self, id: u64, is_done: bool) -> CommandResponse {
        let result = self
            .repository
            .check_task(id, is_done)
            .await
            .map(|task| {
                let state = if task.done { "finished" } else { "unfinished" };
                format!("The task with ID {} was marked as {state}", task.id)
            });
        respond("check_task", result)
    }

    pub async fn set_deadline(&self, id: u64, deadline: NaiveDate) -> CommandResponse {
        let result = self
            .repository
            .set_deadline(id, deadline)
            .await
            .map(|task| {
                format!(
                    "The deadline for the task with ID {} was set to {}",
                    task.id,
                    task.deadline.format("%d.%m.%Y")
                )
            });
        respond("set_deadline", result)
    }

    /// Every project with all of its tasks
    pub async fn display_all(&self) -> CommandResponse {
        let result = async {
            let snapshot = self.repository.snapshot().await?;
            self.renderer
                .render_projects(&query::by_project(&snapshot, None))
        }
        .await;
        listing("display_all", result)
    }

    /// Tasks due on `today`, grouped by project
    pub async fn display_due(&self, today: NaiveDate) -> CommandResponse {
        let result = async {
            let snapshot = self.repository.snapshot().await?;
            self.renderer
                .render_projects(&query::due_on(&snapshot, today))
        }
        .await;
        listing("display_due", result)
    }

    pub async fn display_by_deadline(&self) -> CommandResponse {
        let result = async {
            let snapshot = self.repository.snapshot().await?;
            self.renderer
                .render_deadlines(&query::by_deadline(&snapshot))
        }
        .await;
        listing("display_by_deadline", result)
    }

    pub async fn all_projects(&self) -> TaskListResult<BTreeMap<String, Project>> {
        self.repository.all_projects().await
    }

    pub async fn all_tasks(&self) -> TaskListResult<BTreeMap<u64, Task>> {
        self.repository.all_tasks().await
    }
}

fn respond(operation: &str, result: TaskListResult<String>) -> CommandResponse {
    let response = CommandResponse::from(result);
    log_failure(operation, &response);
    response
}

fn listing(operation: &str, result: TaskListResult<String>) -> CommandResponse {
    let response = match result {
        Ok(text) => CommandResponse::verbatim(text),
        Err(error) => CommandResponse::from_error(&error),
    };
    log_failure(operation, &response);
    response
}

fn log_failure(operation: &str, response: &CommandResponse) {
    if response.is_failure() {
        tracing::warn!(operation, message = response.message(), "Operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskListError;
    use crate::models::Snapshot;
    use crate::repository::{InMemoryTaskRepository, MockTaskRepository};
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_add_project_message() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_add_project()
            .with(eq("Work".to_string()))
            .returning(|name| Ok(Project::new(1, name)));

        let manager = TaskManager::console(mock_repo);
        let response = manager.add_project("Work").await;

        assert_eq!(
            response,
            CommandResponse::Success(
                "Operation succeeded: The project with name \"Work\" was created.".into()
            )
        );
    }

    #[tokio::test]
    async fn test_duplicate_project_message() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_add_project()
            .returning(|name| Err(TaskListError::DuplicateName(name)));

        let manager = TaskManager::console(mock_repo);

        assert_eq!(
            manager.add_project("Work").await.message(),
            "Operation failed: Project with the same name already exists."
        );
    }

    #[tokio::test]
    async fn test_add_task_messages() {
        let manager = TaskManager::console(InMemoryTaskRepository::new());
        manager.add_project("P").await;

        assert_eq!(
            manager.add_task("P", "T").await.message(),
            "Operation succeeded: The task with name \"T\" was added to the project \"P\"."
        );
        assert_eq!(
            manager.add_task("Nonexistent", "X").await.message(),
            "Operation failed: Could not find a project with the name \"Nonexistent\"."
        );
    }

    #[tokio::test]
    async fn test_check_task_messages() {
        let manager = TaskManager::console(InMemoryTaskRepository::new());
        manager.add_project("P").await;
        manager.add_task("P", "T").await;

        assert_eq!(
            manager.check_task(1, true).await.message(),
            "Operation succeeded: The task with ID 1 was marked as finished."
        );
        assert_eq!(
            manager.check_task(1, false).await.message(),
            "Operation succeeded: The task with ID 1 was marked as unfinished."
        );
        assert_eq!(
            manager.check_task(999, true).await.message(),
            "Operation failed: Could not find a task with an ID of 999."
        );
    }

    #[tokio::test]
    async fn test_set_deadline_message_uses_dotted_date() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_set_deadline()
            .with(eq(4), eq(date(2024, 7, 9)))
            .returning(|id, deadline| {
                let mut task = Task::new(id, "T".into(), "P".into());
                task.deadline = deadline;
                Ok(task)
            });

        let manager = TaskManager::console(mock_repo);

        assert_eq!(
            manager.set_deadline(4, date(2024, 7, 9)).await.message(),
            "Operation succeeded: The deadline for the task with ID 4 was set to 09.07.2024."
        );
    }

    #[tokio::test]
    async fn test_display_all_is_verbatim() {
        let manager = TaskManager::console(InMemoryTaskRepository::new());
        assert_eq!(manager.display_all().await, CommandResponse::Success(String::new()));

        manager.add_project("Secrets").await;
        manager.add_task("Secrets", "Eat more donuts.").await;

        assert_eq!(
            manager.display_all().await.message(),
            "Secrets:\n    [ ] 1: Eat more donuts.\n\n"
        );
    }

    #[tokio::test]
    async fn test_display_due_filters_by_date() {
        let manager = TaskManager::console(InMemoryTaskRepository::new());
        manager.add_project("Home").await;
        manager.add_task("Home", "Sweep").await;
        manager.add_task("Home", "Cook").await;
        manager.set_deadline(2, date(2024, 1, 1)).await;

        assert_eq!(
            manager.display_due(date(2024, 1, 1)).await.message(),
            "Home:\n    [ ] 2: Cook\n\n"
        );
        assert_eq!(manager.display_due(date(2024, 1, 2)).await.message(), "");
    }

    #[tokio::test]
    async fn test_json_listing() {
        let manager = TaskManager::json(InMemoryTaskRepository::new());
        manager.add_project("Home").await;
        manager.add_task("Home", "Sweep").await;

        let response = manager.display_by_deadline().await;
        let value: serde_json::Value = serde_json::from_str(response.message()).unwrap();

        assert_eq!(value[0]["deadline"], serde_json::Value::Null);
        assert_eq!(value[0]["projects"][0]["tasks"][0]["name"], "Sweep");
    }

    #[tokio::test]
    async fn test_listing_failure_becomes_failure_response() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_snapshot()
            .returning(|| Err(TaskListError::IdOverflow(crate::error::IdKind::Project)));

        let manager = TaskManager::console(mock_repo);

        assert_eq!(
            manager.display_all().await.message(),
            "Operation failed: The project identifier sequence is exhausted."
        );
    }

    #[tokio::test]
    async fn test_pass_through_reads() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_all_tasks().returning(|| Ok(BTreeMap::new()));
        mock_repo
            .expect_all_projects()
            .returning(|| Ok(Snapshot::default().projects));

        let manager = TaskManager::console(mock_repo);

        assert!(manager.all_tasks().await.unwrap().is_empty());
        assert!(manager.all_projects().await.unwrap().is_empty());
    }
}
