use axum::{
    Router,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::input::{InputError, parse_deadline, parse_flag, parse_task_id};
use crate::models::{DeadlineView, ProjectView, TaskView};
use crate::repository::TaskRepository;
use crate::response::CommandResponse;
use crate::service::TaskManager;

const TAG: &str = "TaskList";

/// OpenAPI documentation for the task list API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        list_today,
        list_by_deadline,
        create_project,
        create_task,
        update_status,
        update_status_in_path,
        update_deadline,
    ),
    components(schemas(ProjectView, TaskView, DeadlineView)),
    tags(
        (name = TAG, description = "Projects, tasks and deadlines")
    )
)]
pub struct ApiDoc;

type SharedManager<R> = State<Arc<TaskManager<R>>>;

/// Create the task list router. Listings are rendered by the manager's renderer.
pub fn router<R: TaskRepository + 'static>(manager: TaskManager<R>) -> Router {
    let shared_manager = Arc::new(manager);

    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/tasks/today", get(list_today))
        .route("/tasks/by-deadline", get(list_by_deadline))
        .route("/tasks/{task_id}", put(update_deadline))
        .route("/tasks/{task_id}/status", put(update_status))
        .route("/tasks/{task_id}/status/{is_done}", put(update_status_in_path))
        .route("/projects", post(create_project))
        .route("/projects/{project_name}/tasks", post(create_task))
        .with_state(shared_manager)
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    /// Name of the new project
    pub project_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaskQuery {
    /// Description of the new task
    pub task_name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// `true` marks the task finished, `false` unfinished
    pub is_done: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeadlineQuery {
    /// dd-MM-yyyy, yyyy-MM-dd, dd.MM.yyyy or dd/MM/yyyy
    pub deadline: String,
}

/// All projects with their tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = TAG,
    responses(
        (status = 200, description = "Projects in creation order", body = Vec<ProjectView>),
        (status = 400, description = "Listing failed", body = String)
    )
)]
async fn list_tasks<R: TaskRepository>(State(manager): SharedManager<R>) -> Response {
    json_listing(manager.display_all().await)
}

/// Tasks due today, grouped by project
#[utoipa::path(
    get,
    path = "/tasks/today",
    tag = TAG,
    responses(
        (status = 200, description = "Projects with tasks due today", body = Vec<ProjectView>),
        (status = 400, description = "Listing failed", body = String)
    )
)]
async fn list_today<R: TaskRepository>(State(manager): SharedManager<R>) -> Response {
    let today = Local::now().date_naive();
    json_listing(manager.display_due(today).await)
}

/// Tasks grouped by deadline, then project
#[utoipa::path(
    get,
    path = "/tasks/by-deadline",
    tag = TAG,
    responses(
        (status = 200, description = "Deadline groups, undated last", body = Vec<DeadlineView>),
        (status = 400, description = "Listing failed", body = String)
    )
)]
async fn list_by_deadline<R: TaskRepository>(State(manager): SharedManager<R>) -> Response {
    json_listing(manager.display_by_deadline().await)
}

/// Create a project
#[utoipa::path(
    post,
    path = "/projects",
    tag = TAG,
    params(ProjectQuery),
    responses(
        (status = 200, description = "Project created", body = String),
        (status = 400, description = "Name already taken", body = String)
    )
)]
async fn create_project<R: TaskRepository>(
    State(manager): SharedManager<R>,
    Query(query): Query<ProjectQuery>,
) -> CommandResponse {
    manager.add_project(&query.project_name).await
}

/// Add a task to a project
#[utoipa::path(
    post,
    path = "/projects/{project_name}/tasks",
    tag = TAG,
    params(
        ("project_name" = String, Path, description = "Owning project"),
        TaskQuery
    ),
    responses(
        (status = 200, description = "Task added", body = String),
        (status = 400, description = "Unknown project", body = String)
    )
)]
async fn create_task<R: TaskRepository>(
    State(manager): SharedManager<R>,
    Path(project_name): Path<String>,
    Query(query): Query<TaskQuery>,
) -> CommandResponse {
    manager.add_task(&project_name, &query.task_name).await
}

/// Mark a task finished or unfinished
#[utoipa::path(
    put,
    path = "/tasks/{task_id}/status",
    tag = TAG,
    params(
        ("task_id" = u64, Path, description = "Task ID"),
        StatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = String),
        (status = 400, description = "Unknown task or malformed input", body = String)
    )
)]
async fn update_status<R: TaskRepository>(
    State(manager): SharedManager<R>,
    Path(task_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> CommandResponse {
    set_status(&manager, &task_id, &query.is_done).await
}

/// Mark a task finished or unfinished, flag in the path
#[utoipa::path(
    put,
    path = "/tasks/{task_id}/status/{is_done}",
    tag = TAG,
    params(
        ("task_id" = u64, Path, description = "Task ID"),
        ("is_done" = bool, Path, description = "New completion flag")
    ),
    responses(
        (status = 200, description = "Status updated", body = String),
        (status = 400, description = "Unknown task or malformed input", body = String)
    )
)]
async fn update_status_in_path<R: TaskRepository>(
    State(manager): SharedManager<R>,
    Path((task_id, is_done)): Path<(String, String)>,
) -> CommandResponse {
    set_status(&manager, &task_id, &is_done).await
}

/// Set the deadline of a task
#[utoipa::path(
    put,
    path = "/tasks/{task_id}",
    tag = TAG,
    params(
        ("task_id" = u64, Path, description = "Task ID"),
        DeadlineQuery
    ),
    responses(
        (status = 200, description = "Deadline set", body = String),
        (status = 400, description = "Unknown task or malformed input", body = String)
    )
)]
async fn update_deadline<R: TaskRepository>(
    State(manager): SharedManager<R>,
    Path(task_id): Path<String>,
    Query(query): Query<DeadlineQuery>,
) -> CommandResponse {
    let parsed = parse_task_id(&task_id)
        .and_then(|id| parse_deadline(&query.deadline).map(|deadline| (id, deadline)));

    match parsed {
        Ok((id, deadline)) => manager.set_deadline(id, deadline).await,
        Err(error) => rejected(error),
    }
}

async fn set_status<R: TaskRepository>(
    manager: &TaskManager<R>,
    task_id: &str,
    is_done: &str,
) -> CommandResponse {
    let parsed = parse_task_id(task_id).and_then(|id| parse_flag(is_done).map(|flag| (id, flag)));

    match parsed {
        Ok((id, flag)) => manager.check_task(id, flag).await,
        Err(error) => rejected(error),
    }
}

fn rejected(error: InputError) -> CommandResponse {
    tracing::debug!(%error, "Rejected request input");
    CommandResponse::from_error(&error)
}

fn json_listing(response: CommandResponse) -> Response {
    match response {
        CommandResponse::Success(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        failure => failure.into_response(),
    }
}
