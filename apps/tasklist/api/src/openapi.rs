//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the TaskList API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaskList API",
        version = "0.1.0",
        description = "In-memory projects, tasks and deadlines"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_tasklist::ApiDoc)
    )
)]
pub struct ApiDoc;
