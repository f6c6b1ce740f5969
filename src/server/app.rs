use anyhow::{anyhow, Result};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{auth, health, projects, subprojects, tasks, users};
use crate::services::{ProjectService, SubprojectService, TaskService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub users: UserService,
    pub projects: ProjectService,
    pub subprojects: SubprojectService,
    pub tasks: TaskService,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        users: UserService::new(db.clone()),
        projects: ProjectService::new(db.clone()),
        subprojects: SubprojectService::new(db.clone()),
        tasks: TaskService::new(db.clone()),
        db,
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/auth/login", post(auth::login))
        // User management
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        // Project creation on behalf of a user (mirrors the old creation form)
        .route("/users/:id/projects/new", get(projects::new_project_draft))
        .route("/users/:id/projects", post(projects::create_project))
        // Project management
        .route("/projects", get(projects::list_projects))
        .route("/projects/:id", get(projects::get_project))
        .route("/projects/:id", put(projects::update_project))
        .route("/projects/:id", delete(projects::delete_project))
        .route("/projects/:id/overview", get(projects::project_overview))
        // Subproject management
        .route("/projects/:id/subprojects", get(subprojects::list_subprojects))
        .route(
            "/projects/:id/subprojects",
            post(subprojects::create_subproject),
        )
        .route(
            "/projects/:id/subprojects/:subproject_id",
            get(subprojects::get_subproject),
        )
        .route(
            "/projects/:id/subprojects/:subproject_id",
            put(subprojects::update_subproject),
        )
        .route(
            "/projects/:id/subprojects/:subproject_id",
            delete(subprojects::delete_subproject),
        )
        // Task management
        .route("/subprojects/:id/tasks", get(tasks::list_tasks))
        .route("/subprojects/:id/tasks", post(tasks::create_task))
        .route("/subprojects/:id/tasks/:task_id", get(tasks::get_task))
        .route("/subprojects/:id/tasks/:task_id", put(tasks::update_task))
        .route(
            "/subprojects/:id/tasks/:task_id",
            delete(tasks::delete_task),
        )
}
