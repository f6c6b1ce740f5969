//! API integration tests
//!
//! End-to-end coverage of the REST endpoints against a scratch SQLite file.

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use portal::database::migrations::Migrator;
use portal::server::app::create_app;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Create a test server backed by a temporary database
async fn setup_test_server() -> Result<TestServer> {
    // Keep the file on disk past this function: dropping the NamedTempFile
    // would delete it, and later pool connections would reopen an empty db.
    let db_path = NamedTempFile::new()?.into_temp_path().keep()?;
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let db = Database::connect(&db_url).await?;
    Migrator::up(&db, None).await?;

    let app = create_app(db, Some("*")).await?;
    let server = TestServer::new(app)?;

    Ok(server)
}

async fn create_user(server: &TestServer, name: &str, password: &str, company_id: i64) -> Value {
    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "company_id": company_id,
            "user_name": name,
            "user_password": password
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = setup_test_server().await?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "project-portal");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_login_matches_exact_credentials_only() -> Result<()> {
    let server = setup_test_server().await?;
    create_user(&server, "alice", "secret", 7).await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "alice", "password": "secret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let user: Value = response.json();
    assert_eq!(user["user_name"], "alice");
    assert_eq!(user["company_id"], 7);
    // The stored password never appears in a response
    assert!(user.get("user_password").is_none());

    // Wrong password and unknown user are the same 401
    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "mallory", "password": "secret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_project_creation_inherits_company_from_acting_user() -> Result<()> {
    let server = setup_test_server().await?;
    let user = create_user(&server, "alice", "secret", 42).await;
    let user_id = user["user_id"].as_i64().unwrap();

    // Pre-populated draft mirrors the old creation form
    let response = server
        .get(&format!("/api/v1/users/{}/projects/new", user_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let draft: Value = response.json();
    assert_eq!(draft["company_id"], 42);
    assert_eq!(draft["is_complete"], false);

    let response = server
        .post(&format!("/api/v1/users/{}/projects", user_id))
        .json(&json!({
            "project_name": "Harbour upgrade",
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "total_estimated_cost": 50000.0,
            "total_assigned_employees": 10,
            "project_description": "Quay wall and dredging"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let project: Value = response.json();
    assert_eq!(project["company_id"], 42);
    assert_eq!(project["is_complete"], false);
    assert_eq!(project["project_name"], "Harbour upgrade");

    // Creating on behalf of a user that does not exist is a 404
    let response = server
        .post("/api/v1/users/9999/projects")
        .json(&json!({
            "project_name": "Ghost",
            "start_date": "2026-01-01",
            "end_date": "2026-02-01",
            "total_estimated_cost": 0.0,
            "total_assigned_employees": 0
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_projects_crud_api() -> Result<()> {
    let server = setup_test_server().await?;
    let user = create_user(&server, "alice", "secret", 7).await;
    let user_id = user["user_id"].as_i64().unwrap();

    let response = server
        .post(&format!("/api/v1/users/{}/projects", user_id))
        .json(&json!({
            "project_name": "Harbour upgrade",
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "total_estimated_cost": 50000.0,
            "total_assigned_employees": 10
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let project: Value = response.json();
    let project_id = project["project_id"].as_i64().unwrap();

    let response = server.get("/api/v1/projects").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let projects: Vec<Value> = response.json();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["project_id"], project_id);

    let response = server.get(&format!("/api/v1/projects/{}", project_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server
        .put(&format!("/api/v1/projects/{}", project_id))
        .json(&json!({
            "project_name": "Harbour upgrade phase 2",
            "start_date": "2026-01-01",
            "end_date": "2027-06-30",
            "total_estimated_cost": 80000.0,
            "total_assigned_employees": 12,
            "is_complete": true,
            "project_description": null
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["project_name"], "Harbour upgrade phase 2");
    assert_eq!(updated["is_complete"], true);

    let response = server
        .delete(&format!("/api/v1/projects/{}", project_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get(&format!("/api/v1/projects/{}", project_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

async fn seed_project(server: &TestServer, total_assigned_employees: i64) -> i64 {
    let user = create_user(server, "alice", "secret", 7).await;
    let user_id = user["user_id"].as_i64().unwrap();

    let response = server
        .post(&format!("/api/v1/users/{}/projects", user_id))
        .json(&json!({
            "project_name": "Harbour upgrade",
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "total_estimated_cost": 50000.0,
            "total_assigned_employees": total_assigned_employees
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let project: Value = response.json();
    project["project_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_subproject_priority_validation() -> Result<()> {
    let server = setup_test_server().await?;
    let project_id = seed_project(&server, 10).await;

    let subproject = json!({
        "subproject_name": "Dredging",
        "start_date": "2026-02-01",
        "end_date": "2026-05-01",
        "total_estimated_cost": 10000.0,
        "total_actual_cost": 2500.0,
        "total_assigned_employees": 4,
        "hours_allocated": 100,
        "priority": "HIGH",
        "total_actual_hours": 40
    });

    let response = server
        .post(&format!("/api/v1/projects/{}/subprojects", project_id))
        .json(&subproject)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Value = response.json();
    assert_eq!(created["priority"], "HIGH");

    // An unknown priority is rejected, naming the value
    let mut invalid = subproject.clone();
    invalid["priority"] = json!("URGENT");
    let response = server
        .post(&format!("/api/v1/projects/{}/subprojects", project_id))
        .json(&invalid)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("URGENT"));

    Ok(())
}

#[tokio::test]
async fn test_project_overview_aggregation() -> Result<()> {
    let server = setup_test_server().await?;
    let project_id = seed_project(&server, 10).await;

    for (name, cost, employees, allocated, actual) in [
        ("Dredging", 100.5, 4, 100, 40),
        ("Pier rebuild", 200.25, 7, 0, 25),
    ] {
        let response = server
            .post(&format!("/api/v1/projects/{}/subprojects", project_id))
            .json(&json!({
                "subproject_name": name,
                "start_date": "2026-02-01",
                "end_date": "2026-05-01",
                "total_estimated_cost": 10000.0,
                "total_actual_cost": cost,
                "total_assigned_employees": employees,
                "hours_allocated": allocated,
                "priority": "MEDIUM",
                "total_actual_hours": actual
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let response = server
        .get(&format!("/api/v1/projects/{}/overview", project_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let overview: Value = response.json();
    assert_eq!(overview["total_actual_cost"], 300.75);
    // (10 - 4) + (10 - 7)
    assert_eq!(overview["total_available_employees"], 9);
    assert_eq!(overview["start_date_display"], "2026-01-01");
    assert_eq!(overview["end_date_display"], "2026-12-31");

    let subs = overview["subprojects"].as_array().unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0]["progress_percentage"], 40.0);
    // Zero allocation reports zero progress instead of dividing by zero
    assert_eq!(subs[1]["progress_percentage"], 0.0);

    Ok(())
}

#[tokio::test]
async fn test_tasks_nested_under_subproject() -> Result<()> {
    let server = setup_test_server().await?;
    let project_id = seed_project(&server, 10).await;

    let response = server
        .post(&format!("/api/v1/projects/{}/subprojects", project_id))
        .json(&json!({
            "subproject_name": "Dredging",
            "start_date": "2026-02-01",
            "end_date": "2026-05-01",
            "total_estimated_cost": 10000.0,
            "total_actual_cost": 0.0,
            "total_assigned_employees": 4,
            "hours_allocated": 100,
            "priority": "LOW"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let subproject: Value = response.json();
    let subproject_id = subproject["subproject_id"].as_i64().unwrap();

    let response = server
        .post(&format!("/api/v1/subprojects/{}/tasks", subproject_id))
        .json(&json!({
            "task_name": "Survey seabed",
            "start_date": "2026-02-01",
            "end_date": "2026-02-14"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let task: Value = response.json();
    assert_eq!(task["is_complete"], false);
    let task_id = task["task_id"].as_i64().unwrap();

    let response = server
        .get(&format!("/api/v1/subprojects/{}/tasks", subproject_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let tasks: Vec<Value> = response.json();
    assert_eq!(tasks.len(), 1);

    let response = server
        .put(&format!(
            "/api/v1/subprojects/{}/tasks/{}",
            subproject_id, task_id
        ))
        .json(&json!({
            "task_name": "Survey seabed",
            "start_date": "2026-02-01",
            "end_date": "2026-02-14",
            "is_complete": true
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["is_complete"], true);

    // A task reached through the wrong subproject is a 404
    let response = server
        .get(&format!("/api/v1/subprojects/9999/tasks/{}", task_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}
