pub mod auth;
pub mod health;
pub mod projects;
pub mod subprojects;
pub mod tasks;
pub mod users;
