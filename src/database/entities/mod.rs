pub mod projects;
pub mod subprojects;
pub mod tasks;
pub mod users;
