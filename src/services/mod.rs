pub mod project_service;
pub mod subproject_service;
pub mod task_service;
pub mod user_service;

pub use project_service::*;
pub use subproject_service::*;
pub use task_service::*;
pub use user_service::*;
