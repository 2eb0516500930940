pub mod assets;
pub mod health;
pub mod projects;
pub mod strategy;

pub use assets::{generate_asset, generate_complete_package};
pub use health::{api_health, health_check, readiness_check, root_info};
pub use projects::{create_project, get_project, list_projects};
pub use strategy::generate_strategy;
