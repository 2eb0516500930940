pub mod enhancement;
pub mod health;
pub mod status;

pub use enhancement::{enhance_prompt, enhancement_history, enhancement_styles};
pub use health::{health_check, readiness_check, root_info};
pub use status::{create_status_check, list_status_checks};
