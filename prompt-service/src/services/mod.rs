pub mod database;
pub mod enhancer;
pub mod memory;
pub mod store;
pub mod styles;

pub use database::PromptDb;
pub use enhancer::{Enhancement, PromptEnhancer};
pub use memory::MemoryStore;
pub use store::PromptStore;
pub use styles::EnhancementStyle;
