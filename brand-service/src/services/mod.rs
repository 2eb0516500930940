pub mod assets;
pub mod database;
pub mod memory;
pub mod package;
pub mod store;
pub mod strategy;

pub use assets::AssetGenerator;
pub use database::BrandDb;
pub use memory::MemoryStore;
pub use package::{PackageGenerator, PackageOutcome, PACKAGE_ASSETS};
pub use store::BrandStore;
pub use strategy::StrategyGenerator;
