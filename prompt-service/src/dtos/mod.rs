pub mod enhancement;
pub mod status;

pub use enhancement::{
    EnhancePromptRequest, EnhancementHistoryParams, EnhancementResponse, StyleCatalogResponse,
    StyleInfo,
};
pub use status::{StatusCheckCreate, StatusCheckResponse};
