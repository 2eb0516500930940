//! Persisted documents of the prompt service.

pub mod enhancement;
pub mod status_check;

pub use enhancement::EnhancementRecord;
pub use status_check::StatusCheck;
