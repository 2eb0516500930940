pub mod cors;
pub mod metrics;
pub mod tracing;

pub use cors::cors_layer;
pub use metrics::metrics_middleware;
pub use tracing::{REQUEST_ID_HEADER, make_request_span, request_id_middleware};
