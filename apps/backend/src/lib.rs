#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod forwarder;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod servicebus;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{ForwarderConfig, ServerConfig};
pub use domain::{InboundPayload, Round};
pub use error::AppError;
pub use forwarder::{forward, ForwardOutcome, Rejection};
pub use middleware::{RequestTrace, StructuredLogger, TraceSpan};
pub use servicebus::{QueueError, QueueMessage, QueueTransport, ServiceBusClient};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
