use std::sync::Arc;

use crate::config::ForwarderConfig;
use crate::servicebus::QueueTransport;

/// Shared, read-only resources handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// Queue name and connection details, loaded once at startup
    pub forwarder: Arc<ForwarderConfig>,
    /// Long-lived queue client
    pub transport: Arc<dyn QueueTransport>,
}

impl AppState {
    pub fn new(forwarder: ForwarderConfig, transport: Arc<dyn QueueTransport>) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
            transport,
        }
    }
}
