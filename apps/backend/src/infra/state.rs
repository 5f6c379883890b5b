use std::sync::Arc;

use crate::config::ForwarderConfig;
use crate::error::AppError;
use crate::servicebus::{QueueTransport, ServiceBusClient};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    forwarder: Option<ForwarderConfig>,
    transport: Option<Arc<dyn QueueTransport>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forwarder_config(mut self, config: ForwarderConfig) -> Self {
        self.forwarder = Some(config);
        self
    }

    /// Use `transport` instead of a Service Bus client built from the config.
    pub fn with_transport(mut self, transport: Arc<dyn QueueTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Without an explicit config the environment is read; missing values
    /// fail here, before any request is served.
    pub fn build(self) -> Result<AppState, AppError> {
        let config = match self.forwarder {
            Some(config) => config,
            None => ForwarderConfig::from_env()?,
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let client = ServiceBusClient::new(config.connection.clone(), config.sas_ttl)
                    .map_err(|e| AppError::config(format!("Failed to build queue client: {e}")))?;
                Arc::new(client) as Arc<dyn QueueTransport>
            }
        };

        Ok(AppState::new(config, transport))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
