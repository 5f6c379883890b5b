use std::env;
use std::time::Duration;

use crate::config::must_var;
use crate::error::AppError;
use crate::servicebus::ServiceBusConnection;

pub const CONNECTION_STRING_VAR: &str = "sbConnectionString";
pub const QUEUE_NAME_VAR: &str = "transactionQueueSbName";
pub const SAS_TTL_VAR: &str = "SAS_TOKEN_TTL_SECS";

const DEFAULT_SAS_TTL: Duration = Duration::from_secs(3600);
/// One year. Longer lifetimes are refused at startup.
pub const MAX_SAS_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Where eligible rounds are sent. Loaded once at startup and handed to
/// every forward call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    pub connection: ServiceBusConnection,
    pub queue_name: String,
    /// Lifetime of the SAS tokens minted for each send.
    pub sas_ttl: Duration,
}

impl ForwarderConfig {
    pub fn new(connection: ServiceBusConnection, queue_name: impl Into<String>) -> Self {
        Self {
            connection,
            queue_name: queue_name.into(),
            sas_ttl: DEFAULT_SAS_TTL,
        }
    }

    /// Read `sbConnectionString` and `transactionQueueSbName` (both required)
    /// plus the optional `SAS_TOKEN_TTL_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = must_var(&lookup, CONNECTION_STRING_VAR)?;
        let connection = ServiceBusConnection::parse(&raw)
            .map_err(|e| AppError::config(format!("Invalid '{CONNECTION_STRING_VAR}': {e}")))?;
        let queue_name = must_var(&lookup, QUEUE_NAME_VAR)?.trim().to_string();

        let sas_ttl = match lookup(SAS_TTL_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_SAS_TTL_SECS).contains(secs))
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    AppError::config(format!(
                        "'{SAS_TTL_VAR}' must be between 1 and {MAX_SAS_TTL_SECS} seconds, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_SAS_TTL,
        };

        Ok(Self {
            connection,
            queue_name,
            sas_ttl,
        })
    }
}
